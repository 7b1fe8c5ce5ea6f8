#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod constants;
mod coverage;
mod ephemeris;
mod error;
mod observer;
mod obstruction;
mod orbit;
mod solutions;
mod survey;

#[cfg(test)]
mod tests;

// pub export
pub use error::Error;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, Thresholds};
    pub use crate::coverage::{worst_case_coverage, AngularCap, Coverage};
    pub use crate::ephemeris::{
        tle::{parse_almanac, TleError},
        Ephemeris,
    };
    pub use crate::error::Error;
    pub use crate::observer::Observer;
    pub use crate::obstruction::Obstruction;
    pub use crate::orbit::PositionSource;
    pub use crate::solutions::{CoverageLevel, CoverageSolution};
    pub use crate::survey::{downtime_ratio, DirectionCache, Survey};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale, TimeSeries, Unit};
    pub use nalgebra::Vector3;
}
