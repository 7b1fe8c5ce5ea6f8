#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::prelude::Obstruction;

fn default_min_elevation() -> f64 {
    0.0
}

fn default_nominal_min_uncovered() -> usize {
    5
}

fn default_low_min_uncovered() -> usize {
    3
}

/// Uncovered-count thresholds driving the
/// [crate::prelude::CoverageLevel] classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Thresholds {
    /// Strictly more satellites than this guaranteed unobstructed:
    /// nominal conditions.
    #[cfg_attr(feature = "serde", serde(default = "default_nominal_min_uncovered"))]
    pub nominal_min_uncovered: usize,

    /// Strictly more than this (but not nominal): low coverage.
    /// At or below: loss of signal must be assumed possible.
    #[cfg_attr(feature = "serde", serde(default = "default_low_min_uncovered"))]
    pub low_min_uncovered: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            nominal_min_uncovered: default_nominal_min_uncovered(),
            low_min_uncovered: default_low_min_uncovered(),
        }
    }
}

/// Survey configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Elevation mask (decimal degrees): satellites below this
    /// elevation are not considered in sight at all.
    #[cfg_attr(feature = "serde", serde(default = "default_min_elevation"))]
    pub min_elevation_deg: f64,

    /// Obstructing body geometry
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstruction: Obstruction,

    /// Classification [Thresholds]
    #[cfg_attr(feature = "serde", serde(default))]
    pub thresholds: Thresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_elevation_deg: default_min_elevation(),
            obstruction: Default::default(),
            thresholds: Default::default(),
        }
    }
}
