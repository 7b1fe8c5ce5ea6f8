//! Physical obstruction geometry
#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::prelude::{AngularCap, Error};

/// [Obstruction] models the circular body (antenna shroud, vehicle
/// skin..) that may shadow part of the sky: a disc of fixed diameter
/// watched from the RF clearance distance at which it stops mattering.
/// Seen from the antenna, the disc subtends an [AngularCap]: signals
/// within that cap of the disc axis may be lost simultaneously.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Obstruction {
    /// Disc diameter D (meters)
    pub diameter_m: f64,

    /// RF clearance window l (meters)
    pub clearance_m: f64,
}

impl Default for Obstruction {
    /// Airframe of a small launch vehicle with a 0.4 m clearance window.
    fn default() -> Self {
        Self {
            diameter_m: 0.3,
            clearance_m: 0.4,
        }
    }
}

impl Obstruction {
    /// Builds an [Obstruction] from disc diameter and clearance window,
    /// both in meters and strictly positive.
    pub fn new(diameter_m: f64, clearance_m: f64) -> Result<Self, Error> {
        let obstruction = Self {
            diameter_m,
            clearance_m,
        };
        obstruction.validate()?;
        Ok(obstruction)
    }

    fn validate(&self) -> Result<(), Error> {
        let valid = self.diameter_m.is_finite()
            && self.clearance_m.is_finite()
            && self.diameter_m > 0.0
            && self.clearance_m > 0.0;
        if !valid {
            return Err(Error::InvalidObstruction);
        }
        Ok(())
    }

    /// [AngularCap] subtended by the obstruction:
    /// `cos α = l / sqrt(l² + (D/2)²)`.
    pub fn cap(&self) -> Result<AngularCap, Error> {
        self.validate()?;
        let half = self.diameter_m / 2.0;
        let hypot = (self.clearance_m * self.clearance_m + half * half).sqrt();
        AngularCap::from_cos_half_angle(self.clearance_m / hypot)
    }
}
