//! Ground / launch vehicle observer
use crate::{
    constants::{EARTH_ANGULAR_VEL_RAD, EARTH_MEAN_RADIUS_M},
    prelude::{Epoch, Error, Vector3},
};

/// [Observer] is a geodetic position on (or near) the spherical Earth
/// surface, rotating with it. Satellite states are obtained separately
/// through [crate::prelude::PositionSource]: the observer only composes
/// with a propagator, it is not one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Latitude (decimal degrees)
    pub latitude_deg: f64,

    /// Longitude (decimal degrees)
    pub longitude_deg: f64,

    /// Altitude above the mean Earth radius (meters)
    pub altitude_m: f64,

    /// [Epoch] at which `longitude_deg` is aligned with the inertial
    /// frame the satellites are propagated in
    pub reference: Epoch,
}

impl Observer {
    /// Builds an [Observer] from geodetic coordinates in decimal
    /// degrees and meters, aligned with the inertial frame at
    /// `reference`.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64, reference: Epoch) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
            reference,
        }
    }

    /// Position at `epoch`, in meters: the reference longitude carried
    /// around the pole at the Earth rotation rate.
    pub fn position_at(&self, epoch: Epoch) -> Vector3<f64> {
        let dt_s = (epoch - self.reference).to_seconds();
        let theta = self.longitude_deg.to_radians() + EARTH_ANGULAR_VEL_RAD * dt_s;

        let latitude_rad = self.latitude_deg.to_radians();
        let radius = EARTH_MEAN_RADIUS_M + self.altitude_m;

        Vector3::new(
            radius * latitude_rad.cos() * theta.cos(),
            radius * latitude_rad.cos() * theta.sin(),
            radius * latitude_rad.sin(),
        )
    }

    /// Unit line-of-sight vector from the observer towards `target_m`
    /// (meters) at `epoch`. [Error::CoincidentPositions] when the two
    /// positions coincide, the bearing being undefined there.
    pub fn direction_to(&self, epoch: Epoch, target_m: &Vector3<f64>) -> Result<Vector3<f64>, Error> {
        let line_of_sight = target_m - self.position_at(epoch);
        let range = line_of_sight.norm();
        if range == 0.0 {
            return Err(Error::CoincidentPositions);
        }
        Ok(line_of_sight / range)
    }

    /// Elevation (decimal degrees) of `target_m` above the local
    /// horizon at `epoch`, negative below it.
    pub fn elevation_deg(&self, epoch: Epoch, target_m: &Vector3<f64>) -> Result<f64, Error> {
        let position = self.position_at(epoch);
        // spherical Earth: zenith is the normalized position itself
        let zenith = position / position.norm();
        let direction = self.direction_to(epoch, target_m)?;
        Ok(zenith.dot(&direction).clamp(-1.0, 1.0).asin().to_degrees())
    }

    /// True when `target_m` stands at least `min_elevation_deg` above
    /// the local horizon at `epoch`.
    pub fn is_visible(
        &self,
        epoch: Epoch,
        target_m: &Vector3<f64>,
        min_elevation_deg: f64,
    ) -> Result<bool, Error> {
        Ok(self.elevation_deg(epoch, target_m)? >= min_elevation_deg)
    }

    /// Builds the direction set: one unit line-of-sight vector per
    /// target currently above the elevation mask. Targets below the
    /// mask are dropped, a target coincident with the observer is an
    /// error, never a silent NaN.
    pub fn sky_directions(
        &self,
        epoch: Epoch,
        targets_m: &[Vector3<f64>],
        min_elevation_deg: f64,
    ) -> Result<Vec<Vector3<f64>>, Error> {
        let mut directions = Vec::with_capacity(targets_m.len());
        for target in targets_m {
            if self.is_visible(epoch, target, min_elevation_deg)? {
                directions.push(self.direction_to(epoch, target)?);
            }
        }
        Ok(directions)
    }
}
