use std::f64::consts::TAU;

use nalgebra::{Rotation2, Vector2};

use crate::{
    constants::EARTH_GRAVITATION_MU_M3_S2,
    orbit::PositionSource,
    prelude::{Duration, Epoch, Unit, Vector3, SV},
};

pub mod tle;

/// Almanac-grade orbital elements of one satellite, reduced to a
/// circular orbit. Every field is required: there is no meaningful
/// partially-known element set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ephemeris {
    /// [SV] identity
    pub sv: SV,

    /// Reference [Epoch] of the elements
    pub epoch: Epoch,

    /// Semi-major axis (in meters), orbital radius of the circular orbit
    pub semi_major_axis_m: f64,

    /// Inclination (in radians)
    pub inclination_rad: f64,

    /// Longitude of the ascending node (in radians)
    pub raan_rad: f64,

    /// Argument of latitude at the reference epoch (in radians):
    /// angle from the ascending node to the satellite
    pub arg_latitude_rad: f64,
}

impl Ephemeris {
    /// Mean motion (in radians/s): `sqrt(μ / a³)`.
    pub fn mean_motion_rad_s(&self) -> f64 {
        (EARTH_GRAVITATION_MU_M3_S2 / self.semi_major_axis_m.powi(3)).sqrt()
    }

    /// Orbital period.
    pub fn period(&self) -> Duration {
        TAU / self.mean_motion_rad_s() * Unit::Second
    }

    /// Position at `epoch`, in meters: in-plane angle advanced by the
    /// mean motion since the reference epoch, then projected onto the
    /// equatorial plane and rotated to the ascending node.
    pub fn position_m(&self, epoch: Epoch) -> Vector3<f64> {
        let dt_s = (epoch - self.epoch).to_seconds();
        let u = self.mean_motion_rad_s() * dt_s + self.arg_latitude_rad;

        // orbital-plane coordinates, x along the ascending node
        let opx = self.semi_major_axis_m * u.cos();
        let opy = self.semi_major_axis_m * u.sin();

        let equatorial = Vector2::new(opx, opy * self.inclination_rad.cos());
        let xy = Rotation2::new(-self.raan_rad) * equatorial;

        Vector3::new(xy[0], xy[1], opy * self.inclination_rad.sin())
    }
}

impl PositionSource for Ephemeris {
    fn position_at(&self, epoch: Epoch) -> Vector3<f64> {
        self.position_m(epoch)
    }
}
