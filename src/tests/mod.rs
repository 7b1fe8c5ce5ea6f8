//! Shared test helpers
use std::f64::consts::TAU;
use std::sync::Once;

use log::LevelFilter;
use nalgebra::{Rotation3, Vector3};
use rand::{rngs::SmallRng, Rng};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Unit vector at azimuth `theta`, colatitude `psi` (radians)
pub fn sphere_to_rect(theta: f64, psi: f64) -> Vector3<f64> {
    Vector3::new(
        psi.sin() * theta.cos(),
        psi.sin() * theta.sin(),
        psi.cos(),
    )
}

/// ±x, ±y, ±z: every pairwise separation is 90° or 180°
pub fn octahedron() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 0.0, -1.0),
    ]
}

/// Uniform random unit vector
pub fn random_unit(rng: &mut SmallRng) -> Vector3<f64> {
    let z = rng.random_range(-1.0..1.0_f64);
    let theta = rng.random_range(0.0..TAU);
    let s = (1.0 - z * z).sqrt();
    Vector3::new(s * theta.cos(), s * theta.sin(), z)
}

/// Random rotation of the whole sphere
pub fn random_rotation(rng: &mut SmallRng) -> Rotation3<f64> {
    Rotation3::from_euler_angles(
        rng.random_range(0.0..TAU),
        rng.random_range(0.0..TAU),
        rng.random_range(0.0..TAU),
    )
}

/// `count` directions drawn within `half_angle_rad` of `axis` (unit)
pub fn cluster(
    axis: Vector3<f64>,
    half_angle_rad: f64,
    count: usize,
    rng: &mut SmallRng,
) -> Vec<Vector3<f64>> {
    // any unit vector not parallel to the axis completes a basis
    let helper = if axis[0].abs() < 0.9 {
        Vector3::new(1.0, 0.0, 0.0)
    } else {
        Vector3::new(0.0, 1.0, 0.0)
    };
    let u = axis.cross(&helper).normalize();
    let v = axis.cross(&u);

    (0..count)
        .map(|_| {
            let offset = rng.random_range(0.0..half_angle_rad);
            let azimuth = rng.random_range(0.0..TAU);
            axis * offset.cos() + (u * azimuth.cos() + v * azimuth.sin()) * offset.sin()
        })
        .collect()
}
