//! Cap axis construction for a boundary pair
use crate::prelude::Vector3;

/// Computes the two cap axes of magnitude `d` placing both `p` and `q`
/// on the boundary circle of a cap of half-angle acos(d): each returned
/// axis `X` satisfies `X·p = X·q = d²`, so `X/d` is the unit axis.
///
/// `chord = |q − p|` must be strictly positive and below the cap chord
/// bound 2·sqrt(1 − d²). Returns None when the midpoint geometry turns
/// out too ill-conditioned to trust.
pub(crate) fn boundary_axes(
    p: &Vector3<f64>,
    q: &Vector3<f64>,
    d: f64,
    chord: f64,
) -> Option<(Vector3<f64>, Vector3<f64>)> {
    // |p| = |q| = 1 makes the midpoint orthogonal to (q − p), so
    // (m, k) is an orthogonal basis of the plane holding the axis,
    // with |k| = |m|
    let m = (p + q) / 2.0;
    let k = ((q - p) / chord).cross(&m);

    let m_norm = m.norm();
    if m_norm < d {
        // guaranteed not to happen under the chord bound, kept as a
        // floating-point guard
        return None;
    }

    let theta = (d / m_norm).acos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    let raw_a = m * cos_theta + k * sin_theta;
    let raw_b = m * cos_theta - k * sin_theta;

    let norm_a = raw_a.norm();
    let norm_b = raw_b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    Some((raw_a * (d / norm_a), raw_b * (d / norm_b)))
}

#[cfg(test)]
mod test {
    use super::boundary_axes;
    use crate::prelude::Vector3;

    #[test]
    fn axes_place_both_points_on_boundary() {
        let p = Vector3::new(0.0, 0.0, 1.0);
        let q = Vector3::new(0.1_f64.sin(), 0.0, 0.1_f64.cos());

        let d = 0.3_f64.cos();
        let chord = (q - p).norm();

        let (xa, xb) = boundary_axes(&p, &q, d, chord).unwrap();

        for x in [xa, xb] {
            assert!((x.norm() - d).abs() < 1E-12);
            assert!((x.dot(&p) - d * d).abs() < 1E-12);
            assert!((x.dot(&q) - d * d).abs() < 1E-12);
        }
    }

    #[test]
    fn rejects_midpoint_shorter_than_d() {
        // 90° apart: midpoint norm is sqrt(0.5), below d
        let p = Vector3::new(1.0, 0.0, 0.0);
        let q = Vector3::new(0.0, 1.0, 0.0);
        let chord = (q - p).norm();

        assert!(boundary_axes(&p, &q, 0.95, chord).is_none());
    }
}
