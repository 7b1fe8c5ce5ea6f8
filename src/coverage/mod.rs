//! Worst-case angular cap coverage
use itertools::Itertools;
use log::debug;

use crate::{
    constants::{DEGENERATE_CHORD, UNIT_NORM_TOLERANCE},
    prelude::{Error, Vector3},
};

mod axis;
use axis::boundary_axes;


/// [AngularCap] describes a circular cap (cone) on the unit sphere:
/// the set of directions within a fixed half-angle α of some axis,
/// `{v : C·v ≥ cos α}` for unit `C`. Only the geometry is stored here,
/// the axis orientation is what [worst_case_coverage] optimizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularCap {
    /// cos(α), strictly inside (0, 1)
    cos_half_angle: f64,
    /// Longest chord two boundary points of the cap can span: 2·sin(α).
    /// Pairs further apart than this can never share a boundary circle.
    max_chord: f64,
}

impl AngularCap {
    /// Builds an [AngularCap] from `d = cos(α)`, where α is the cap
    /// half-angle. Fails with [Error::InvalidCapParameter] unless
    /// `0 < d < 1` (α strictly between 0 and 90°).
    pub fn from_cos_half_angle(d: f64) -> Result<Self, Error> {
        if !(d > 0.0 && d < 1.0) {
            return Err(Error::InvalidCapParameter(d));
        }
        Ok(Self {
            cos_half_angle: d,
            max_chord: 2.0 * (1.0 - d * d).sqrt(),
        })
    }

    /// Builds an [AngularCap] from its half-angle α in radians,
    /// which must lie strictly between 0 and π/2.
    pub fn from_half_angle_rad(alpha_rad: f64) -> Result<Self, Error> {
        Self::from_cos_half_angle(alpha_rad.cos())
    }

    /// cos(α)
    pub fn cos_half_angle(&self) -> f64 {
        self.cos_half_angle
    }

    /// Cap half-angle α in radians
    pub fn half_angle_rad(&self) -> f64 {
        self.cos_half_angle.acos()
    }

    /// Chord bound 2·sin(α)
    pub fn max_chord(&self) -> f64 {
        self.max_chord
    }

    /// True when `direction` lies within the cap of this half-angle
    /// centered on unit `axis`. The boundary is inclusive.
    pub fn covers(&self, axis: &Vector3<f64>, direction: &Vector3<f64>) -> bool {
        axis.dot(direction) >= self.cos_half_angle
    }
}

/// Outcome of one [worst_case_coverage] evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    /// Number of direction vectors considered
    pub visible: usize,

    /// Size of the largest subset a single cap can contain,
    /// always within [0, visible]
    pub max_coverable: usize,

    /// Unit axis achieving `max_coverable`. None only when the
    /// direction set was empty.
    pub axis: Option<Vector3<f64>>,
}

impl Coverage {
    /// Number of directions guaranteed to remain outside the cap,
    /// whichever way it is oriented.
    pub fn uncovered(&self) -> usize {
        self.visible - self.max_coverable
    }
}

/// Finds the orientation of a single [AngularCap] covering the greatest
/// number of the supplied unit directions, and returns that count along
/// with the winning axis.
///
/// Every vector must already be unit norm: the routine validates and
/// fails with [Error::NonUnitDirection], it never renormalizes.
///
/// Any cap covering two or more points can be rotated until two of the
/// covered points touch its boundary without dropping any other, so the
/// optimum is reached by enumerating, for each pair close enough to
/// share a boundary circle, the two axes placing both points on it.
/// O(n³) worst case, which is fine for the satellite counts in sight of
/// one observer (well under 20 for GPS-class constellations).
pub fn worst_case_coverage(
    directions: &[Vector3<f64>],
    cap: &AngularCap,
) -> Result<Coverage, Error> {
    for v in directions {
        let norm = v.norm();
        if (norm - 1.0).abs() > UNIT_NORM_TOLERANCE {
            return Err(Error::NonUnitDirection(norm));
        }
    }

    let total = directions.len();
    if total == 0 {
        return Ok(Coverage {
            visible: 0,
            max_coverable: 0,
            axis: None,
        });
    }

    let d = cap.cos_half_angle();

    // a degenerate cap always holds a single point
    let mut best = 1;
    let mut best_axis = directions[0];

    for ((i, p), (j, q)) in directions.iter().enumerate().tuple_combinations() {
        if best == total {
            // no pair can improve further
            break;
        }

        let chord = (q - p).norm();
        if chord >= cap.max_chord() {
            continue;
        }

        if chord < DEGENERATE_CHORD {
            // coincident pair: the midpoint construction is
            // ill-conditioned, but a cap centered on either point
            // trivially holds both
            let count = directions.iter().filter(|y| cap.covers(p, y)).count();
            if count > best {
                best = count;
                best_axis = *p;
            }
            continue;
        }

        let Some((xa, xb)) = boundary_axes(p, q, d, chord) else {
            continue;
        };

        for candidate in [xa, xb] {
            let axis = candidate / d;

            // p and q sit exactly on the boundary by construction
            let mut count = 2;
            for (idx, y) in directions.iter().enumerate() {
                if idx != i && idx != j && cap.covers(&axis, y) {
                    count += 1;
                }
            }

            if count > best {
                best = count;
                best_axis = axis;
            }
        }
    }

    debug!(
        "{}/{} directions coverable within {:.2}° half-angle",
        best,
        total,
        cap.half_angle_rad().to_degrees()
    );

    Ok(Coverage {
        visible: total,
        max_coverable: best,
        axis: Some(best_axis),
    })
}
