//! Coverage solutions
use crate::prelude::{Epoch, Thresholds, Vector3};

/// Classification of one surveyed [Epoch], from the number of
/// satellites guaranteed to remain unobstructed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum CoverageLevel {
    /// Enough satellites stay in view whichever way the obstruction
    /// points.
    #[default]
    Nominal,
    /// Coverage may drop low enough to degrade the fix.
    Low,
    /// A single obstruction orientation can take out so many satellites
    /// that loss of signal must be assumed.
    Outage,
}

impl CoverageLevel {
    /// Classifies a worst-case `uncovered` satellite count.
    pub fn classify(uncovered: usize, thresholds: &Thresholds) -> Self {
        if uncovered > thresholds.nominal_min_uncovered {
            Self::Nominal
        } else if uncovered > thresholds.low_min_uncovered {
            Self::Low
        } else {
            Self::Outage
        }
    }
}

impl std::fmt::Display for CoverageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Nominal => write!(f, ""),
            Self::Low => write!(f, "Low coverage"),
            Self::Outage => write!(f, "No coverage"),
        }
    }
}

/// Coverage figures resolved for one [Epoch] of the survey.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSolution {
    /// [Epoch] of resolution
    pub epoch: Epoch,

    /// Satellites in sight, above the elevation mask
    pub visible: usize,

    /// Largest number of those a single obstruction could block at once
    pub max_coverable: usize,

    /// Satellites guaranteed to remain unobstructed:
    /// `visible - max_coverable`
    pub uncovered: usize,

    /// Obstruction axis achieving `max_coverable` (unit vector),
    /// None when nothing was in sight
    pub axis: Option<Vector3<f64>>,

    /// [CoverageLevel] classification of `uncovered`
    pub level: CoverageLevel,
}
