use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// The cap parameter is cos(α) for a half-angle α strictly between
    /// 0 and 90°, so it must lie strictly inside (0, 1). It is never
    /// clamped: out-of-range values abort the call.
    #[error("cap parameter must lie strictly inside (0, 1), got {0}")]
    InvalidCapParameter(f64),

    /// Obstruction clearance and diameter must both be strictly positive
    /// and finite to define a cap half-angle.
    #[error("invalid obstruction geometry")]
    InvalidObstruction,

    /// A supplied direction vector is not unit norm within tolerance.
    /// We never renormalize silently: a caller-side normalization bug
    /// should surface here, not be masked.
    #[error("direction vector is not unit norm: |v| = {0}")]
    NonUnitDirection(f64),

    /// Observer and target occupy the same position, the line of sight
    /// is undefined.
    #[error("observer coincides with target: line of sight undefined")]
    CoincidentPositions,
}
