use crate::prelude::{Epoch, Vector3};

/// Any position provider should implement the [PositionSource] trait:
/// given an instant, report where the target is, in meters, in the
/// shared inertial frame the [crate::prelude::Observer] rotates in.
///
/// The survey driver is polymorphic over this capability, so satellite
/// states may come from the built-in circular [crate::prelude::Ephemeris],
/// from a precise external propagator, or from a lookup table.
pub trait PositionSource {
    /// Position of the target at `epoch`, in meters.
    fn position_at(&self, epoch: Epoch) -> Vector3<f64>;
}
