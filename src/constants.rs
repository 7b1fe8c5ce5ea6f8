/// Earth angular velocity, in WGS84 frame rad/s
pub const EARTH_ANGULAR_VEL_RAD: f64 = 7.2921151467E-5;

/// Earth gravitational constant (m^3 s-2)
pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986004E14;

/// Earth mean radius (meters), spherical model
pub const EARTH_MEAN_RADIUS_M: f64 = 6367.5E3;

/// Direction vectors are rejected when their norm deviates
/// from 1 by more than this tolerance.
pub const UNIT_NORM_TOLERANCE: f64 = 1.0E-6;

/// Below this chord length two directions are considered coincident
/// and never used to build a boundary axis.
pub const DEGENERATE_CHORD: f64 = 1.0E-9;
