pub const GRAVITY: f64 = 9.81; // m/s^2

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 50.0; // Fixed physics step [s]
pub const MAX_TIMESTEP: f64 = 1.0 / 10.0;
pub const MIN_TIMESTEP: f64 = 1.0 / 1000.0;

// Vectors shorter than this normalize to zero
pub const NORMALIZE_EPSILON: f64 = 1e-5;
