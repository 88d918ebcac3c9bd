mod crash;
mod flight;

pub use crash::aeroplane_crash_system;
pub use flight::flight_model_system;
