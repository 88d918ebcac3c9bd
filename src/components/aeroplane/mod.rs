mod config;
mod controller;
mod state;

pub use config::AeroplaneConfig;
pub use controller::{AeroplaneController, FlightPhase};
pub use state::{FlightInput, FlightState};
