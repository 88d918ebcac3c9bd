mod commands;
pub mod flight_model;
mod traits;
pub mod walker_model;

pub use commands::FlightCommands;
pub use flight_model::{BaseDrag, FlightStep};
pub use traits::{BodySnapshot, GroundProbe, RigidBodyView};
