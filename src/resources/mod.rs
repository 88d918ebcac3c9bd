pub mod config;
mod ground;
mod time;

pub use config::{PhysicsConfig, RigidBodyConfig, SimulationConfig, StartConfig};
pub use ground::GroundPlane;
pub use time::SimClock;
