pub mod aeroplane;
pub mod collision;
pub mod player;
pub mod rigid_body;
pub mod walker;

pub use aeroplane::{AeroplaneConfig, AeroplaneController, FlightInput, FlightPhase, FlightState};
pub use collision::{CollisionComponent, CollisionEvent};
pub use player::PlayerController;
pub use rigid_body::RigidBodyComponent;
pub use walker::{CameraBasis, WalkerConfig, WalkerController, WalkerInput, WalkerState};
