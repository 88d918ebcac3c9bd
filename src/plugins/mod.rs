mod aeroplane;
mod keyboard;
mod physics;
mod walker;

pub use aeroplane::AeroplanePlugin;
pub use keyboard::KeyboardControlPlugin;
pub use physics::{PhysicsPlugin, SimulationSet};
pub use walker::WalkerPlugin;
