mod flight;
mod walker;

pub use flight::flight_keyboard_system;
pub use walker::{walker_keyboard_system, LOOK_SPEED};
