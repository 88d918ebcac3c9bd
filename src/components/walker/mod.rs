mod config;
mod controller;
mod state;

pub use config::WalkerConfig;
pub use controller::WalkerController;
pub use state::{CameraBasis, WalkerInput, WalkerState};
