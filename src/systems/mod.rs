mod aeroplane;
mod controller;
pub mod physics;
mod walker;

pub use aeroplane::{aeroplane_crash_system, flight_model_system};
pub use controller::{flight_keyboard_system, walker_keyboard_system, LOOK_SPEED};
pub use physics::{
    check_ground_contact, ground_collision_system, physics_integrator_system, sim_clock_system,
    sync_transform_system,
};
pub use walker::{camera_basis, walker_look_system, walker_system};
