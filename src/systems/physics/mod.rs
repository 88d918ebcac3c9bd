mod collision;
mod integrator;
mod transform;

pub use collision::{check_ground_contact, ground_collision_system};
pub use integrator::{physics_integrator_system, sim_clock_system};
pub use transform::sync_transform_system;
