use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Sent when a body first touches the ground.
#[derive(Event, Debug, Clone)]
pub struct CollisionEvent {
    /// Entity that collided
    pub entity: Entity,
    /// Point of impact in space
    pub impact_point: Vector3<f64>,
    /// Surface normal at impact point
    pub normal: Vector3<f64>,
    /// Penetration depth
    pub penetration_depth: f64,
}

/// Sphere collider for ground contact.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionComponent {
    /// Distance from the body origin to its lowest point [m]
    pub radius: f64,
    /// Whether the body touched the ground last step
    #[serde(skip)]
    pub in_contact: bool,
    #[serde(skip)]
    pub collision_count: u32,
    /// Simulation time of the last contact [s]
    #[serde(skip)]
    pub last_collision_time: f64,
}

impl Default for CollisionComponent {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl CollisionComponent {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            in_contact: false,
            collision_count: 0,
            last_collision_time: 0.0,
        }
    }

    pub fn register_collision(&mut self, time: f64) {
        self.collision_count += 1;
        self.last_collision_time = time;
    }
}
