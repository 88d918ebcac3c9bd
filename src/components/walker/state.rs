use bevy::prelude::*;
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::world_up;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkerState {
    pub grounded: bool,
    pub previously_grounded: bool,
    pub jumping: bool,
    /// Jump requested since the last fixed step
    pub jump_requested: bool,
    /// Normal of the surface under the walker, up when airborne
    pub ground_normal: Vector3<f64>,
    pub current_target_speed: f64,
}

impl WalkerState {
    pub fn new(target_speed: f64) -> Self {
        Self {
            grounded: false,
            previously_grounded: false,
            jumping: false,
            jump_requested: false,
            ground_normal: world_up(),
            current_target_speed: target_speed,
        }
    }
}

/// Player input for a walker. `movement.x` strafes, `movement.y` walks
/// forward.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkerInput {
    pub movement: Vector2<f64>,
    /// Set when jump was pressed; consumed by the walker
    pub jump: bool,
    /// Jump control state seen on the previous step
    pub jump_held: bool,
    /// Pending yaw rotation from the look controls [rad]
    pub look_yaw: f64,
}

impl Default for WalkerInput {
    fn default() -> Self {
        Self {
            movement: Vector2::zeros(),
            jump: false,
            jump_held: false,
            look_yaw: 0.0,
        }
    }
}

impl WalkerInput {
    pub fn new(strafe: f64, forward: f64) -> Self {
        Self {
            movement: Vector2::new(strafe, forward),
            ..Default::default()
        }
    }
}

/// Horizontal aiming frame movement is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vector3<f64>,
    pub right: Vector3<f64>,
}

impl CameraBasis {
    pub fn new(forward: Vector3<f64>, right: Vector3<f64>) -> Self {
        Self { forward, right }
    }
}
