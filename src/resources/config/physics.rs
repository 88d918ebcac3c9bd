use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{ConfigError, DEFAULT_TIMESTEP, GRAVITY, MAX_TIMESTEP, MIN_TIMESTEP};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Integration parameters
    pub timestep: f64,
    pub max_velocity: f64,
    pub max_angular_velocity: f64,

    // Environment
    pub gravity: Vector3<f64>,
    /// Height of the flat ground plane [m]
    pub ground_height: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            max_velocity: 500.0,        // m/s
            max_angular_velocity: 50.0, // rad/s
            gravity: Vector3::new(0.0, -GRAVITY, 0.0),
            ground_height: 0.0,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TIMESTEP..=MAX_TIMESTEP).contains(&self.timestep) {
            return Err(ConfigError::ValidationError(format!(
                "timestep must lie in [{}, {}], got {}",
                MIN_TIMESTEP, MAX_TIMESTEP, self.timestep
            )));
        }
        if !(self.max_velocity > 0.0 && self.max_angular_velocity > 0.0) {
            return Err(ConfigError::ValidationError(
                "velocity limits must be positive".to_string(),
            ));
        }
        if !self.gravity.iter().all(|g| g.is_finite()) || !self.ground_height.is_finite() {
            return Err(ConfigError::ValidationError(
                "gravity and ground_height must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
