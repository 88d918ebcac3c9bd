use serde::{Deserialize, Serialize};

use crate::utils::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Target speed when walking [m/s]
    pub forward_speed: f64,
    /// Upward impulse of a jump [N s]
    pub jump_force: f64,
    /// Extra reach of the ground check below the capsule [m]
    pub ground_check_distance: f64,
    pub capsule_radius: f64,
    pub capsule_height: f64,
    /// Linear drag while standing on the ground
    pub grounded_drag: f64,
    /// Below this speed an idle walker is put to sleep [m/s]
    pub rest_speed: f64,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            forward_speed: 8.0,
            jump_force: 30.0,
            ground_check_distance: 0.01,
            capsule_radius: 0.5,
            capsule_height: 2.0,
            grounded_drag: 5.0,
            rest_speed: 1.0,
        }
    }
}

impl WalkerConfig {
    /// Distance the ground check sphere travels from the capsule centre.
    pub fn ground_check_reach(&self) -> f64 {
        (self.capsule_height / 2.0 - self.capsule_radius) + self.ground_check_distance
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("forward_speed", self.forward_speed),
            ("jump_force", self.jump_force),
            ("ground_check_distance", self.ground_check_distance),
            ("grounded_drag", self.grounded_drag),
            ("rest_speed", self.rest_speed),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !(self.capsule_radius.is_finite() && self.capsule_radius > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "capsule_radius must be positive, got {}",
                self.capsule_radius
            )));
        }
        if !(self.capsule_height.is_finite() && self.capsule_height >= 2.0 * self.capsule_radius)
        {
            return Err(ConfigError::ValidationError(format!(
                "capsule_height ({}) must be at least twice capsule_radius ({})",
                self.capsule_height, self.capsule_radius
            )));
        }

        Ok(())
    }
}
