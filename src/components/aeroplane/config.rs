use serde::{Deserialize, Serialize};

use crate::utils::ConfigError;

/// Tuning constants of the arcade flight model. Fixed once the aeroplane
/// is spawned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroplaneConfig {
    /// Engine force at full throttle [N]
    pub max_engine_power: f64,
    /// Lift generated per unit of squared forward speed
    pub lift: f64,
    /// Forward speed at which lift has fully tapered out [m/s]
    pub zero_lift_speed: f64,
    /// Strength of roll input
    pub roll_effect: f64,
    /// Strength of pitch input
    pub pitch_effect: f64,
    /// Strength of yaw input
    pub yaw_effect: f64,
    /// Turn produced by banking
    pub banked_turn_effect: f64,
    /// How strongly the aeroplane weathercocks into its direction of travel
    pub aerodynamic_effect: f64,
    /// Drag multiplier while the air brakes are out
    pub air_brakes_effect: f64,
    /// Throttle travel per second at full throttle input
    pub throttle_change_speed: f64,
    /// Extra linear drag per m/s of airspeed
    pub drag_increase_factor: f64,
}

impl Default for AeroplaneConfig {
    fn default() -> Self {
        Self {
            max_engine_power: 40.0,
            lift: 0.002,
            zero_lift_speed: 300.0,
            roll_effect: 1.0,
            pitch_effect: 1.0,
            yaw_effect: 0.2,
            banked_turn_effect: 0.5,
            aerodynamic_effect: 0.02,
            air_brakes_effect: 3.0,
            throttle_change_speed: 0.3,
            drag_increase_factor: 0.001,
        }
    }
}

impl AeroplaneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("max_engine_power", self.max_engine_power),
            ("lift", self.lift),
            ("roll_effect", self.roll_effect),
            ("pitch_effect", self.pitch_effect),
            ("yaw_effect", self.yaw_effect),
            ("banked_turn_effect", self.banked_turn_effect),
            ("aerodynamic_effect", self.aerodynamic_effect),
            ("drag_increase_factor", self.drag_increase_factor),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !(self.zero_lift_speed.is_finite() && self.zero_lift_speed > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "zero_lift_speed must be positive, got {}",
                self.zero_lift_speed
            )));
        }
        if !(self.throttle_change_speed.is_finite() && self.throttle_change_speed > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "throttle_change_speed must be positive, got {}",
                self.throttle_change_speed
            )));
        }
        if !(self.air_brakes_effect.is_finite() && self.air_brakes_effect >= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "air_brakes_effect must be at least 1, got {}",
                self.air_brakes_effect
            )));
        }

        Ok(())
    }
}
