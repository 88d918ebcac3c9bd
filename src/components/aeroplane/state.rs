use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tick working state of the flight model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Throttle setting [0-1]
    pub throttle: f64,
    /// Clamped control inputs [-1, 1]
    pub roll_input: f64,
    pub pitch_input: f64,
    pub yaw_input: f64,
    pub throttle_input: f64,
    /// Speed along the nose, never negative [m/s]
    pub move_speed: f64,
    /// Current engine force [N]
    pub engine_power: f64,
    /// Bank angle relative to the horizon [rad]
    pub roll: f64,
    /// Nose angle relative to the horizon [rad]
    pub pitch: f64,
    /// Squared cosine between facing and direction of travel [0-1]
    pub aero_factor: f64,
    /// Turn assist from banking. Nothing drives this yet, so it stays 0.
    pub banked_turn_amount: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            throttle: 0.0,
            roll_input: 0.0,
            pitch_input: 0.0,
            yaw_input: 0.0,
            throttle_input: 0.0,
            move_speed: 0.0,
            engine_power: 0.0,
            roll: 0.0,
            pitch: 0.0,
            aero_factor: 0.0,
            banked_turn_amount: 0.0,
        }
    }
}

impl FlightState {
    pub fn with_throttle(throttle: f64) -> Self {
        Self {
            throttle: throttle.clamp(0.0, 1.0),
            ..Default::default()
        }
    }
}

/// Raw pilot input sampled once per fixed step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightInput {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub throttle: f64,
    pub air_brakes: bool,
}

impl FlightInput {
    pub fn new(roll: f64, pitch: f64, yaw: f64, throttle: f64) -> Self {
        Self {
            roll,
            pitch,
            yaw,
            throttle,
            air_brakes: false,
        }
    }

    pub fn with_air_brakes(mut self, air_brakes: bool) -> Self {
        self.air_brakes = air_brakes;
        self
    }
}
