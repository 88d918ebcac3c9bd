use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{AeroplaneConfig, FlightInput, FlightState};
use crate::physics::{flight_model, BaseDrag, FlightCommands, RigidBodyView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    Flying,
    /// Terminal: entered on the first collision, never left.
    Crashed,
}

/// Drives a rigid body with the arcade flight model.
#[derive(Component, Debug, Clone)]
pub struct AeroplaneController {
    config: AeroplaneConfig,
    state: FlightState,
    base_drag: Option<BaseDrag>,
    phase: FlightPhase,
}

impl AeroplaneController {
    pub fn new(config: AeroplaneConfig) -> Self {
        Self::with_state(config, FlightState::default())
    }

    pub fn with_state(config: AeroplaneConfig, state: FlightState) -> Self {
        Self {
            config,
            state,
            base_drag: None,
            phase: FlightPhase::Flying,
        }
    }

    /// Records the body's starting drag coefficients. Called implicitly on
    /// the first update if the host did not bind earlier.
    pub fn bind<B: RigidBodyView + ?Sized>(&mut self, body: &B) {
        self.base_drag = Some(BaseDrag::capture(body));
    }

    /// Runs one fixed step against `body` and returns the commands that
    /// were applied, or `None` once crashed.
    pub fn fixed_update<B: RigidBodyView + ?Sized>(
        &mut self,
        input: &FlightInput,
        body: &mut B,
        dt: f64,
    ) -> Option<FlightCommands> {
        if self.is_crashed() {
            return None;
        }

        let base = *self.base_drag.get_or_insert_with(|| BaseDrag::capture(body));
        let step = flight_model::step(
            &self.state,
            input,
            &self.config,
            &base,
            &body.snapshot(),
            dt,
        );

        step.commands.apply_to(body);
        self.state = step.state;

        Some(step.commands)
    }

    /// Collision notification. Returns true on the transition into the
    /// crashed phase.
    pub fn crash(&mut self) -> bool {
        if self.is_crashed() {
            return false;
        }
        self.phase = FlightPhase::Crashed;
        true
    }

    pub fn is_crashed(&self) -> bool {
        self.phase == FlightPhase::Crashed
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn config(&self) -> &AeroplaneConfig {
        &self.config
    }

    pub fn base_drag(&self) -> Option<BaseDrag> {
        self.base_drag
    }
}
