use bevy::prelude::*;
use nalgebra::Vector2;

use super::{CameraBasis, WalkerConfig, WalkerState};
use crate::physics::{walker_model, GroundProbe, RigidBodyView};

/// First-person character driven through a rigid body.
#[derive(Component, Debug, Clone)]
pub struct WalkerController {
    config: WalkerConfig,
    state: WalkerState,
}

impl WalkerController {
    pub fn new(config: WalkerConfig) -> Self {
        let state = WalkerState::new(config.forward_speed);
        Self { config, state }
    }

    /// Latches a jump for the next fixed step.
    pub fn request_jump(&mut self) {
        if !self.state.jump_requested {
            self.state.jump_requested = true;
        }
    }

    pub fn rotate_view<B: RigidBodyView + ?Sized>(
        &mut self,
        body: &mut B,
        yaw_delta: f64,
        time_scale: f64,
    ) {
        walker_model::rotate_view(&self.state, body, yaw_delta, time_scale);
    }

    pub fn fixed_update<B, P>(
        &mut self,
        movement: &Vector2<f64>,
        camera: &CameraBasis,
        body: &mut B,
        probe: &P,
    ) where
        B: RigidBodyView + ?Sized,
        P: GroundProbe + ?Sized,
    {
        walker_model::step(
            &mut self.state,
            &self.config,
            movement,
            camera,
            body,
            probe,
        );
    }

    pub fn state(&self) -> &WalkerState {
        &self.state
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn is_jumping(&self) -> bool {
        self.state.jumping
    }
}
