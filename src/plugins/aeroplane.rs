use bevy::prelude::*;

use super::physics::{configure_simulation_sets, SimulationSet};
use crate::components::{
    AeroplaneController, CollisionComponent, FlightInput, FlightState, PlayerController,
};
use crate::resources::SimulationConfig;
use crate::systems::{aeroplane_crash_system, flight_model_system};

/// Spawns the player aeroplane and runs its flight model.
pub struct AeroplanePlugin {
    config: SimulationConfig,
}

impl AeroplanePlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    fn setup_aeroplane(mut commands: Commands, config: Res<SimulationConfig>) {
        let start = &config.start;
        let body = config
            .rigid_body
            .build()
            .with_position(start.position)
            .with_motion(start.velocity(), start.attitude());

        let mut controller = AeroplaneController::with_state(
            config.aeroplane.clone(),
            FlightState::with_throttle(start.throttle),
        );
        controller.bind(&body);

        info!(
            "Spawning aeroplane at {:.1?} heading {:.2} rad, {:.1} m/s",
            start.position, start.heading, start.speed
        );

        commands.spawn((
            controller,
            FlightInput::default(),
            body,
            CollisionComponent::new(config.rigid_body.collision_radius),
            PlayerController::new(),
            Transform::default(),
            Name::new("Aeroplane"),
        ));
    }
}

impl Default for AeroplanePlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Plugin for AeroplanePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());
        configure_simulation_sets(app);

        app.add_systems(Startup, Self::setup_aeroplane).add_systems(
            FixedUpdate,
            (
                aeroplane_crash_system.in_set(SimulationSet::Crash),
                flight_model_system.in_set(SimulationSet::Model),
            ),
        );
    }
}
