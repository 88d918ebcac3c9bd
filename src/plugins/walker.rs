use bevy::prelude::*;
use nalgebra::Vector3;

use super::physics::{configure_simulation_sets, SimulationSet};
use crate::components::{
    CollisionComponent, PlayerController, RigidBodyComponent, WalkerConfig, WalkerController,
    WalkerInput,
};
use crate::resources::SimulationConfig;
use crate::systems::{walker_look_system, walker_system};

/// Spawns a first-person walker standing on the ground plane.
pub struct WalkerPlugin {
    pub config: WalkerConfig,
    /// Horizontal spawn point; the walker is placed at the ground height
    pub spawn: Vector3<f64>,
    pub mass: f64,
}

impl Default for WalkerPlugin {
    fn default() -> Self {
        Self {
            config: WalkerConfig::default(),
            spawn: Vector3::zeros(),
            mass: 10.0,
        }
    }
}

impl WalkerPlugin {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Uses the `walker` section of a loaded configuration file.
    pub fn from_simulation_config(config: &SimulationConfig) -> Self {
        Self::new(config.walker.clone())
    }

    fn setup_walker(mut commands: Commands, config: WalkerConfig, spawn: Vector3<f64>, mass: f64) {
        let half_height = config.capsule_height / 2.0;
        let body = RigidBodyComponent::new(mass, Vector3::new(1.0, 1.0, 1.0))
            .with_position(spawn + Vector3::new(0.0, half_height, 0.0));

        commands.spawn((
            WalkerController::new(config),
            WalkerInput::default(),
            body,
            CollisionComponent::new(half_height),
            PlayerController::new(),
            Transform::default(),
            Name::new("Walker"),
        ));
    }
}

impl Plugin for WalkerPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        let spawn = self.spawn;
        let mass = self.mass;

        configure_simulation_sets(app);

        app.add_systems(Startup, move |commands: Commands| {
            Self::setup_walker(commands, config.clone(), spawn, mass)
        })
        .add_systems(
            FixedUpdate,
            (walker_look_system, walker_system)
                .chain()
                .in_set(SimulationSet::Model),
        );
    }
}
