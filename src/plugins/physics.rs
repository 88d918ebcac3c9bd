use bevy::prelude::*;

use crate::components::CollisionEvent;
use crate::resources::{GroundPlane, PhysicsConfig, SimClock};
use crate::systems::{
    ground_collision_system, physics_integrator_system, sim_clock_system, sync_transform_system,
};

/// Fixed step stages. Later stages see what earlier ones wrote.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SimulationSet {
    Input,
    Crash,
    Model,
    Integration,
    Collision,
}

pub(crate) fn configure_simulation_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            SimulationSet::Input,
            SimulationSet::Crash,
            SimulationSet::Model,
            SimulationSet::Integration,
            SimulationSet::Collision,
        )
            .chain(),
    );
}

#[derive(Default)]
pub struct PhysicsPlugin {
    config: PhysicsConfig,
}

impl PhysicsPlugin {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(GroundPlane::new(self.config.ground_height))
            .init_resource::<SimClock>()
            .add_event::<CollisionEvent>();

        configure_simulation_sets(app);

        app.add_systems(
            FixedUpdate,
            (
                (physics_integrator_system, sim_clock_system)
                    .chain()
                    .in_set(SimulationSet::Integration),
                (ground_collision_system, sync_transform_system)
                    .chain()
                    .in_set(SimulationSet::Collision),
            ),
        );

        app.insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));
    }
}
