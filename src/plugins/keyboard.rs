use bevy::prelude::*;

use super::physics::{configure_simulation_sets, SimulationSet};
use crate::systems::{flight_keyboard_system, walker_keyboard_system};

/// Drives the player-controlled aeroplane and walker from the keyboard.
pub struct KeyboardControlPlugin;

impl Plugin for KeyboardControlPlugin {
    fn build(&self, app: &mut App) {
        configure_simulation_sets(app);

        app.init_resource::<ButtonInput<KeyCode>>().add_systems(
            FixedUpdate,
            (flight_keyboard_system, walker_keyboard_system).in_set(SimulationSet::Input),
        );
    }
}
