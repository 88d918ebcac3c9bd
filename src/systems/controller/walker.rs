use bevy::prelude::*;
use nalgebra::Vector2;

use super::flight::axis;
use crate::components::{PlayerController, WalkerInput};
use crate::resources::PhysicsConfig;

/// Turn rate of the U/O look keys [rad/s]
pub const LOOK_SPEED: f64 = 2.0;

/// IJKL walks, Space jumps and U/O turn the view left and right.
pub fn walker_keyboard_system(
    mut query: Query<(&mut WalkerInput, &PlayerController)>,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PhysicsConfig>,
) {
    let Ok((mut input, player)) = query.get_single_mut() else {
        return;
    };
    if !player.active {
        return;
    }

    input.movement = Vector2::new(
        axis(&keyboard, KeyCode::KeyJ, KeyCode::KeyL),
        axis(&keyboard, KeyCode::KeyK, KeyCode::KeyI),
    );
    // Only the press edge jumps; holding the key does not repeat
    let held = keyboard.pressed(KeyCode::Space);
    if held && !input.jump_held {
        input.jump = true;
    }
    input.jump_held = held;
    input.look_yaw +=
        axis(&keyboard, KeyCode::KeyU, KeyCode::KeyO) * LOOK_SPEED * config.timestep;
}
