use bevy::prelude::*;

use crate::components::{FlightInput, PlayerController};

/// Maps the keyboard onto the player aeroplane's control axes.
///
/// Arrow keys act as the stick (up pushes the nose down), A/D are the
/// rudder, W/S the throttle and B holds the air brakes.
pub fn flight_keyboard_system(
    mut query: Query<(&mut FlightInput, &PlayerController)>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    let Ok((mut input, player)) = query.get_single_mut() else {
        return;
    };
    if !player.active {
        return;
    }

    *input = FlightInput::new(
        axis(&keyboard, KeyCode::ArrowLeft, KeyCode::ArrowRight),
        axis(&keyboard, KeyCode::ArrowDown, KeyCode::ArrowUp),
        axis(&keyboard, KeyCode::KeyA, KeyCode::KeyD),
        axis(&keyboard, KeyCode::KeyS, KeyCode::KeyW),
    )
    .with_air_brakes(keyboard.pressed(KeyCode::KeyB));
}

/// -1, 0 or 1 from a pair of opposing keys.
pub(super) fn axis(keyboard: &ButtonInput<KeyCode>, negative: KeyCode, positive: KeyCode) -> f64 {
    let mut value = 0.0;
    if keyboard.pressed(negative) {
        value -= 1.0;
    }
    if keyboard.pressed(positive) {
        value += 1.0;
    }
    value
}
