use bevy::prelude::*;

use crate::components::{CameraBasis, RigidBodyComponent, WalkerController, WalkerInput};
use crate::physics::RigidBodyView;
use crate::resources::GroundPlane;
use crate::utils::{normalize_or_zero, project_on_plane, world_up};

/// Applies pending look input. Frozen virtual time drops it.
pub fn walker_look_system(
    mut query: Query<(&mut WalkerController, &mut WalkerInput, &mut RigidBodyComponent)>,
    time: Res<Time<Virtual>>,
) {
    let time_scale = time.relative_speed_f64();

    for (mut walker, mut input, mut body) in query.iter_mut() {
        if input.look_yaw != 0.0 {
            walker.rotate_view(&mut *body, input.look_yaw, time_scale);
            input.look_yaw = 0.0;
        }
    }
}

pub fn walker_system(
    mut query: Query<(&mut WalkerController, &mut WalkerInput, &mut RigidBodyComponent)>,
    ground: Res<GroundPlane>,
) {
    for (mut walker, mut input, mut body) in query.iter_mut() {
        if input.jump {
            walker.request_jump();
            input.jump = false;
        }

        let camera = camera_basis(&*body);
        walker.fixed_update(&input.movement, &camera, &mut *body, &*ground);
    }
}

/// Horizontal view frame of a first-person body.
pub fn camera_basis<B: RigidBodyView + ?Sized>(body: &B) -> CameraBasis {
    let up = world_up();
    CameraBasis::new(
        normalize_or_zero(&project_on_plane(&body.forward(), &up)),
        normalize_or_zero(&project_on_plane(&body.right(), &up)),
    )
}
