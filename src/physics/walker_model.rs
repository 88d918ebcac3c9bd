use bevy::log::trace;
use nalgebra::{UnitQuaternion, Vector2, Vector3};

use super::traits::{GroundProbe, RigidBodyView};
use crate::components::{CameraBasis, WalkerConfig, WalkerState};
use crate::utils::{normalize_or_zero, project_on_plane, world_up};

/// One fixed step of the walker: ground check, then movement, then the
/// grounded/airborne drag and jump handling.
pub fn step<B, P>(
    state: &mut WalkerState,
    config: &WalkerConfig,
    movement: &Vector2<f64>,
    camera: &CameraBasis,
    body: &mut B,
    probe: &P,
) where
    B: RigidBodyView + ?Sized,
    P: GroundProbe + ?Sized,
{
    ground_check(state, config, body, probe);

    let has_input = movement.x.abs() > f64::EPSILON || movement.y.abs() > f64::EPSILON;
    if has_input {
        state.current_target_speed = config.forward_speed;
    }

    if has_input && state.grounded {
        apply_movement(state, movement, camera, body);
    }

    if state.grounded {
        body.set_drag(config.grounded_drag);

        if state.jump_requested {
            jump(state, config, body);
        }

        if !state.jumping && !has_input && body.velocity().norm() < config.rest_speed {
            body.sleep();
        }
    } else {
        body.set_drag(0.0);
    }

    state.jump_requested = false;
}

/// Sweeps a sphere from the capsule centre to just below its base.
pub fn ground_check<B, P>(state: &mut WalkerState, config: &WalkerConfig, body: &B, probe: &P)
where
    B: RigidBodyView + ?Sized,
    P: GroundProbe + ?Sized,
{
    state.previously_grounded = state.grounded;

    match probe.sphere_cast_down(
        &body.position(),
        config.capsule_radius,
        config.ground_check_reach(),
    ) {
        Some(normal) => {
            state.grounded = true;
            state.ground_normal = normal;
        }
        None => {
            state.grounded = false;
            state.ground_normal = world_up();
        }
    }

    if !state.previously_grounded && state.grounded && state.jumping {
        trace!("walker landed");
        state.jumping = false;
    }
}

/// Pushes the walker along the ground in the camera's frame until it
/// reaches the target speed.
pub fn apply_movement<B: RigidBodyView + ?Sized>(
    state: &WalkerState,
    movement: &Vector2<f64>,
    camera: &CameraBasis,
    body: &mut B,
) {
    let desired = camera.forward * movement.y + camera.right * movement.x;
    let desired = normalize_or_zero(&project_on_plane(&desired, &state.ground_normal))
        * state.current_target_speed;

    let target = state.current_target_speed;
    if body.velocity().norm_squared() < target * target {
        body.add_impulse(desired);
    }
}

fn jump<B: RigidBodyView + ?Sized>(state: &mut WalkerState, config: &WalkerConfig, body: &mut B) {
    body.set_drag(0.0);

    let velocity = body.velocity();
    body.set_velocity(Vector3::new(velocity.x, 0.0, velocity.z));
    body.add_impulse(Vector3::new(0.0, config.jump_force, 0.0));

    state.jumping = true;
}

/// Turns the walker about world up. On the ground the velocity turns with
/// it so strafing does not drift. Skipped while time is frozen.
pub fn rotate_view<B: RigidBodyView + ?Sized>(
    state: &WalkerState,
    body: &mut B,
    yaw_delta: f64,
    time_scale: f64,
) {
    if time_scale.abs() < f64::EPSILON {
        return;
    }

    let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw_delta);
    body.set_attitude(rotation * body.attitude());

    if state.grounded {
        body.set_velocity(rotation * body.velocity());
    }
}
