use bevy::log::trace;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::commands::FlightCommands;
use super::traits::{BodySnapshot, RigidBodyView};
use crate::components::{AeroplaneConfig, FlightInput, FlightState};
use crate::utils::{
    clamp01, inverse_lerp, lerp_vector, look_rotation, normalize_or_zero, slerp_clamped, world_up,
    NORMALIZE_EPSILON,
};

/// Drag coefficients of the body before the flight model started rewriting
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseDrag {
    pub drag: f64,
    pub angular_drag: f64,
}

impl BaseDrag {
    pub fn new(drag: f64, angular_drag: f64) -> Self {
        Self { drag, angular_drag }
    }

    pub fn capture<B: RigidBodyView + ?Sized>(body: &B) -> Self {
        Self::new(body.drag(), body.angular_drag())
    }
}

/// Result of one tick: the next state and the side effects to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightStep {
    pub state: FlightState,
    pub commands: FlightCommands,
}

/// Velocity and rotation nudge from the aerodynamic alignment stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    pub velocity: Vector3<f64>,
    pub attitude: Option<UnitQuaternion<f64>>,
}

/// Runs the flight model stages in order over a snapshot of the body.
///
/// Stages: input clamping, roll/pitch estimation, forward speed, throttle,
/// drag, aerodynamic alignment, linear forces, torque. Later stages read
/// what earlier ones wrote, so the order is fixed. Body axes are taken from
/// the snapshot throughout; lift uses the velocity after alignment.
pub fn step(
    prev: &FlightState,
    input: &FlightInput,
    config: &AeroplaneConfig,
    base: &BaseDrag,
    body: &BodySnapshot,
    dt: f64,
) -> FlightStep {
    let mut state = *prev;

    clamp_inputs(&mut state, input);
    update_attitude_angles(&mut state, body);
    state.move_speed = forward_speed(body);
    control_throttle(&mut state, config, dt);

    let (drag, angular_drag) = drag_coefficients(
        body.velocity.norm(),
        state.move_speed,
        input.air_brakes,
        config,
        base,
    );

    let alignment = aerodynamic_alignment(&mut state, config, body, dt);
    let velocity = alignment.map_or(body.velocity, |a| a.velocity);

    let force = linear_force(&state, config, body, &velocity);
    let torque = control_torque(&state, config, body);

    trace!(
        "flight tick: throttle={:.3} speed={:.2} aero={:.3} roll={:.3} pitch={:.3}",
        state.throttle,
        state.move_speed,
        state.aero_factor,
        state.roll,
        state.pitch
    );

    FlightStep {
        state,
        commands: FlightCommands {
            drag,
            angular_drag,
            velocity: alignment.map(|a| a.velocity),
            attitude: alignment.and_then(|a| a.attitude),
            force,
            torque,
        },
    }
}

pub fn clamp_inputs(state: &mut FlightState, input: &FlightInput) {
    state.roll_input = input.roll.clamp(-1.0, 1.0);
    state.pitch_input = input.pitch.clamp(-1.0, 1.0);
    state.yaw_input = input.yaw.clamp(-1.0, 1.0);
    state.throttle_input = input.throttle.clamp(-1.0, 1.0);
}

/// Roll and pitch against the horizon. A body pointing straight up or down
/// has no horizontal heading, so the previous angles are kept.
pub fn update_attitude_angles(state: &mut FlightState, body: &BodySnapshot) {
    let mut flat_forward = body.forward();
    flat_forward.y = 0.0;

    if let Some(flat_forward) = flat_forward.try_normalize(NORMALIZE_EPSILON) {
        let local_flat_forward = body.to_local(&flat_forward);
        state.pitch = local_flat_forward.y.atan2(local_flat_forward.z);

        let flat_right = world_up().cross(&flat_forward);
        let local_flat_right = body.to_local(&flat_right);
        state.roll = local_flat_right.y.atan2(local_flat_right.x);
    }
}

/// Speed along the nose. Sliding sideways or backwards counts as zero.
pub fn forward_speed(body: &BodySnapshot) -> f64 {
    body.to_local(&body.velocity).z.max(0.0)
}

pub fn control_throttle(state: &mut FlightState, config: &AeroplaneConfig, dt: f64) {
    state.throttle =
        clamp01(state.throttle + state.throttle_input * dt * config.throttle_change_speed);
    state.engine_power = state.throttle * config.max_engine_power;
}

/// Linear drag grows with airspeed and is multiplied while the air brakes
/// are out. Angular drag grows with forward speed.
pub fn drag_coefficients(
    speed: f64,
    move_speed: f64,
    air_brakes: bool,
    config: &AeroplaneConfig,
    base: &BaseDrag,
) -> (f64, f64) {
    let drag = base.drag + speed * config.drag_increase_factor;
    let drag = if air_brakes {
        drag * config.air_brakes_effect
    } else {
        drag
    };

    (drag, base.angular_drag * move_speed)
}

/// Bends the velocity toward the nose and turns the nose toward the
/// velocity. Does nothing, and leaves `aero_factor` untouched, when the body
/// is at rest.
pub fn aerodynamic_alignment(
    state: &mut FlightState,
    config: &AeroplaneConfig,
    body: &BodySnapshot,
    dt: f64,
) -> Option<Alignment> {
    let speed = body.velocity.norm();
    if speed <= 0.0 {
        return None;
    }

    let forward = body.forward();
    let alignment = forward.dot(&(body.velocity / speed));
    state.aero_factor = clamp01(alignment * alignment);

    let velocity = lerp_vector(
        &body.velocity,
        &(forward * state.move_speed),
        state.aero_factor * state.move_speed * config.aerodynamic_effect * dt,
    );

    let attitude = look_rotation(&velocity, &body.up())
        .map(|target| slerp_clamped(&body.attitude, &target, config.aerodynamic_effect * dt));

    Some(Alignment { velocity, attitude })
}

/// Lift magnitude: full strength near standstill, tapering to zero at the
/// zero-lift speed, and scaled by how well the body is aligned with its
/// motion.
pub fn lift_power(state: &FlightState, config: &AeroplaneConfig) -> f64 {
    let zero_lift_factor = inverse_lerp(config.zero_lift_speed, 0.0, state.move_speed);
    state.move_speed * state.move_speed * config.lift * zero_lift_factor * state.aero_factor
}

/// Engine thrust along the nose plus lift at right angles to the velocity.
///
/// Velocity parallel to the wings gives no usable lift direction; the lift
/// term is then zero.
pub fn linear_force(
    state: &FlightState,
    config: &AeroplaneConfig,
    body: &BodySnapshot,
    velocity: &Vector3<f64>,
) -> Vector3<f64> {
    let thrust = body.forward() * state.engine_power;
    let lift_direction = normalize_or_zero(&velocity.cross(&body.right()));

    thrust + lift_direction * lift_power(state, config)
}

/// Control torque, scaled by forward speed and alignment so the controls
/// go slack when slow or stalled.
pub fn control_torque(
    state: &FlightState,
    config: &AeroplaneConfig,
    body: &BodySnapshot,
) -> Vector3<f64> {
    let mut torque = Vector3::zeros();
    torque += body.right() * (state.pitch_input * config.pitch_effect);
    torque += body.up() * (state.yaw_input * config.yaw_effect);
    torque += body.forward() * (-state.roll_input * config.roll_effect);
    torque += body.up() * (state.banked_turn_amount * config.banked_turn_effect);

    torque * (state.move_speed * state.aero_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_6;

    fn level(velocity: Vector3<f64>) -> BodySnapshot {
        BodySnapshot::new(velocity, UnitQuaternion::identity())
    }

    #[test]
    fn test_inputs_are_clamped() {
        let mut state = FlightState::default();
        clamp_inputs(&mut state, &FlightInput::new(3.0, -7.0, 0.25, -1.5));

        assert_eq!(state.roll_input, 1.0);
        assert_eq!(state.pitch_input, -1.0);
        assert_eq!(state.yaw_input, 0.25);
        assert_eq!(state.throttle_input, -1.0);
    }

    #[test]
    fn test_nose_up_pitch_and_right_bank_roll() {
        let mut state = FlightState::default();

        let nose_up = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_6);
        update_attitude_angles(&mut state, &BodySnapshot::new(Vector3::zeros(), nose_up));
        assert_relative_eq!(state.pitch, -FRAC_PI_6, epsilon = 1e-12);
        assert_relative_eq!(state.roll, 0.0, epsilon = 1e-12);

        let right_bank = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -FRAC_PI_6);
        update_attitude_angles(&mut state, &BodySnapshot::new(Vector3::zeros(), right_bank));
        assert_relative_eq!(state.pitch, 0.0, epsilon = 1e-12);
        assert_relative_eq!(state.roll, FRAC_PI_6, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_speed_ignores_backward_motion() {
        assert_relative_eq!(forward_speed(&level(Vector3::new(3.0, 1.0, 40.0))), 40.0);
        assert_eq!(forward_speed(&level(Vector3::new(0.0, 0.0, -40.0))), 0.0);
        assert_eq!(forward_speed(&level(Vector3::new(25.0, 0.0, 0.0))), 0.0);
    }

    #[test]
    fn test_drag_coefficients() {
        let config = AeroplaneConfig::default();
        let base = BaseDrag::new(0.1, 0.05);

        let (drag, angular_drag) = drag_coefficients(100.0, 80.0, false, &config, &base);
        assert_relative_eq!(drag, 0.1 + 100.0 * 0.001);
        assert_relative_eq!(angular_drag, 0.05 * 80.0);

        let (braked, _) = drag_coefficients(100.0, 80.0, true, &config, &base);
        assert_relative_eq!(braked, (0.1 + 100.0 * 0.001) * 3.0);
    }

    #[test]
    fn test_alignment_bends_sideslip_toward_nose() {
        let config = AeroplaneConfig::default();
        let body = level(Vector3::new(10.0, 0.0, 100.0));
        let mut state = FlightState {
            move_speed: forward_speed(&body),
            ..Default::default()
        };

        let alignment = aerodynamic_alignment(&mut state, &config, &body, 0.02).unwrap();

        let cos = 100.0 / body.velocity.norm();
        assert_relative_eq!(state.aero_factor, cos * cos, epsilon = 1e-12);
        assert!(alignment.velocity.x < body.velocity.x);
        assert!(alignment.velocity.x > 0.0);

        // Nose yaws slightly toward the direction of travel
        let nose = alignment.attitude.unwrap() * Vector3::z();
        assert!(nose.x > 0.0);
        assert_relative_eq!(nose.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_alignment_skipped_at_rest() {
        let config = AeroplaneConfig::default();
        let mut state = FlightState {
            aero_factor: 0.42,
            ..Default::default()
        };

        let alignment = aerodynamic_alignment(&mut state, &config, &level(Vector3::zeros()), 0.02);

        assert!(alignment.is_none());
        assert_eq!(state.aero_factor, 0.42);
    }

    #[test]
    fn test_lift_taper() {
        let config = AeroplaneConfig::default();
        let mut state = FlightState {
            aero_factor: 1.0,
            ..Default::default()
        };

        state.move_speed = config.zero_lift_speed;
        assert_eq!(lift_power(&state, &config), 0.0);

        state.move_speed = config.zero_lift_speed * 2.0;
        assert_eq!(lift_power(&state, &config), 0.0);

        state.move_speed = 150.0;
        assert_relative_eq!(lift_power(&state, &config), 150.0 * 150.0 * 0.002 * 0.5);

        state.move_speed = 0.01;
        let expected = config.lift * state.aero_factor * state.move_speed.powi(2);
        assert_relative_eq!(lift_power(&state, &config), expected, max_relative = 1e-4);
    }

    #[test]
    fn test_level_flight_force() {
        let config = AeroplaneConfig::default();
        let body = level(Vector3::new(0.0, 0.0, 100.0));
        let state = FlightState {
            move_speed: 100.0,
            engine_power: 20.0,
            aero_factor: 1.0,
            ..Default::default()
        };

        let force = linear_force(&state, &config, &body, &body.velocity);
        let lift = lift_power(&state, &config);

        assert_relative_eq!(force, Vector3::new(0.0, lift, 20.0), epsilon = 1e-12);
    }

    #[test]
    fn test_lift_direction_degenerate_when_velocity_along_wings() {
        let config = AeroplaneConfig::default();
        let body = level(Vector3::new(50.0, 0.0, 0.0));
        let state = FlightState {
            move_speed: 50.0,
            aero_factor: 1.0,
            ..Default::default()
        };

        let force = linear_force(&state, &config, &body, &body.velocity);
        assert!(force.iter().all(|f| f.is_finite()));
        assert_eq!(force, Vector3::zeros());
    }

    #[test]
    fn test_control_torque_axes() {
        let config = AeroplaneConfig::default();
        let body = level(Vector3::new(0.0, 0.0, 50.0));
        let state = FlightState {
            pitch_input: 1.0,
            yaw_input: 1.0,
            roll_input: 1.0,
            move_speed: 50.0,
            aero_factor: 1.0,
            ..Default::default()
        };

        let torque = control_torque(&state, &config, &body);
        assert_relative_eq!(torque, Vector3::new(50.0, 0.2 * 50.0, -50.0), epsilon = 1e-12);

        let stalled = FlightState {
            aero_factor: 0.0,
            ..state
        };
        assert_eq!(control_torque(&stalled, &config, &body), Vector3::zeros());
    }

    #[test]
    fn test_step_is_pure() {
        let config = AeroplaneConfig::default();
        let base = BaseDrag::new(0.0, 0.05);
        let body = level(Vector3::new(0.0, 0.0, 80.0));
        let prev = FlightState::with_throttle(0.5);
        let input = FlightInput::new(0.0, 0.0, 0.0, 1.0);

        let first = step(&prev, &input, &config, &base, &body, 0.02);
        let second = step(&prev, &input, &config, &base, &body, 0.02);

        assert_eq!(first, second);
        assert_relative_eq!(first.state.throttle, 0.5 + 0.02 * 0.3);
        assert_relative_eq!(first.state.engine_power, first.state.throttle * 40.0);
        assert_relative_eq!(first.commands.angular_drag, 0.05 * 80.0);
    }
}
