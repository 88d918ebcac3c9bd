use approx::assert_relative_eq;
use arcade_flyer::components::{FlightState, RigidBodyComponent};
use nalgebra::Vector3;

/// Assert that a rigid body's kinematic state is finite and normalized
#[track_caller]
pub fn assert_body_valid(body: &RigidBodyComponent) {
    assert!(
        body.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        body.position
    );
    assert!(
        body.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        body.velocity
    );
    assert!(
        body.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite: {:?}",
        body.angular_velocity
    );
    assert_relative_eq!(body.attitude.as_ref().norm(), 1.0, epsilon = 1e-9);
}

/// Assert the bounds every flight state must respect
#[track_caller]
pub fn assert_flight_state_valid(state: &FlightState) {
    assert!(
        (0.0..=1.0).contains(&state.throttle),
        "Throttle out of range: {}",
        state.throttle
    );
    assert!(state.move_speed >= 0.0, "Negative forward speed: {}", state.move_speed);
    assert!(
        (0.0..=1.0).contains(&state.aero_factor),
        "Aero factor out of range: {}",
        state.aero_factor
    );
    for input in [
        state.roll_input,
        state.pitch_input,
        state.yaw_input,
        state.throttle_input,
    ] {
        assert!((-1.0..=1.0).contains(&input), "Input out of range: {}", input);
    }
    assert_eq!(state.banked_turn_amount, 0.0);
}

#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
