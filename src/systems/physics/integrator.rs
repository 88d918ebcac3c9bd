use bevy::prelude::*;
use nalgebra::{Matrix3, UnitQuaternion, Vector3};

use crate::components::RigidBodyComponent;
use crate::resources::{PhysicsConfig, SimClock};

/// Advances every awake rigid body by one fixed step.
///
/// Semi-implicit Euler: velocities are updated from the accumulated force
/// and torque first, then drag is applied and the pose is moved with the
/// new velocities. Accumulators are cleared afterwards.
pub fn physics_integrator_system(
    mut query: Query<&mut RigidBodyComponent>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    let gravity = config.gravity;
    let max_vel = config.max_velocity;
    let max_ang_vel = config.max_angular_velocity;

    query.par_iter_mut().for_each(|mut body| {
        integrate_body(&mut body, &gravity, dt);
        apply_velocity_limits(&mut body, max_vel, max_ang_vel);
    });
}

pub fn sim_clock_system(mut clock: ResMut<SimClock>, config: Res<PhysicsConfig>) {
    clock.advance(config.timestep);
}

fn integrate_body(body: &mut RigidBodyComponent, gravity: &Vector3<f64>, dt: f64) {
    if body.sleeping {
        body.clear_forces();
        return;
    }

    // Linear
    let acceleration = body.force / body.mass + gravity;
    body.velocity += acceleration * dt;
    body.velocity *= 1.0 / (1.0 + body.drag * dt);
    body.position += body.velocity * dt;

    // Angular
    let inertia_inv = world_inertia_inverse(body);
    body.angular_velocity += inertia_inv * body.torque * dt;
    body.angular_velocity *= 1.0 / (1.0 + body.angular_drag * dt);

    let rotation = UnitQuaternion::from_scaled_axis(body.angular_velocity * dt);
    body.attitude =
        UnitQuaternion::from_quaternion((rotation * body.attitude).into_inner().normalize());

    body.clear_forces();
}

/// Inverse inertia tensor rotated into world axes.
fn world_inertia_inverse(body: &RigidBodyComponent) -> Matrix3<f64> {
    let rotation = body.attitude.to_rotation_matrix();
    let local = Matrix3::from_diagonal(&body.inertia.map(|i| 1.0 / i));
    rotation.matrix() * local * rotation.matrix().transpose()
}

fn apply_velocity_limits(
    body: &mut RigidBodyComponent,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let velocity_norm = body.velocity.norm();
    if velocity_norm > max_velocity {
        body.velocity *= max_velocity / velocity_norm;
    }

    let angular_velocity_norm = body.angular_velocity.norm();
    if angular_velocity_norm > max_angular_velocity {
        body.angular_velocity *= max_angular_velocity / angular_velocity_norm;
    }
}
