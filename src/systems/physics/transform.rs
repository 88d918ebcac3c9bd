use bevy::prelude::*;

use crate::components::RigidBodyComponent;

/// Copies the simulated pose into the render transform.
pub fn sync_transform_system(mut query: Query<(&RigidBodyComponent, &mut Transform)>) {
    for (body, mut transform) in query.iter_mut() {
        transform.translation = Vec3::new(
            body.position.x as f32,
            body.position.y as f32,
            body.position.z as f32,
        );

        let q = body.attitude.quaternion();
        transform.rotation = Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32);
    }
}
