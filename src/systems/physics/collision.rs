use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{CollisionComponent, CollisionEvent, RigidBodyComponent};
use crate::resources::{GroundPlane, SimClock};
use crate::utils::world_up;

/// Touching within this distance counts as contact [m]
const CONTACT_TOLERANCE: f64 = 1e-6;

/// Keeps bodies above the ground plane and reports the first touch of each
/// contact.
pub fn ground_collision_system(
    mut query: Query<(Entity, &mut RigidBodyComponent, &mut CollisionComponent)>,
    ground: Res<GroundPlane>,
    clock: Res<SimClock>,
    mut collision_events: EventWriter<CollisionEvent>,
) {
    for (entity, mut body, mut collision) in query.iter_mut() {
        match check_ground_contact(entity, &body, &collision, &ground) {
            Some(event) => {
                resolve_contact(&mut body, &event);

                if !collision.in_contact {
                    collision.in_contact = true;
                    collision.register_collision(clock.time);
                    debug!(
                        "{:?} hit the ground at {:.2?} ({} contacts)",
                        entity, event.impact_point, collision.collision_count
                    );
                    collision_events.send(event);
                }
            }
            None => collision.in_contact = false,
        }
    }
}

pub fn check_ground_contact(
    entity: Entity,
    body: &RigidBodyComponent,
    collision: &CollisionComponent,
    ground: &GroundPlane,
) -> Option<CollisionEvent> {
    let lowest = body.position.y - collision.radius;
    let penetration = ground.height - lowest;

    if penetration < -CONTACT_TOLERANCE {
        return None;
    }

    Some(CollisionEvent {
        entity,
        impact_point: Vector3::new(body.position.x, ground.height, body.position.z),
        normal: world_up(),
        penetration_depth: penetration.max(0.0),
    })
}

/// Lifts the body out of the ground and removes velocity into it.
fn resolve_contact(body: &mut RigidBodyComponent, contact: &CollisionEvent) {
    body.position += contact.normal * contact.penetration_depth;

    let into_ground = body.velocity.dot(&contact.normal);
    if into_ground < 0.0 {
        body.velocity -= contact.normal * into_ground;
    }
}
