use bevy::prelude::*;

use crate::components::{AeroplaneController, CollisionEvent};
use crate::resources::SimClock;

/// Any collision on an aeroplane entity wrecks it for good.
pub fn aeroplane_crash_system(
    mut collision_events: EventReader<CollisionEvent>,
    mut query: Query<(&mut AeroplaneController, Option<&Name>)>,
    clock: Res<SimClock>,
) {
    for event in collision_events.read() {
        let Ok((mut controller, name)) = query.get_mut(event.entity) else {
            continue;
        };

        if controller.crash() {
            let name = name.map_or_else(|| format!("{:?}", event.entity), |n| n.to_string());
            info!(
                "{} crashed at t={:.2}s, impact at {:.1?}",
                name, clock.time, event.impact_point
            );
        }
    }
}
