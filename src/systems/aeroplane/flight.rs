use bevy::prelude::*;

use crate::components::{AeroplaneController, FlightInput, RigidBodyComponent};
use crate::resources::PhysicsConfig;

/// Runs one flight model tick for every aeroplane. Crashed aeroplanes leave
/// their body alone.
pub fn flight_model_system(
    mut query: Query<(&mut AeroplaneController, &FlightInput, &mut RigidBodyComponent)>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;

    for (mut controller, input, mut body) in query.iter_mut() {
        controller.fixed_update(input, &mut *body, dt);
    }
}
