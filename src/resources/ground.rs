use bevy::prelude::*;
use nalgebra::Vector3;

use crate::physics::GroundProbe;
use crate::utils::world_up;

/// Infinite horizontal ground at a fixed height.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub height: f64,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self { height: 0.0 }
    }
}

impl GroundPlane {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Signed distance from the plane, negative below it.
    pub fn clearance(&self, position: &Vector3<f64>) -> f64 {
        position.y - self.height
    }
}

impl GroundProbe for GroundPlane {
    fn sphere_cast_down(
        &self,
        origin: &Vector3<f64>,
        radius: f64,
        max_distance: f64,
    ) -> Option<Vector3<f64>> {
        let gap = self.clearance(origin) - radius;
        (gap <= max_distance).then(world_up)
    }
}
