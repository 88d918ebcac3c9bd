use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::traits::RigidBodyView;

/// Side effects produced by one flight model tick.
///
/// `velocity` and `attitude` are only set when the aerodynamic alignment
/// stage ran (the body was moving).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightCommands {
    pub drag: f64,
    pub angular_drag: f64,
    pub velocity: Option<Vector3<f64>>,
    pub attitude: Option<UnitQuaternion<f64>>,
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
}

impl FlightCommands {
    /// Writes the commands to `body`: drag coefficients first, then the
    /// alignment nudge, then the accumulated force and torque.
    pub fn apply_to<B: RigidBodyView + ?Sized>(&self, body: &mut B) {
        body.set_drag(self.drag);
        body.set_angular_drag(self.angular_drag);

        if let Some(velocity) = self.velocity {
            body.set_velocity(velocity);
        }
        if let Some(attitude) = self.attitude {
            body.set_attitude(attitude);
        }

        body.add_force(self.force);
        body.add_torque(self.torque);
    }
}
