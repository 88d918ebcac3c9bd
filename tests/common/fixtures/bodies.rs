use arcade_flyer::physics::BodySnapshot;
use nalgebra::{UnitQuaternion, Vector3};

use crate::common::RecordingBody;

/// Level body heading +Z at `speed`.
pub fn level_body(speed: f64) -> RecordingBody {
    RecordingBody::moving(Vector3::new(0.0, 0.0, speed), UnitQuaternion::identity())
}

/// Body with its nose pointing straight up, still moving forward.
pub fn vertical_body(speed: f64) -> RecordingBody {
    let attitude = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -std::f64::consts::FRAC_PI_2);
    RecordingBody::moving(attitude * Vector3::new(0.0, 0.0, speed), attitude)
}

pub fn snapshot(velocity: Vector3<f64>, attitude: UnitQuaternion<f64>) -> BodySnapshot {
    BodySnapshot::new(velocity, attitude)
}
