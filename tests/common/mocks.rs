use arcade_flyer::physics::{GroundProbe, RigidBodyView};
use nalgebra::{UnitQuaternion, Vector3};

/// A mutation made through [`RigidBodyView`].
#[derive(Debug, Clone, PartialEq)]
pub enum BodyCall {
    SetVelocity(Vector3<f64>),
    SetAttitude(UnitQuaternion<f64>),
    SetDrag(f64),
    SetAngularDrag(f64),
    AddForce(Vector3<f64>),
    AddTorque(Vector3<f64>),
    AddImpulse(Vector3<f64>),
    Sleep,
}

/// Unit-mass body that records every mutation in order.
#[derive(Debug, Clone)]
pub struct RecordingBody {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub attitude: UnitQuaternion<f64>,
    pub drag: f64,
    pub angular_drag: f64,
    pub asleep: bool,
    pub calls: Vec<BodyCall>,
}

impl Default for RecordingBody {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            drag: 0.0,
            angular_drag: 0.05,
            asleep: false,
            calls: Vec::new(),
        }
    }
}

impl RecordingBody {
    pub fn moving(velocity: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        Self {
            velocity,
            attitude,
            ..Default::default()
        }
    }

    pub fn at(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn forces(&self) -> Vec<Vector3<f64>> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BodyCall::AddForce(force) => Some(*force),
                _ => None,
            })
            .collect()
    }

    pub fn impulses(&self) -> Vec<Vector3<f64>> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BodyCall::AddImpulse(impulse) => Some(*impulse),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl RigidBodyView for RecordingBody {
    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vector3<f64>) {
        self.calls.push(BodyCall::SetVelocity(velocity));
        self.velocity = velocity;
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.attitude
    }

    fn set_attitude(&mut self, attitude: UnitQuaternion<f64>) {
        self.calls.push(BodyCall::SetAttitude(attitude));
        self.attitude = attitude;
    }

    fn drag(&self) -> f64 {
        self.drag
    }

    fn set_drag(&mut self, drag: f64) {
        self.calls.push(BodyCall::SetDrag(drag));
        self.drag = drag;
    }

    fn angular_drag(&self) -> f64 {
        self.angular_drag
    }

    fn set_angular_drag(&mut self, angular_drag: f64) {
        self.calls.push(BodyCall::SetAngularDrag(angular_drag));
        self.angular_drag = angular_drag;
    }

    fn add_force(&mut self, force: Vector3<f64>) {
        self.calls.push(BodyCall::AddForce(force));
    }

    fn add_torque(&mut self, torque: Vector3<f64>) {
        self.calls.push(BodyCall::AddTorque(torque));
    }

    fn add_impulse(&mut self, impulse: Vector3<f64>) {
        self.calls.push(BodyCall::AddImpulse(impulse));
        self.velocity += impulse;
        self.asleep = false;
    }

    fn sleep(&mut self) {
        self.calls.push(BodyCall::Sleep);
        self.velocity = Vector3::zeros();
        self.asleep = true;
    }
}

/// Ground probe with a canned answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub Option<Vector3<f64>>);

impl FixedProbe {
    pub fn ground() -> Self {
        Self(Some(Vector3::y()))
    }

    pub fn slope(normal: Vector3<f64>) -> Self {
        Self(Some(normal.normalize()))
    }

    pub fn air() -> Self {
        Self(None)
    }
}

impl GroundProbe for FixedProbe {
    fn sphere_cast_down(
        &self,
        _origin: &Vector3<f64>,
        _radius: f64,
        _max_distance: f64,
    ) -> Option<Vector3<f64>> {
        self.0
    }
}
