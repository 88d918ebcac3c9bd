use nalgebra::{UnitQuaternion, Vector3};

/// Read/write access to a simulated rigid body.
///
/// The controllers never own the body: the host hands one over each fixed
/// step and the controller reads its kinematic state, rewrites its drag
/// coefficients and queues forces, torques and impulses on it.
pub trait RigidBodyView {
    /// Position in world space [m]
    fn position(&self) -> Vector3<f64>;

    /// Linear velocity in world space [m/s]
    fn velocity(&self) -> Vector3<f64>;
    fn set_velocity(&mut self, velocity: Vector3<f64>);

    /// Rotation from body to world frame
    fn attitude(&self) -> UnitQuaternion<f64>;
    fn set_attitude(&mut self, attitude: UnitQuaternion<f64>);

    fn drag(&self) -> f64;
    fn set_drag(&mut self, drag: f64);
    fn angular_drag(&self) -> f64;
    fn set_angular_drag(&mut self, angular_drag: f64);

    /// Queues a world-space force for the next integration step [N]
    fn add_force(&mut self, force: Vector3<f64>);
    /// Queues a world-space torque for the next integration step [N m]
    fn add_torque(&mut self, torque: Vector3<f64>);
    /// Instantly changes momentum by `impulse` [N s]
    fn add_impulse(&mut self, impulse: Vector3<f64>);

    /// Zeroes all motion and stops integrating until the body is disturbed.
    fn sleep(&mut self);

    fn forward(&self) -> Vector3<f64> {
        self.attitude() * Vector3::z()
    }

    fn right(&self) -> Vector3<f64> {
        self.attitude() * Vector3::x()
    }

    fn up(&self) -> Vector3<f64> {
        self.attitude() * Vector3::y()
    }

    fn snapshot(&self) -> BodySnapshot {
        BodySnapshot::new(self.velocity(), self.attitude())
    }
}

/// Kinematic state of a body frozen at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub velocity: Vector3<f64>,
    pub attitude: UnitQuaternion<f64>,
}

impl BodySnapshot {
    pub fn new(velocity: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        Self { velocity, attitude }
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    pub fn to_local(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        self.attitude.inverse_transform_vector(direction)
    }
}

/// Scene query used by the walker to find the ground beneath it.
pub trait GroundProbe {
    /// Sweeps a sphere of `radius` from `origin` straight down by up to
    /// `max_distance`, returning the surface normal of the first hit.
    fn sphere_cast_down(
        &self,
        origin: &Vector3<f64>,
        radius: f64,
        max_distance: f64,
    ) -> Option<Vector3<f64>>;
}
