use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::physics::RigidBodyView;

/// Rigid body state integrated by the physics plugin.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct RigidBodyComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,
    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,
    /// Mass [kg]
    pub mass: f64,
    /// Principal moments of inertia in body axes [kg m^2]
    pub inertia: Vector3<f64>,
    pub drag: f64,
    pub angular_drag: f64,
    /// Force accumulated since the last integration [N]
    pub force: Vector3<f64>,
    /// Torque accumulated since the last integration [N m]
    pub torque: Vector3<f64>,
    pub sleeping: bool,
}

impl Default for RigidBodyComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
            mass: 1.0,
            inertia: Vector3::new(1.0, 1.0, 1.0),
            drag: 0.0,
            angular_drag: 0.05,
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
            sleeping: false,
        }
    }
}

impl RigidBodyComponent {
    pub fn new(mass: f64, inertia: Vector3<f64>) -> Self {
        Self {
            mass,
            inertia,
            ..Default::default()
        }
    }

    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn with_motion(mut self, velocity: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        self.velocity = velocity;
        self.attitude = attitude;
        self
    }

    pub fn with_drag(mut self, drag: f64, angular_drag: f64) -> Self {
        self.drag = drag;
        self.angular_drag = angular_drag;
        self
    }

    pub fn clear_forces(&mut self) {
        self.force = Vector3::zeros();
        self.torque = Vector3::zeros();
    }

    pub fn wake(&mut self) {
        self.sleeping = false;
    }
}

impl RigidBodyView for RigidBodyComponent {
    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vector3<f64>) {
        if velocity != Vector3::zeros() {
            self.wake();
        }
        self.velocity = velocity;
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.attitude
    }

    fn set_attitude(&mut self, attitude: UnitQuaternion<f64>) {
        self.attitude = attitude;
    }

    fn drag(&self) -> f64 {
        self.drag
    }

    fn set_drag(&mut self, drag: f64) {
        self.drag = drag;
    }

    fn angular_drag(&self) -> f64 {
        self.angular_drag
    }

    fn set_angular_drag(&mut self, angular_drag: f64) {
        self.angular_drag = angular_drag;
    }

    fn add_force(&mut self, force: Vector3<f64>) {
        if force != Vector3::zeros() {
            self.wake();
        }
        self.force += force;
    }

    fn add_torque(&mut self, torque: Vector3<f64>) {
        if torque != Vector3::zeros() {
            self.wake();
        }
        self.torque += torque;
    }

    fn add_impulse(&mut self, impulse: Vector3<f64>) {
        if impulse != Vector3::zeros() {
            self.wake();
        }
        self.velocity += impulse / self.mass;
    }

    fn sleep(&mut self) {
        self.velocity = Vector3::zeros();
        self.angular_velocity = Vector3::zeros();
        self.clear_forces();
        self.sleeping = true;
    }
}
