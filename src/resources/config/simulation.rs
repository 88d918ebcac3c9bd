use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::physics::PhysicsConfig;
use crate::components::{AeroplaneConfig, RigidBodyComponent, WalkerConfig};
use crate::utils::ConfigError;

/// Mass properties and collider of the aeroplane's rigid body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigidBodyConfig {
    /// Mass [kg]
    pub mass: f64,
    /// Principal moments of inertia [kg m^2]
    pub inertia: Vector3<f64>,
    /// Linear drag before any flight model adjustment
    pub drag: f64,
    /// Angular drag before any flight model adjustment
    pub angular_drag: f64,
    /// Ground contact sphere [m]
    pub collision_radius: f64,
}

impl Default for RigidBodyConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            inertia: Vector3::new(1.0, 1.0, 1.0),
            drag: 0.0,
            angular_drag: 0.05,
            collision_radius: 1.0,
        }
    }
}

impl RigidBodyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if !self.inertia.iter().all(|i| i.is_finite() && *i > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "inertia must be positive, got {:?}",
                self.inertia
            )));
        }
        if !(self.drag >= 0.0 && self.angular_drag >= 0.0 && self.collision_radius >= 0.0) {
            return Err(ConfigError::ValidationError(
                "drag, angular_drag and collision_radius must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build(&self) -> RigidBodyComponent {
        RigidBodyComponent::new(self.mass, self.inertia).with_drag(self.drag, self.angular_drag)
    }
}

/// Where and how fast the aeroplane starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Heading about world up, 0 faces +Z [rad]
    pub heading: f64,
    /// Initial speed along the nose [m/s]
    pub speed: f64,
    /// Initial throttle [0-1]
    pub throttle: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 500.0, 0.0),
            heading: 0.0,
            speed: 100.0,
            throttle: 0.5,
        }
    }
}

impl StartConfig {
    pub fn attitude(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.heading)
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.attitude() * Vector3::z() * self.speed
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.throttle) {
            return Err(ConfigError::ValidationError(format!(
                "start throttle must lie in [0, 1], got {}",
                self.throttle
            )));
        }
        if !(self.speed.is_finite() && self.heading.is_finite())
            || !self.position.iter().all(|p| p.is_finite())
        {
            return Err(ConfigError::ValidationError(
                "start position, heading and speed must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration file. Every section may be omitted.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub aeroplane: AeroplaneConfig,
    pub rigid_body: RigidBodyConfig,
    pub start: StartConfig,
    pub walker: WalkerConfig,
}

impl SimulationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `arcade_flyer/config.yaml` in the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("arcade_flyer").join("config.yaml"))
    }

    /// Loads the config at [`SimulationConfig::default_path`] if one exists.
    pub fn discover() -> Result<Option<Self>, ConfigError> {
        match Self::default_path() {
            Some(path) if path.is_file() => {
                info!("Loading configuration from {}", path.display());
                Self::load(&path).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.aeroplane.validate()?;
        self.rigid_body.validate()?;
        self.start.validate()?;
        self.walker.validate()?;
        Ok(())
    }
}
