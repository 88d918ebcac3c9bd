use arcade_flyer::{
    components::{AeroplaneConfig, WalkerConfig},
    resources::{PhysicsConfig, SimulationConfig, StartConfig},
};
use nalgebra::Vector3;

pub const TEST_DT: f64 = 0.02;

pub fn create_test_physics_config() -> PhysicsConfig {
    PhysicsConfig {
        timestep: TEST_DT,
        ..Default::default()
    }
}

/// Aeroplane flying level at 500 m along +Z.
pub fn create_level_flight_config(speed: f64, throttle: f64) -> SimulationConfig {
    SimulationConfig {
        physics: create_test_physics_config(),
        aeroplane: AeroplaneConfig::default(),
        start: StartConfig {
            position: Vector3::new(0.0, 500.0, 0.0),
            heading: 0.0,
            speed,
            throttle,
        },
        ..Default::default()
    }
}

/// Aeroplane gliding into the ground from a few metres up.
pub fn create_low_altitude_config() -> SimulationConfig {
    let mut config = create_level_flight_config(40.0, 0.0);
    config.start.position = Vector3::new(0.0, 3.0, 0.0);
    config
}

pub fn create_test_walker_config() -> WalkerConfig {
    WalkerConfig::default()
}
