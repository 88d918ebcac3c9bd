use arcade_flyer::{
    components::{CollisionEvent, FlightInput, WalkerConfig, WalkerInput},
    plugins::{AeroplanePlugin, KeyboardControlPlugin, PhysicsPlugin, WalkerPlugin},
    resources::{SimClock, SimulationConfig},
};
use bevy::prelude::*;

use crate::common::create_test_physics_config;

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    aeroplane: Option<SimulationConfig>,
    walker: Option<WalkerConfig>,
    keyboard: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aeroplane(mut self, config: SimulationConfig) -> Self {
        self.aeroplane = Some(config);
        self
    }

    pub fn with_walker(mut self, config: WalkerConfig) -> Self {
        self.walker = Some(config);
        self
    }

    pub fn with_keyboard(mut self) -> Self {
        self.keyboard = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        let physics = self
            .aeroplane
            .as_ref()
            .map_or_else(create_test_physics_config, |config| config.physics.clone());

        app.add_plugins(MinimalPlugins)
            .add_plugins(PhysicsPlugin::new(physics));

        if let Some(config) = self.aeroplane {
            app.add_plugins(AeroplanePlugin::new(config));
        }
        if let Some(config) = self.walker {
            app.add_plugins(WalkerPlugin::new(config));
        }
        if self.keyboard {
            app.add_plugins(KeyboardControlPlugin);
        }

        // Run an initial update to spawn everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs the fixed step schedule directly, independent of wall time.
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn sim_time(&self) -> f64 {
        self.app.world().resource::<SimClock>().time
    }

    pub fn set_flight_input(&mut self, input: FlightInput) {
        *self
            .query_single_mut::<FlightInput>()
            .expect("no aeroplane in the test app") = input;
    }

    pub fn set_walker_input(&mut self, input: WalkerInput) {
        *self
            .query_single_mut::<WalkerInput>()
            .expect("no walker in the test app") = input;
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release_all(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release_all();
    }

    pub fn collision_events(&self) -> Vec<CollisionEvent> {
        self.app
            .world()
            .resource::<Events<CollisionEvent>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }
}
