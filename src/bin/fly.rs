use bevy::{log::LogPlugin, prelude::*};
use serde::Serialize;
use std::{env, path::PathBuf};

use arcade_flyer::{
    components::{
        AeroplaneController, CollisionComponent, FlightInput, FlightPhase, RigidBodyComponent,
    },
    plugins::{AeroplanePlugin, PhysicsPlugin},
    resources::{SimClock, SimulationConfig},
    utils::SimError,
};

const USAGE: &str = "usage: arcade_fly [--config <file>] [--steps <n>] \
                     [--throttle <t>] [--pitch <p>] [--roll <r>] [--yaw <y>] [--air-brakes]";

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    steps: u64,
    input: FlightInput,
}

#[derive(Debug, Serialize)]
struct FlightSummary {
    steps: u64,
    sim_time: f64,
    phase: FlightPhase,
    position: [f64; 3],
    velocity: [f64; 3],
    forward_speed: f64,
    throttle: f64,
    aero_factor: f64,
    collisions: u32,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args, SimError> {
    let mut parsed = Args {
        config: None,
        steps: 500,
        input: FlightInput::default(),
    };

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| SimError::InvalidArgument(format!("{} needs a value", name)))
        };

        match arg.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--steps" => parsed.steps = parse_number(&value("--steps")?)?,
            "--throttle" => parsed.input.throttle = parse_number(&value("--throttle")?)?,
            "--pitch" => parsed.input.pitch = parse_number(&value("--pitch")?)?,
            "--roll" => parsed.input.roll = parse_number(&value("--roll")?)?,
            "--yaw" => parsed.input.yaw = parse_number(&value("--yaw")?)?,
            "--air-brakes" => parsed.input.air_brakes = true,
            other => {
                return Err(SimError::InvalidArgument(format!(
                    "unknown argument {}\n{}",
                    other, USAGE
                )))
            }
        }
    }

    Ok(parsed)
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, SimError> {
    raw.parse()
        .map_err(|_| SimError::InvalidArgument(format!("not a number: {}", raw)))
}

fn load_config(path: Option<&PathBuf>) -> Result<SimulationConfig, SimError> {
    if let Some(path) = path {
        return Ok(SimulationConfig::load(path)?);
    }

    match SimulationConfig::discover()? {
        Some(config) => Ok(config),
        None => {
            warn!("No configuration file found, using defaults");
            Ok(SimulationConfig::default())
        }
    }
}

fn summarize(world: &mut World, steps: u64) -> Result<FlightSummary, SimError> {
    let sim_time = world.resource::<SimClock>().time;

    let mut query =
        world.query::<(&RigidBodyComponent, &AeroplaneController, &CollisionComponent)>();
    let (body, controller, collision) = query
        .get_single(world)
        .map_err(|e| SimError::EntityNotFound(format!("aeroplane: {}", e)))?;

    Ok(FlightSummary {
        steps,
        sim_time,
        phase: controller.phase(),
        position: body.position.into(),
        velocity: body.velocity.into(),
        forward_speed: controller.state().move_speed,
        throttle: controller.state().throttle,
        aero_factor: controller.state().aero_factor,
        collisions: collision.collision_count,
    })
}

fn main() -> Result<(), SimError> {
    let args = parse_args(env::args().skip(1))?;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));

    let config = load_config(args.config.as_ref())?;
    app.add_plugins((
        PhysicsPlugin::new(config.physics.clone()),
        AeroplanePlugin::new(config),
    ));

    // Startup spawns the aeroplane
    app.update();

    let world = app.world_mut();
    let mut inputs = world.query::<&mut FlightInput>();
    for mut input in inputs.iter_mut(world) {
        *input = args.input;
    }

    info!("Running {} fixed steps", args.steps);
    for _ in 0..args.steps {
        app.world_mut().run_schedule(FixedUpdate);
    }

    let summary = summarize(app.world_mut(), args.steps)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
