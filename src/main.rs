use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ground_vehicle::{
    domain::{Coordinates, Heading, ObstacleReport, Vehicle, VehicleError, Velocity, VelocityUnit},
    simulator::{Simulator, SimulatorConfig},
};

/// Ticks after which the scripted detector reports an avoidable obstacle.
const OBSTACLE_AFTER_TICKS: usize = 20;

fn main() -> Result<(), VehicleError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let vehicle = Vehicle::create(
        Coordinates::new(34.0522, -118.2437)?,
        Velocity::ZERO,
        None,
        Some(Heading::new(45.0)),
    );

    let mut ticks = 0;
    let detector = move |_: &Vehicle| {
        ticks += 1;
        if ticks > OBSTACLE_AFTER_TICKS {
            ObstacleReport::avoidable()
        } else {
            ObstacleReport::clear()
        }
    };

    let mut simulator = Simulator::new(
        vehicle,
        detector,
        SimulatorConfig::new(Duration::from_millis(500), 100),
    );
    simulator
        .vehicle_mut()
        .accelerate(30.0, VelocityUnit::MilesPerHour)?;
    simulator.vehicle_mut().turn(-15.0)?;

    for tick in simulator.run() {
        tick.outcome?;
    }

    let vehicle = simulator.vehicle();
    info!(
        vehicle = %vehicle.id(),
        state = %vehicle.state(),
        position = %vehicle.coordinates(),
        heading = vehicle.heading().degrees(),
        "simulation finished"
    );
    Ok(())
}
