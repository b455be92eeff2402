//! Fixed-step simulation of a single vehicle.
//!
//! On every tick the obstacle detector looks at the vehicle, then the vehicle's position is
//! advanced by one time step, taking the reported obstacle into account.

use std::time::Duration;

use tracing::debug;

use crate::domain::{Coordinates, ObstacleDetection, Vehicle, VehicleError, VehicleState};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct SimulatorConfig {
    pub time_step: Duration,
    pub max_ticks: usize,
}

impl SimulatorConfig {
    pub const fn new(time_step: Duration, max_ticks: usize) -> Self {
        SimulatorConfig {
            time_step,
            max_ticks,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 60)
    }
}

/// Snapshot taken after one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub index: usize,
    pub state: VehicleState,
    pub coordinates: Coordinates,
    pub outcome: Result<(), VehicleError>,
}

pub struct Simulator<D> {
    vehicle: Vehicle,
    detector: D,
    config: SimulatorConfig,
    ticks: usize,
}

impl<D: ObstacleDetection> Simulator<D> {
    pub fn new(vehicle: Vehicle, detector: D, config: SimulatorConfig) -> Self {
        Self {
            vehicle,
            detector,
            config,
            ticks: 0,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Commands issued between ticks go through here.
    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn into_vehicle(self) -> Vehicle {
        self.vehicle
    }

    pub fn step(&mut self) -> Tick {
        let report = self.detector.detect(&self.vehicle);
        let outcome = self.vehicle.advance(
            self.config.time_step,
            report.obstacle_found,
            report.will_hit_obstacle,
        );
        let tick = Tick {
            index: self.ticks,
            state: self.vehicle.state(),
            coordinates: self.vehicle.coordinates(),
            outcome,
        };
        self.ticks += 1;
        debug!(tick = tick.index, state = %tick.state, "simulation tick");
        tick
    }

    /// Steps until the vehicle stops driving or the tick budget is spent.
    pub fn run(&mut self) -> Vec<Tick> {
        let mut ticks = Vec::new();
        while ticks.len() < self.config.max_ticks
            && self.vehicle.state() == VehicleState::Driving
        {
            ticks.push(self.step());
        }
        ticks
    }
}
