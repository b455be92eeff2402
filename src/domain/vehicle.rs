//! Ground vehicle moving on a latitude/longitude plane, driven by discrete commands and
//! per-tick obstacle signals.

use std::{
    fmt,
    hash::{Hash, Hasher},
    time::Duration,
};

use nalgebra::Vector2;
use thiserror::Error;
use tracing::{error, info, warn};

use super::{Coordinates, CoordinatesError, Heading, Velocity, VelocityUnit, VehicleId};

pub const METERS_PER_DEGREE_LATITUDE: f64 = 111139.0;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum VehicleState {
    #[default]
    Stopped,
    Driving,
    Parking,
    Accidented,
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VehicleState::Stopped => "stopped",
            VehicleState::Driving => "driving",
            VehicleState::Parking => "parking",
            VehicleState::Accidented => "accidented",
        })
    }
}

/// Vehicle aggregate. Equality and hashing only consider the [`VehicleId`].
#[derive(Clone, Debug)]
pub struct Vehicle {
    id: VehicleId,
    coordinates: Coordinates,
    velocity: Velocity,
    heading: Heading,
    state: VehicleState,
    config: MotionConfig,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        coordinates: Coordinates,
        velocity: Velocity,
        heading: Heading,
        state: VehicleState,
    ) -> Self {
        Self {
            id,
            coordinates,
            velocity,
            heading,
            state,
            config: MotionConfig::default(),
        }
    }

    /// Creates a vehicle, generating an id and facing north unless told otherwise. The vehicle
    /// starts `Driving` if it already moves, `Stopped` otherwise.
    pub fn create(
        coordinates: Coordinates,
        velocity: Velocity,
        id: Option<VehicleId>,
        heading: Option<Heading>,
    ) -> Self {
        let state = if velocity.is_zero() {
            VehicleState::Stopped
        } else {
            VehicleState::Driving
        };
        Self::new(
            id.unwrap_or_else(VehicleId::generate),
            coordinates,
            velocity,
            heading.unwrap_or_default(),
            state,
        )
    }

    pub fn with_config(self, config: MotionConfig) -> Self {
        Self { config, ..self }
    }

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn state(&self) -> VehicleState {
        self.state
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Changes the velocity by `amount`. The result never drops below zero. Rejected without
    /// any state change while the vehicle is accidented.
    pub fn accelerate(&mut self, amount: f64, unit: VelocityUnit) -> Result<(), VehicleError> {
        self.ensure_operational("accelerate")?;

        let delta = Velocity::from_units(amount, unit).to_mps();
        let mps = f64::max(0.0, self.velocity.to_mps() + delta);
        self.velocity = Velocity::new(mps);

        let state = if mps > 0.0 {
            VehicleState::Driving
        } else if self.state == VehicleState::Parking {
            VehicleState::Parking
        } else {
            VehicleState::Stopped
        };
        self.transition(state);
        Ok(())
    }

    pub fn decelerate(&mut self, amount: f64, unit: VelocityUnit) -> Result<(), VehicleError> {
        self.accelerate(-amount, unit)
    }

    pub fn brake(&mut self, amount: f64, unit: VelocityUnit) -> Result<(), VehicleError> {
        self.decelerate(amount, unit)
    }

    /// Brings the velocity to exactly zero. A parking vehicle stays parking.
    pub fn brake_to_stop(&mut self) -> Result<(), VehicleError> {
        self.accelerate(-self.velocity.to_mps(), VelocityUnit::MetersPerSecond)
    }

    pub fn turn(&mut self, degrees: f64) -> Result<(), VehicleError> {
        self.ensure_operational("turn")?;

        self.heading = self.heading.turn(degrees);
        info!(vehicle = %self.id, heading = self.heading.degrees(), "vehicle turned");
        Ok(())
    }

    /// Always succeeds, and is the only way out of [`VehicleState::Accidented`].
    pub fn stop_engine(&mut self) {
        if self.state == VehicleState::Accidented {
            info!(vehicle = %self.id, "stopping engine of accidented vehicle");
        }
        self.velocity = Velocity::ZERO;
        self.transition(VehicleState::Stopped);
    }

    /// Integrates the position over `dt`. Only a driving vehicle moves.
    ///
    /// An obstacle that will be hit puts the vehicle into [`VehicleState::Accidented`] *and*
    /// returns [`VehicleError::Crashed`]. An obstacle that will not be hit brakes the vehicle
    /// to a stop and is not an error. If the new position would leave the valid coordinate
    /// range the move is rejected and the vehicle keeps its previous position.
    pub fn advance(
        &mut self,
        dt: Duration,
        obstacle_found: bool,
        will_hit_obstacle: bool,
    ) -> Result<(), VehicleError> {
        if self.state != VehicleState::Driving {
            return Ok(());
        }

        if obstacle_found {
            if will_hit_obstacle {
                error!(vehicle = %self.id, "vehicle crashed into an obstacle");
                self.transition(VehicleState::Accidented);
                return Err(VehicleError::Crashed(self.id.clone()));
            }
            warn!(vehicle = %self.id, "obstacle detected, stopping");
            return self.brake_to_stop();
        }

        if self.velocity.is_zero() {
            return Ok(());
        }

        let dt = dt.as_secs_f64();
        let rate = self.coordinate_rate();
        self.coordinates = self.coordinates.move_by(rate.x * dt, rate.y * dt)?;

        info!(
            vehicle = %self.id,
            distance_m = self.velocity.to_mps() * dt,
            position = %self.coordinates,
            "vehicle moved"
        );
        Ok(())
    }

    /// Degrees of latitude and longitude covered per second at the current velocity and
    /// heading. The longitude term diverges towards the poles.
    fn coordinate_rate(&self) -> Vector2<f64> {
        let heading = self.heading.radians();
        // north and east components in m/s
        let ground = Vector2::new(heading.cos(), heading.sin()) * self.velocity.to_mps();
        let meters_per_degree = self.config.meters_per_degree_latitude;
        Vector2::new(
            ground.x / meters_per_degree,
            ground.y / (meters_per_degree * self.coordinates.latitude().to_radians().cos()),
        )
    }

    fn ensure_operational(&self, command: &str) -> Result<(), VehicleError> {
        if self.state == VehicleState::Accidented {
            info!(vehicle = %self.id, command, "refused command, vehicle is accidented");
            return Err(VehicleError::CannotChangeVelocityOfAccidentedVehicle(
                self.id.clone(),
            ));
        }
        Ok(())
    }

    fn transition(&mut self, state: VehicleState) {
        if self.state != state {
            info!(vehicle = %self.id, from = %self.state, to = %state, "vehicle state changed");
            self.state = state;
        }
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VehicleError {
    #[error("cannot change the velocity of accidented vehicle {0}")]
    CannotChangeVelocityOfAccidentedVehicle(VehicleId),
    #[error("vehicle {0} crashed into an obstacle")]
    Crashed(VehicleId),
    #[error(transparent)]
    Coordinates(#[from] CoordinatesError),
}

impl VehicleError {
    /// Whether the vehicle's state was changed by the failing command. Only a crash does so.
    pub fn changed_state(&self) -> bool {
        matches!(self, VehicleError::Crashed(_))
    }
}

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct MotionConfig {
    pub meters_per_degree_latitude: f64,
}

impl MotionConfig {
    pub const fn new(meters_per_degree_latitude: f64) -> Self {
        MotionConfig {
            meters_per_degree_latitude,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::new(METERS_PER_DEGREE_LATITUDE)
    }
}
