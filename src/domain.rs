//! The domain module encapsulates the core business logic. It defines the `Vehicle` aggregate
//! and the value types it is composed of, along with the rules governing its state changes and
//! motion.
//!
//! Everything in here is plain in-memory computation. Where obstacle signals come from and who
//! drives the ticks is left to the caller.

mod basis;
mod id;
mod obstacle;
mod vehicle;

pub use basis::{Coordinates, CoordinatesError, Heading, Velocity, VelocityUnit};
pub use id::VehicleId;
pub use obstacle::{ObstacleDetection, ObstacleReport};
pub use vehicle::{MotionConfig, Vehicle, VehicleError, VehicleState, METERS_PER_DEGREE_LATITUDE};
