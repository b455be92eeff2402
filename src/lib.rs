//! Kinematic and operational state of a single ground vehicle on a latitude/longitude plane.
//!
//! The [`domain`] module holds the `Vehicle` aggregate and its value types. The [`simulator`]
//! module drives a vehicle in fixed time steps against an obstacle detector.

#[cfg(test)]
mod tests;

pub mod domain;
pub mod simulator;
