//! Test utils.

use crate::domain::{Coordinates, Heading, Vehicle, VehicleId, VehicleState, Velocity};

/// Routes `tracing` output through the test harness. Set `RUST_LOG` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn los_angeles() -> Coordinates {
    Coordinates::new(34.0522, -118.2437).unwrap()
}

/// Vehicle `vehicle_1` in Los Angeles facing north.
pub fn vehicle(state: VehicleState, mps: f64) -> Vehicle {
    Vehicle::new(
        VehicleId::from("vehicle_1"),
        los_angeles(),
        Velocity::new(mps),
        Heading::new(0.0),
        state,
    )
}
