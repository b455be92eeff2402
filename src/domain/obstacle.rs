//! Obstacle signals consumed by the vehicle on every tick.

use super::Vehicle;

/// Outcome of one perception pass. `will_hit_obstacle` is only meaningful when an obstacle
/// was found.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ObstacleReport {
    pub obstacle_found: bool,
    pub will_hit_obstacle: bool,
}

impl ObstacleReport {
    pub const fn new(obstacle_found: bool, will_hit_obstacle: bool) -> Self {
        Self {
            obstacle_found,
            will_hit_obstacle,
        }
    }

    pub const fn clear() -> Self {
        Self::new(false, false)
    }

    pub const fn avoidable() -> Self {
        Self::new(true, false)
    }

    pub const fn collision() -> Self {
        Self::new(true, true)
    }
}

/// Perception collaborator deciding, per tick, whether the vehicle is about to hit something.
pub trait ObstacleDetection {
    fn detect(&mut self, vehicle: &Vehicle) -> ObstacleReport;
}

impl<F> ObstacleDetection for F
where
    F: FnMut(&Vehicle) -> ObstacleReport,
{
    fn detect(&mut self, vehicle: &Vehicle) -> ObstacleReport {
        self(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{domain::VehicleState, tests::vehicle};

    #[test]
    fn test_report_constructors() {
        assert_eq!(ObstacleReport::clear(), ObstacleReport::default());
        assert_eq!(
            ObstacleReport::avoidable(),
            ObstacleReport {
                obstacle_found: true,
                will_hit_obstacle: false
            }
        );
        assert_eq!(ObstacleReport::collision(), ObstacleReport::new(true, true));
    }

    #[test]
    fn test_closure_detection() {
        let mut calls = 0;
        let mut detector = |vehicle: &Vehicle| {
            calls += 1;
            if vehicle.velocity().to_mps() > 5.0 {
                ObstacleReport::avoidable()
            } else {
                ObstacleReport::clear()
            }
        };

        assert_eq!(
            detector.detect(&vehicle(VehicleState::Driving, 10.0)),
            ObstacleReport::avoidable()
        );
        assert_eq!(
            detector.detect(&vehicle(VehicleState::Driving, 1.0)),
            ObstacleReport::clear()
        );
        assert_eq!(calls, 2);
    }
}
