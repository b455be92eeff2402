//! Basic building blocks.

use std::{f64::consts::PI, fmt};

use thiserror::Error;

const METERS_PER_SECOND_TO_KILOMETERS_PER_HOUR: f64 = 3600.0 / 1000.0;
const METERS_PER_SECOND_TO_MILES_PER_HOUR: f64 = 3600.0 / 1609.344;

/// Geographic point in degrees. Both bounds are inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
    pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesError> {
        // Written as negated range checks so that NaN is rejected too.
        if !(Self::LATITUDE_RANGE.0..=Self::LATITUDE_RANGE.1).contains(&latitude) {
            return Err(CoordinatesError::InvalidLatitude(latitude));
        }
        if !(Self::LONGITUDE_RANGE.0..=Self::LONGITUDE_RANGE.1).contains(&longitude) {
            return Err(CoordinatesError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Translates the point. The result is validated like any other point; it is never
    /// clamped or wrapped around the antimeridian.
    pub fn move_by(
        &self,
        delta_latitude: f64,
        delta_longitude: f64,
    ) -> Result<Coordinates, CoordinatesError> {
        Coordinates::new(
            self.latitude + delta_latitude,
            self.longitude + delta_longitude,
        )
    }
}

impl TryFrom<(f64, f64)> for Coordinates {
    type Error = CoordinatesError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinates::new(latitude, longitude)
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(value: Coordinates) -> Self {
        (value.latitude, value.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinatesError {
    #[error("latitude {0} must be between -90 and 90 degrees")]
    InvalidLatitude(f64),
    #[error("longitude {0} must be between -180 and 180 degrees")]
    InvalidLongitude(f64),
}

/// Compass bearing in degrees. Construction keeps the raw value, only [`Heading::turn`]
/// normalizes into `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Heading(f64);

impl Heading {
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0 * PI / 180.0
    }

    pub fn turn(self, delta_degrees: f64) -> Heading {
        let degrees = (self.0 + delta_degrees).rem_euclid(360.0);
        // rem_euclid rounds tiny negative inputs up to exactly 360.0
        Heading(if degrees >= 360.0 { 0.0 } else { degrees })
    }
}

impl From<Heading> for f64 {
    fn from(value: Heading) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum VelocityUnit {
    #[default]
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

impl VelocityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MetersPerSecond => "m/s",
            VelocityUnit::KilometersPerHour => "km/h",
            VelocityUnit::MilesPerHour => "mph",
        }
    }

    /// Factor converting a value in this unit to meters per second.
    fn to_mps_factor(self) -> f64 {
        match self {
            VelocityUnit::MetersPerSecond => 1.0,
            VelocityUnit::KilometersPerHour => 1.0 / METERS_PER_SECOND_TO_KILOMETERS_PER_HOUR,
            VelocityUnit::MilesPerHour => 1.0 / METERS_PER_SECOND_TO_MILES_PER_HOUR,
        }
    }
}

impl fmt::Display for VelocityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Signed speed, stored in meters per second. Negative values are representable and mean
/// reverse motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Velocity(f64);

impl Velocity {
    pub const ZERO: Velocity = Velocity(0.0);

    pub const fn new(meters_per_second: f64) -> Self {
        Self(meters_per_second)
    }

    pub fn from_units(value: f64, unit: VelocityUnit) -> Self {
        Self(value * unit.to_mps_factor())
    }

    pub fn to_mps(self) -> f64 {
        self.0
    }

    pub fn to_kph(self) -> f64 {
        self.0 * METERS_PER_SECOND_TO_KILOMETERS_PER_HOUR
    }

    pub fn to_mph(self) -> f64 {
        self.0 * METERS_PER_SECOND_TO_MILES_PER_HOUR
    }

    pub fn to_units(self, unit: VelocityUnit) -> f64 {
        match unit {
            VelocityUnit::MetersPerSecond => self.to_mps(),
            VelocityUnit::KilometersPerHour => self.to_kph(),
            VelocityUnit::MilesPerHour => self.to_mph(),
        }
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl From<Velocity> for f64 {
    fn from(value: Velocity) -> Self {
        value.0
    }
}
