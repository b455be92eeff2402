//! Opaque vehicle identifiers.

use std::fmt;

use rand::Rng;

/// Identity key of a [`super::Vehicle`]. Two vehicles with equal ids are the same entity.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VehicleId(String);

impl VehicleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 128 random bits from the thread-local generator, as 32 lowercase hex digits.
    pub fn generate() -> Self {
        Self::random(&mut rand::rng())
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(format!("{:032x}", rng.random::<u128>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for VehicleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for VehicleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
