use anyhow::Result;

use crate::{error::LeadError, geodesy::Coordinate};

/// Source of the device's current position.
pub trait LocationProvider {
    /// The current position, or an error when it cannot be determined
    /// (permission denied, no fix, ...).
    fn current_position(&self) -> Result<Coordinate>;
}

/// A provider that always reports the same position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> Result<Coordinate> {
        if !self.0.is_valid() {
            return Err(LeadError::LocationUnavailable(format!("invalid fix {}", self.0)).into());
        }
        Ok(self.0)
    }
}

/// A provider with no access to location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_position(&self) -> Result<Coordinate> {
        Err(LeadError::LocationUnavailable("permission denied".into()).into())
    }
}

/// An optional fixed position; `None` behaves like [`NoLocation`].
impl LocationProvider for Option<Coordinate> {
    fn current_position(&self) -> Result<Coordinate> {
        match self {
            Some(coord) => FixedLocation(*coord).current_position(),
            None => NoLocation.current_position(),
        }
    }
}
