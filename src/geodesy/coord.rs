use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,  // [-90, 90]
    pub longitude: f64, // [-180, 180]
}

impl Coordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both fields are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Finite and inside the latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Shift by a delta in degrees, as the map screen does when seeding sample leads.
    #[inline]
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.latitude + d_lat, self.longitude + d_lon)
    }

    /// Parse a pair of user-entered strings, rejecting blanks, garbage and out-of-range values.
    pub fn parse_pair(latitude: &str, longitude: &str) -> Result<Self> {
        let (latitude, longitude) = (latitude.trim(), longitude.trim());
        if latitude.is_empty() || longitude.is_empty() {
            bail!("Enter latitude & longitude");
        }

        let coord = Self::new(
            latitude.parse().with_context(|| format!("Invalid latitude: {latitude:?}"))?,
            longitude.parse().with_context(|| format!("Invalid longitude: {longitude:?}"))?,
        );
        if !coord.is_valid() {
            bail!("Coordinate out of range: {coord}");
        }
        Ok(coord)
    }
}

/// Parses `"lat,lon"`.
impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s.split_once(',')
            .with_context(|| format!("Expected \"lat,lon\", got {s:?}"))?;
        Self::parse_pair(lat, lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// geo uses (x, y) = (lon, lat).
impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Point::new(coord.longitude, coord.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}
