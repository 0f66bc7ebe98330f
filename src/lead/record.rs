use std::{fmt, sync::Arc, time::{SystemTime, UNIX_EPOCH}};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geodesy::Coordinate;

/// Highest allowed match score.
pub const MAX_SCORE: u8 = 100;

/// Opaque, stable identifier of a lead.
/// Cheap to clone; compared and hashed by its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(Arc<str>);

impl LeadId {
    /// A fresh id of the form `"<unix-millis>-<0..10000>"`.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let salt: u32 = rand::rng().random_range(0..10_000);
        Self::from(format!("{millis}-{salt}"))
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for LeadId {
    fn from(s: &str) -> Self { Self(Arc::from(s)) }
}

impl From<String> for LeadId {
    fn from(s: String) -> Self { Self(Arc::from(s)) }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// One prospective contact, as persisted.
///
/// Distance from the user is not stored here; it is derived on every ranking pass
/// (see [`crate::RankedLead`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    pub name: String,
    pub location: Coordinate,
    pub score: u8, // [0, 100]
}

impl LeadRecord {
    pub fn new(id: impl Into<LeadId>, name: impl Into<String>, location: Coordinate, score: u8) -> Self {
        Self { id: id.into(), name: name.into(), location, score }
    }

    /// Name and location, the fields the duplicate check looks at.
    #[inline]
    pub fn as_candidate(&self) -> Candidate<'_> {
        Candidate { name: &self.name, location: self.location }
    }
}

/// The parts of a prospective lead that identify it for duplicate detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub location: Coordinate,
}

impl<'a> Candidate<'a> {
    #[inline]
    pub fn new(name: &'a str, location: Coordinate) -> Self { Self { name, location } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_millis_and_salt() {
        let id = LeadId::generate();
        let (millis, salt) = id.as_str().split_once('-').unwrap();
        assert!(millis.parse::<u128>().unwrap() > 0);
        assert!(salt.parse::<u32>().unwrap() < 10_000);
    }

    #[test]
    fn record_serializes_with_plain_id() {
        let lead = LeadRecord::new("42-7", "Acme", Coordinate::new(1.5, -2.5), 80);
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["id"], "42-7");
        assert_eq!(json["name"], "Acme");
        assert_eq!(json["location"]["latitude"], 1.5);
        assert_eq!(json["location"]["longitude"], -2.5);
        assert_eq!(json["score"], 80);
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn out_of_range_score_fails_to_deserialize() {
        let json = r#"{"id":"1","name":"x","location":{"latitude":0,"longitude":0},"score":300}"#;
        assert!(serde_json::from_str::<LeadRecord>(json).is_err());
    }
}
