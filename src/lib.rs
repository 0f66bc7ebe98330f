#![doc = "Lead ranking and great-circle distance engine"]
mod config;
mod dashboard;
mod error;
mod geodesy;
mod lead;
mod location;
mod rank;
mod store;

#[doc(inline)]
pub use geodesy::{distance_km, distance_km_opt, haversine_km, haversine_km_atan2, Coordinate, EARTH_RADIUS_KM};

#[doc(inline)]
pub use lead::{find_duplicate, is_duplicate, samples_around, Candidate, LeadId, LeadRecord, MAX_SCORE};

#[doc(inline)]
pub use rank::{rank, NearbyIndex, RankOptions, RankedLead, Ranking, SortKey, DEFAULT_SCORE_THRESHOLD};

#[doc(inline)]
pub use store::{validate_records, JsonFileStore, LeadStore, MemoryStore};

#[doc(inline)]
pub use location::{FixedLocation, LocationProvider, NoLocation};

#[doc(inline)]
pub use dashboard::{Dashboard, LeadPatch, LocationInput, NewLead};

#[doc(inline)]
pub use config::Settings;

#[doc(inline)]
pub use error::LeadError;
