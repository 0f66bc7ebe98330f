mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use ahash::AHashSet;
use anyhow::Result;

use crate::{error::LeadError, lead::{find_duplicate, LeadRecord, MAX_SCORE}};

/// Where the dashboard keeps its leads between runs.
///
/// Implementations must round-trip the sequence losslessly and in order.
pub trait LeadStore {
    /// Read every stored lead, in stored order. An empty store yields an empty vector.
    fn load(&self) -> Result<Vec<LeadRecord>>;

    /// Replace the stored collection with `leads`.
    fn save(&mut self, leads: &[LeadRecord]) -> Result<()>;
}

/// Check the collection-level invariants.
///
/// Ids are unique, names are non-blank, scores are at most [`MAX_SCORE`], locations are
/// valid coordinates, and no lead duplicates an earlier one by name or exact location.
pub fn validate_records(leads: &[LeadRecord]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(leads.len());
    for (i, lead) in leads.iter().enumerate() {
        if !seen.insert(&lead.id) {
            return Err(LeadError::DuplicateId(lead.id.to_string()).into());
        }
        if lead.name.trim().is_empty() {
            return Err(LeadError::InvalidInput(format!("lead {} has an empty name", lead.id)).into());
        }
        if lead.score > MAX_SCORE {
            return Err(LeadError::InvalidInput(
                format!("lead {} has score {} (max {MAX_SCORE})", lead.id, lead.score)
            ).into());
        }
        if !lead.location.is_valid() {
            return Err(LeadError::InvalidInput(
                format!("lead {} has coordinate out of range: {}", lead.id, lead.location)
            ).into());
        }
        if let Some(earlier) = find_duplicate(&lead.as_candidate(), &leads[..i]) {
            return Err(LeadError::Duplicate(
                format!("lead {} matches {:?} ({})", lead.id, earlier.name, earlier.id)
            ).into());
        }
    }
    Ok(())
}
