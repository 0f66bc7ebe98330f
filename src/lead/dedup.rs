use super::{Candidate, LeadRecord};

/// Case-insensitive name comparison (full Unicode lowercasing).
#[inline]
fn same_name(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// The first existing record that `candidate` collides with, if any.
///
/// A record collides when its name matches case-insensitively OR its location is
/// exactly equal (`==` on both fields).
///
/// Known limitation: there is no tolerance, so coordinates 1e-9° apart are *not* duplicates.
pub fn find_duplicate<'a>(candidate: &Candidate<'_>, existing: &'a [LeadRecord]) -> Option<&'a LeadRecord> {
    existing.iter().find(|lead| {
        lead.location == candidate.location || same_name(&lead.name, candidate.name)
    })
}

/// Whether inserting `candidate` would duplicate any record in `existing`.
#[inline]
pub fn is_duplicate(candidate: &Candidate<'_>, existing: &[LeadRecord]) -> bool {
    find_duplicate(candidate, existing).is_some()
}
