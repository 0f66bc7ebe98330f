use tracing::debug;

use crate::{geodesy::{distance_km, Coordinate}, lead::{LeadId, LeadRecord}};
use super::{RankOptions, SortKey};

/// A lead annotated with its distance from the reference point for one ranking pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedLead<'a> {
    pub lead: &'a LeadRecord,
    /// Kilometres from the reference; `0.0` when no reference was available.
    pub distance_km: f64,
}

/// Filtered, ordered view over a lead collection. Position 0 is the best lead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking<'a> {
    leads: Vec<RankedLead<'a>>,
}

impl<'a> Ranking<'a> {
    /// The top-ranked lead, or `None` when nothing survived the filter.
    #[inline] pub fn best(&self) -> Option<&RankedLead<'a>> { self.leads.first() }

    /// Whether the lead with `id` is the current best.
    #[inline]
    pub fn is_best(&self, id: &LeadId) -> bool {
        self.best().is_some_and(|best| &best.lead.id == id)
    }

    #[inline] pub fn len(&self) -> usize { self.leads.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.leads.is_empty() }

    #[inline] pub fn as_slice(&self) -> &[RankedLead<'a>] { &self.leads }

    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, RankedLead<'a>> { self.leads.iter() }

    #[inline] pub fn into_vec(self) -> Vec<RankedLead<'a>> { self.leads }
}

impl<'a> IntoIterator for Ranking<'a> {
    type Item = RankedLead<'a>;
    type IntoIter = std::vec::IntoIter<RankedLead<'a>>;

    fn into_iter(self) -> Self::IntoIter { self.leads.into_iter() }
}

/// Annotate, filter and order `records` for display.
///
/// 1. every record gets its distance from `reference` (`0.0` without one);
/// 2. records scoring `<= opts.min_score` are dropped;
/// 3. the rest are stably sorted by score (descending) or distance (ascending).
///
/// Ties keep input order, so without a reference a distance sort is the identity.
/// Pure: the records themselves are never touched.
pub fn rank<'a>(records: &'a [LeadRecord], reference: Option<&Coordinate>, opts: &RankOptions) -> Ranking<'a> {
    let mut leads: Vec<RankedLead<'a>> = records.iter()
        .map(|lead| RankedLead {
            lead,
            distance_km: reference.map_or(0.0, |origin| distance_km(origin, &lead.location)),
        })
        .filter(|ranked| opts.admits(ranked.lead.score))
        .collect();

    // `sort_by` is stable.
    match opts.sort_by {
        SortKey::Score => leads.sort_by(|a, b| b.lead.score.cmp(&a.lead.score)),
        SortKey::Distance => leads.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km)),
    }

    debug!(
        total = records.len(),
        kept = leads.len(),
        sort_by = %opts.sort_by,
        min_score = ?opts.min_score,
        has_reference = reference.is_some(),
        "ranked leads"
    );

    Ranking { leads }
}
