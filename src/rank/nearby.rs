use rstar::{RTree, RTreeObject, AABB};

use crate::{geodesy::{distance_km, Coordinate, EARTH_RADIUS_KM}, lead::LeadRecord};
use super::RankedLead;

/// Kilometres per degree of latitude on the mean-radius sphere.
const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// A lead position in an R-tree, associated with a record by index.
#[derive(Debug, Clone)]
struct LeadPoint {
    idx: usize, // Index of the record in the indexed slice
    point: geo::Point<f64>, // (lon, lat)
}

impl RTreeObject for LeadPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.point.x(), self.point.y()])
    }
}

/// Spatial index answering "which leads are around me" for the map view.
///
/// The tree works in plain lon/lat degrees and only narrows the candidates; every
/// answer is confirmed with the haversine distance.
#[derive(Debug)]
pub struct NearbyIndex<'a> {
    records: &'a [LeadRecord],
    rtree: RTree<LeadPoint>,
}

impl<'a> NearbyIndex<'a> {
    /// Index `records`. Leads with non-finite coordinates are left out of the tree.
    pub fn new(records: &'a [LeadRecord]) -> Self {
        Self {
            rtree: RTree::bulk_load(records.iter().enumerate()
                .filter(|(_, lead)| lead.location.is_finite())
                .map(|(idx, lead)| LeadPoint { idx, point: lead.location.into() })
                .collect()),
            records,
        }
    }

    #[inline] pub fn len(&self) -> usize { self.rtree.size() }

    #[inline] pub fn is_empty(&self) -> bool { self.rtree.size() == 0 }

    /// Degree envelope covering every point within `radius_km` of `center`,
    /// or `None` when it would wrap a pole or the antimeridian.
    fn envelope_around(center: &Coordinate, radius_km: f64) -> Option<AABB<[f64; 2]>> {
        let d_lat = radius_km / KM_PER_DEGREE;
        let (min_lat, max_lat) = (center.latitude - d_lat, center.latitude + d_lat);
        if min_lat <= -90.0 || max_lat >= 90.0 {
            return None;
        }

        // Widest longitude span is at the latitude closest to a pole.
        let widest = min_lat.abs().max(max_lat.abs()).to_radians().cos();
        let d_lon = radius_km / (KM_PER_DEGREE * widest);
        let (min_lon, max_lon) = (center.longitude - d_lon, center.longitude + d_lon);
        if d_lon >= 180.0 || min_lon < -180.0 || max_lon > 180.0 {
            return None;
        }

        Some(AABB::from_corners([min_lon, min_lat], [max_lon, max_lat]))
    }

    /// Leads within `radius_km` of `center`, nearest first (ties keep input order).
    pub fn within_radius(&self, center: &Coordinate, radius_km: f64) -> Vec<RankedLead<'a>> {
        if !center.is_finite() || radius_km.is_nan() || radius_km < 0.0 {
            return Vec::new();
        }

        // Reported distances are rounded to 0.01 km, so pad the search by half of that.
        let mut candidates: Vec<usize> = match Self::envelope_around(center, radius_km + 0.005) {
            Some(envelope) => self.rtree.locate_in_envelope_intersecting(&envelope).map(|p| p.idx).collect(),
            None => self.rtree.iter().map(|p| p.idx).collect(),
        };
        candidates.sort_unstable();

        let mut hits: Vec<RankedLead<'a>> = candidates.into_iter()
            .map(|idx| {
                let lead = &self.records[idx];
                RankedLead { lead, distance_km: distance_km(center, &lead.location) }
            })
            .filter(|ranked| ranked.distance_km <= radius_km)
            .collect();
        hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        hits
    }

    /// The closest lead to `center`; the earliest record wins a tie.
    pub fn nearest(&self, center: &Coordinate) -> Option<RankedLead<'a>> {
        if !center.is_finite() {
            return None;
        }

        self.rtree.iter()
            .map(|p| {
                let lead = &self.records[p.idx];
                (p.idx, RankedLead { lead, distance_km: distance_km(center, &lead.location) })
            })
            .min_by(|(ia, a), (ib, b)| a.distance_km.total_cmp(&b.distance_km).then(ia.cmp(ib)))
            .map(|(_, ranked)| ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::samples_around;

    fn seeded(me: &Coordinate) -> Vec<LeadRecord> {
        samples_around(me).into_iter().enumerate()
            .map(|(i, (name, at))| LeadRecord::new(i.to_string(), name, at, 80))
            .collect()
    }

    #[test]
    fn nearest_of_samples_is_lead_a() {
        // At the equator A is ~0.31 km away, B and C ~0.35 km.
        let me = Coordinate::new(0.0, 0.0);
        let records = seeded(&me);
        let index = NearbyIndex::new(&records);
        assert_eq!(index.len(), 3);
        assert_eq!(index.nearest(&me).unwrap().lead.name, "Lead A");
    }

    #[test]
    fn within_radius_is_sorted_and_bounded() {
        let me = Coordinate::new(52.37, 4.89);
        let mut records = seeded(&me);
        records.push(LeadRecord::new("far", "Far away", Coordinate::new(48.85, 2.35), 90));
        let index = NearbyIndex::new(&records);

        let hits = index.within_radius(&me, 1.0);
        assert_eq!(hits.len(), 3);
        assert!(hits.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
        assert!(hits.iter().all(|h| h.distance_km <= 1.0));

        assert_eq!(index.within_radius(&me, 1000.0).len(), 4);
        assert!(index.within_radius(&me, 0.1).is_empty());
    }

    #[test]
    fn antimeridian_query_falls_back_to_full_scan() {
        let records = vec![
            LeadRecord::new("w", "West", Coordinate::new(0.0, 179.99), 50),
            LeadRecord::new("e", "East", Coordinate::new(0.0, -179.99), 50),
        ];
        let index = NearbyIndex::new(&records);
        let hits = index.within_radius(&Coordinate::new(0.0, 179.995), 5.0);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].lead.id.as_str(), "w");
    }

    #[test]
    fn polar_query_falls_back_to_full_scan() {
        let records = vec![LeadRecord::new("p", "Pole camp", Coordinate::new(89.99, 120.0), 50)];
        let index = NearbyIndex::new(&records);
        assert_eq!(index.within_radius(&Coordinate::new(89.99, -60.0), 10.0).len(), 1);
    }

    #[test]
    fn non_finite_records_and_centers_are_ignored() {
        let records = vec![
            LeadRecord::new("bad", "Bad", Coordinate::new(f64::NAN, 0.0), 50),
            LeadRecord::new("ok", "Ok", Coordinate::new(0.0, 0.0), 50),
        ];
        let index = NearbyIndex::new(&records);
        assert_eq!(index.len(), 1);
        assert!(index.nearest(&Coordinate::new(f64::NAN, 0.0)).is_none());
        assert!(index.within_radius(&Coordinate::new(0.0, 0.0), f64::NAN).is_empty());
        assert_eq!(index.nearest(&Coordinate::new(1.0, 1.0)).unwrap().lead.id.as_str(), "ok");
    }

    #[test]
    fn empty_index_has_no_nearest() {
        let index = NearbyIndex::new(&[]);
        assert!(index.is_empty());
        assert!(index.nearest(&Coordinate::new(0.0, 0.0)).is_none());
    }
}
