use super::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Central angle term `h` of the haversine formula.
#[inline]
fn haversine_term(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair outside [0, 1] for antipodal points.
    h.clamp(0.0, 1.0)
}

/// Unrounded great-circle distance, `2R·asin(√h)`.
#[inline]
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    2.0 * EARTH_RADIUS_KM * haversine_term(a, b).sqrt().asin()
}

/// Unrounded great-circle distance, `2R·atan2(√h, √(1-h))`.
#[inline]
pub fn haversine_km_atan2(a: &Coordinate, b: &Coordinate) -> f64 {
    let h = haversine_term(a, b);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Round to two decimal places, half away from zero.
#[inline]
pub(crate) fn round_centi(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Great-circle distance in km, rounded to two decimals.
///
/// Non-finite input yields `0.0` ("unknown distance") instead of an error, so a
/// half-filled form can never break a ranking pass.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }
    round_centi(haversine_km(a, b)).max(0.0)
}

/// [`distance_km`] over possibly-missing endpoints; a missing endpoint yields `0.0`.
#[inline]
pub fn distance_km_opt(a: Option<&Coordinate>, b: Option<&Coordinate>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => distance_km(a, b),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Haversine};

    fn sample_pairs() -> Vec<(Coordinate, Coordinate)> {
        vec![
            (Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)),
            (Coordinate::new(52.5200, 13.4050), Coordinate::new(48.8566, 2.3522)),
            (Coordinate::new(-33.8688, 151.2093), Coordinate::new(40.7128, -74.0060)),
            (Coordinate::new(89.9, 0.0), Coordinate::new(-60.0, 100.0)),
            (Coordinate::new(10.0, 179.9), Coordinate::new(10.0, -179.9)),
            (Coordinate::new(1.0, 1.0), Coordinate::new(1.002, 1.002)),
        ]
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = distance_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn berlin_to_paris() {
        let d = distance_km(&Coordinate::new(52.5200, 13.4050), &Coordinate::new(48.8566, 2.3522));
        assert!((d - 878.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        for (a, b) in sample_pairs() {
            assert_eq!(distance_km(&a, &b), distance_km(&b, &a));
        }
    }

    #[test]
    fn self_distance_is_zero() {
        for (a, b) in sample_pairs() {
            assert_eq!(distance_km(&a, &a), 0.0);
            assert_eq!(distance_km(&b, &b), 0.0);
        }
    }

    #[test]
    fn asin_and_atan2_forms_agree() {
        for (a, b) in sample_pairs() {
            let x = haversine_km(&a, &b);
            let y = haversine_km_atan2(&a, &b);
            assert!((x - y).abs() <= 1e-9 * x.max(1.0), "{x} vs {y}");
        }
    }

    #[test]
    fn agrees_with_geo_haversine() {
        // geo uses R = 6371.0088 km, so allow a small relative drift.
        for (a, b) in sample_pairs() {
            let ours = haversine_km(&a, &b);
            let theirs = Haversine.distance(geo::Point::from(a), geo::Point::from(b)) / 1000.0;
            assert!((ours - theirs).abs() <= 1e-5 * theirs.max(1.0), "{ours} vs {theirs}");
        }
    }

    #[test]
    fn rounds_to_two_decimals() {
        for (a, b) in sample_pairs() {
            let d = distance_km(&a, &b);
            assert!(((d * 100.0).round() - d * 100.0).abs() < 1e-6, "{d}");
        }
        assert_eq!(round_centi(1.005_1), 1.01);
        assert_eq!(round_centi(0.004), 0.0);
    }

    #[test]
    fn non_finite_input_is_unknown_distance() {
        let ok = Coordinate::new(10.0, 10.0);
        assert_eq!(distance_km(&Coordinate::new(f64::NAN, 0.0), &ok), 0.0);
        assert_eq!(distance_km(&ok, &Coordinate::new(0.0, f64::INFINITY)), 0.0);
        assert_eq!(distance_km(&ok, &Coordinate::new(f64::NEG_INFINITY, f64::NAN)), 0.0);
    }

    #[test]
    fn missing_endpoint_is_unknown_distance() {
        let ok = Coordinate::new(10.0, 10.0);
        assert_eq!(distance_km_opt(None, Some(&ok)), 0.0);
        assert_eq!(distance_km_opt(Some(&ok), None), 0.0);
        assert_eq!(distance_km_opt(None, None), 0.0);
        assert_eq!(
            distance_km_opt(Some(&ok), Some(&Coordinate::new(10.0, 11.0))),
            distance_km(&ok, &Coordinate::new(10.0, 11.0)),
        );
    }
}
