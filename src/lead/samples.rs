use crate::geodesy::Coordinate;

/// Degree offsets of the demo leads the map screen places around the user.
const SAMPLE_OFFSETS: [(&str, f64, f64); 3] = [
    ("Lead A",  0.002,  0.002),
    ("Lead B", -0.003,  0.001),
    ("Lead C",  0.001, -0.003),
];

/// Names and positions of three demo leads a few hundred metres from `reference`.
pub fn samples_around(reference: &Coordinate) -> Vec<(&'static str, Coordinate)> {
    SAMPLE_OFFSETS.iter()
        .map(|&(name, d_lat, d_lon)| (name, reference.offset(d_lat, d_lon)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::distance_km;

    #[test]
    fn samples_are_close_and_distinct() {
        let me = Coordinate::new(52.37, 4.89);
        let samples = samples_around(&me);
        assert_eq!(samples.iter().map(|(n, _)| *n).collect::<Vec<_>>(), ["Lead A", "Lead B", "Lead C"]);

        for (_, at) in &samples {
            let d = distance_km(&me, at);
            assert!(d > 0.0 && d < 1.0, "{d}");
        }
        assert_ne!(samples[0].1, samples[1].1);
        assert_ne!(samples[1].1, samples[2].1);
    }
}
