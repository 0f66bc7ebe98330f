mod coord;
mod distance;

pub use coord::Coordinate;
pub use distance::{distance_km, distance_km_opt, haversine_km, haversine_km_atan2, EARTH_RADIUS_KM};
