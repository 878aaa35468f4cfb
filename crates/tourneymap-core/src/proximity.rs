//! Radius test against a searched location using great-circle distance.

use crate::tournament::{Coordinate, TournamentRecord};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub const METERS_PER_MILE: f64 = 1_609.344;

/// 30 statute miles.
pub const SEARCH_RADIUS_METERS: f64 = 30.0 * METERS_PER_MILE;

/// Haversine distance between two coordinates in meters.
#[must_use]
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `h` a hair above 1 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_METERS * c
}

/// True iff `record` has both coordinates and lies within `radius_meters`
/// of `center` (boundary inclusive).
#[must_use]
pub fn within_radius(record: &TournamentRecord, center: Coordinate, radius_meters: f64) -> bool {
    record
        .coordinate()
        .is_some_and(|c| distance_meters(c, center) <= radius_meters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(lat: Option<f64>, lon: Option<f64>) -> TournamentRecord {
        TournamentRecord {
            name: "Test Open".to_string(),
            location: "Test City".to_string(),
            year: "2024".to_string(),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn radius_is_thirty_statute_miles() {
        assert!((SEARCH_RADIUS_METERS - 48_280.32).abs() < 1e-6);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let austin = Coordinate::new(30.27, -97.74);
        assert!(distance_meters(austin, austin).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let austin = Coordinate::new(30.27, -97.74);
        let dallas = Coordinate::new(32.78, -96.80);
        let there = distance_meters(austin, dallas);
        let back = distance_meters(dallas, austin);
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn austin_to_dallas_is_about_293_km() {
        let austin = Coordinate::new(30.27, -97.74);
        let dallas = Coordinate::new(32.78, -96.80);
        let km = distance_meters(austin, dallas) / 1_000.0;
        assert!((km - 293.0).abs() < 10.0, "got {km} km");
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinate::new(10.0, 20.0);
        let b = Coordinate::new(11.0, 20.0);
        let km = distance_meters(a, b) / 1_000.0;
        assert!((km - 111.19).abs() < 0.1, "got {km} km");
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = distance_meters(a, b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
    }

    #[test]
    fn nearby_record_is_within_radius() {
        let center = Coordinate::new(30.27, -97.74);
        let record = record_at(Some(30.30), Some(-97.70));
        assert!(within_radius(&record, center, SEARCH_RADIUS_METERS));
    }

    #[test]
    fn distant_record_is_outside_radius() {
        let new_york = Coordinate::new(40.7, -74.0);
        let record = record_at(Some(30.27), Some(-97.74));
        assert!(!within_radius(&record, new_york, SEARCH_RADIUS_METERS));
    }

    #[test]
    fn boundary_distance_is_inclusive() {
        let center = Coordinate::new(30.0, -97.0);
        let record = record_at(Some(30.3), Some(-97.2));
        let exact = distance_meters(Coordinate::new(30.3, -97.2), center);
        assert!(within_radius(&record, center, exact));
        assert!(!within_radius(&record, center, exact - 0.001));
    }

    #[test]
    fn records_missing_a_coordinate_are_never_within_radius() {
        let center = Coordinate::new(30.27, -97.74);
        assert!(!within_radius(&record_at(None, None), center, f64::MAX));
        assert!(!within_radius(&record_at(Some(30.27), None), center, f64::MAX));
        assert!(!within_radius(&record_at(None, Some(-97.74)), center, f64::MAX));
    }
}
