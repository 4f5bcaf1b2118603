//! Great-circle distance helpers used by the geo-proximity filters.

use tripwise_core::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1_r = a.lat.to_radians();
    let lat2_r = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1_r.cos() * lat2_r.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `h` a hair above 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

#[must_use]
pub fn within_radius(a: Coordinate, b: Coordinate, km: f64) -> bool {
    distance_km(a, b) <= km
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).expect("test coordinate in range")
    }

    #[test]
    fn same_point_is_zero() {
        let goa = coord(15.2993, 74.124);
        assert!(distance_km(goa, goa).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let panaji = coord(15.4909, 73.8278);
        let manali = coord(32.2432, 77.1892);
        let there = distance_km(panaji, manali);
        let back = distance_km(manali, panaji);
        assert!((there - back).abs() < 1e-9, "{there} != {back}");
    }

    #[test]
    fn quarter_great_circle_at_equator() {
        let dist = distance_km(coord(0.0, 0.0), coord(0.0, 90.0));
        assert!((dist - 10_007.5).abs() < 0.1, "expected ~10007.5km, got {dist}");
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let dist = distance_km(coord(0.0, 0.0), coord(0.0, 180.0));
        assert!(dist.is_finite());
        assert!((dist - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.01);
    }

    #[test]
    fn within_radius_is_inclusive() {
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 1.0);
        let exact = distance_km(a, b);
        assert!(within_radius(a, b, exact));
        assert!(!within_radius(a, b, exact - 0.001));
    }

    #[test]
    fn mumbai_to_goa_exceeds_hotel_radius() {
        // Mumbai to Panaji is roughly 420km.
        let mumbai = coord(19.076, 72.8777);
        let panaji = coord(15.4909, 73.8278);
        let dist = distance_km(mumbai, panaji);
        assert!((dist - 410.0).abs() < 30.0, "got {dist}");
        assert!(!within_radius(mumbai, panaji, 200.0));
    }
}
