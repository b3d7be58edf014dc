//! Great-circle distance between coordinates.
//!
//! Haversine formula in miles. Ignores roads, so it understates true
//! driving distance, but it is the right tool for corridor checks and
//! for parameterizing a polyline that already follows the roads.

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance between two (lat, lng) points in miles.
///
/// Pure function; NaN in propagates as NaN out.
pub fn great_circle_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point() {
        let dist = great_circle_miles((36.1, -115.1), (36.1, -115.1));
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_known_distance() {
        // Las Vegas (36.17, -115.14) to Los Angeles (34.05, -118.24)
        // Actual distance ~230 miles
        let dist = great_circle_miles((36.17, -115.14), (34.05, -118.24));
        assert!(
            dist > 220.0 && dist < 240.0,
            "LV to LA should be ~230mi, got {}",
            dist
        );
    }

    #[test]
    fn test_symmetric() {
        let a = (36.1, -115.1);
        let b = (36.2, -115.2);
        assert!((great_circle_miles(a, b) - great_circle_miles(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        let dist = great_circle_miles((f64::NAN, -115.1), (36.1, -115.1));
        assert!(dist.is_nan());
    }
}
