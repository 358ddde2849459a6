use serde::{Deserialize, Serialize};

/// Mean Earth radius in statute miles, matching the distance unit used by
/// the viewport radius predicate.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

///
/// GeoPoint
///
/// A latitude/longitude pair in decimal degrees.
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

///
/// Bounds
///
/// An axis-aligned map viewport rectangle. Edges are decimal degrees;
/// north/south are latitudes, east/west are longitudes.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Degenerate bounds (all four edges zero) come from clients that have
    /// not yet measured their viewport; they never produce a containment
    /// predicate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.north == 0.0 && self.south == 0.0 && self.east == 0.0 && self.west == 0.0
    }

    /// Whether a point lies inside the rectangle, edges inclusive.
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lon >= self.west
            && point.lon <= self.east
    }
}

///
/// Great-circle distance between two points, in miles, via the haversine
/// formula.
///

#[must_use]
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = GeoPoint::new(42.3601, -71.0589);
        assert_eq!(haversine_miles(p, p), 0.0);
    }

    #[test]
    fn boston_to_cambridge_is_about_three_miles() {
        let boston = GeoPoint::new(42.3601, -71.0589);
        let cambridge = GeoPoint::new(42.3736, -71.1097);

        let miles = haversine_miles(boston, cambridge);
        assert!(miles > 2.0 && miles < 4.0, "got {miles}");
    }

    #[test]
    fn degenerate_bounds_detected() {
        assert!(Bounds::default().is_degenerate());
        assert!(!Bounds::new(42.4, 42.3, -71.0, -71.1).is_degenerate());
    }

    #[test]
    fn containment_is_edge_inclusive() {
        let bounds = Bounds::new(42.4, 42.3, -71.0, -71.1);
        assert!(bounds.contains(GeoPoint::new(42.4, -71.0)));
        assert!(bounds.contains(GeoPoint::new(42.35, -71.05)));
        assert!(!bounds.contains(GeoPoint::new(42.5, -71.05)));
    }
}
