//! Station coordinates

use serde::{Deserialize, Serialize};

/// Separator between latitude and longitude in `metadata.location`
pub const LOCATION_SEPARATOR: &str = ", ";

/// A WGS84 position, serialized as `[lat, lon]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a `"<lat>, <lon>"` string.
    ///
    /// The separator must be exactly comma-space and there must be exactly two
    /// finite numbers. Anything else yields `None`, never a half-parsed point.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split(LOCATION_SEPARATOR);
        let lat = parts.next()?.trim().parse::<f64>().ok()?;
        let lon = parts.next()?.trim().parse::<f64>().ok()?;
        if parts.next().is_some() || !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        Some(Self { lat, lon })
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat, point.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_space() {
        assert_eq!(GeoPoint::parse("55.40, 10.40"), Some(GeoPoint::new(55.40, 10.40)));
        assert_eq!(GeoPoint::parse("-33.9, 151.2"), Some(GeoPoint::new(-33.9, 151.2)));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!(GeoPoint::parse("55.40;10.40"), None);
        assert_eq!(GeoPoint::parse("55.40,10.40"), None);
        assert_eq!(GeoPoint::parse("55.40"), None);
        assert_eq!(GeoPoint::parse(""), None);
        assert_eq!(GeoPoint::parse("north, east"), None);
        assert_eq!(GeoPoint::parse("1.0, 2.0, 3.0"), None);
        assert_eq!(GeoPoint::parse("NaN, 10.0"), None);
    }

    #[test]
    fn test_parse_tolerates_padding() {
        assert_eq!(GeoPoint::parse(" 55.4,  10.4 "), Some(GeoPoint::new(55.4, 10.4)));
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&GeoPoint::new(55.4, 10.4)).unwrap();
        assert_eq!(json, "[55.4,10.4]");
    }
}
