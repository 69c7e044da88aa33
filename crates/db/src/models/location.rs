//! Embedded location value shared by species and animals.

use serde::{Deserialize, Serialize};

/// A point location with both named components and a coordinate pair.
///
/// `latitude`/`longitude` and `coordinates` are supplied independently by
/// the caller; neither side is derived or cross-checked against the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
    pub coordinates: [f64; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_the_type_key() {
        let location = Location {
            kind: "Point".to_string(),
            latitude: 60.17,
            longitude: 24.94,
            coordinates: [60.17, 24.94],
        };

        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["type"], "Point");
        assert!(json.get("kind").is_none());
        assert_eq!(json["coordinates"], serde_json::json!([60.17, 24.94]));
    }

    #[test]
    fn round_trips_through_json() {
        let json = serde_json::json!({
            "type": "Point",
            "latitude": -1.5,
            "longitude": 30.0,
            "coordinates": [-1.5, 30.0],
        });

        let location: Location = serde_json::from_value(json).unwrap();
        assert_eq!(location.kind, "Point");
        assert_eq!(location.coordinates, [-1.5, 30.0]);
    }
}
