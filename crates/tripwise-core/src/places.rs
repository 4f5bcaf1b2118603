//! Normalized travel records shared by the pipeline, the summary service and
//! the HTTP layer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Literal emitted for a rating that is absent or unparseable upstream.
pub const RATING_NOT_AVAILABLE: &str = "N/A";

/// A geographic point in decimal degrees.
///
/// Construct through [`Coordinate::new`] to guarantee both axes are finite
/// and within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Returns `None` if either axis is non-finite or outside
    /// `-90..=90` / `-180..=180`.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        valid.then_some(Self { lat, lng })
    }
}

/// Upstream rating: either a numeric score or the `"N/A"` marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    NotAvailable,
}

impl Rating {
    #[must_use]
    pub fn score(self) -> Option<f64> {
        match self {
            Rating::Score(value) => Some(value),
            Rating::NotAvailable => None,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Score(value) => write!(f, "{value}"),
            Rating::NotAvailable => f.write_str(RATING_NOT_AVAILABLE),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(value) => serializer.serialize_f64(*value),
            Rating::NotAvailable => serializer.serialize_str(RATING_NOT_AVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Text(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Number(value) => Rating::Score(value),
            Wire::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map_or(Rating::NotAvailable, Rating::Score),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub rating: Rating,
    pub price: String,
    pub currency: Option<String>,
    pub image: String,
    pub coordinates: Coordinate,
    pub address: String,
    pub ranking: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub image: String,
    pub category: String,
    pub duration_minutes: Option<i64>,
    pub price: String,
    pub currency: Option<String>,
    pub rating: Rating,
    pub coordinates: Coordinate,
    pub booking_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_accepts_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_some());
        assert!(Coordinate::new(-90.0, -180.0).is_some());
        assert!(Coordinate::new(0.0, 0.0).is_some());
    }

    #[test]
    fn coordinate_rejects_out_of_range_and_nan() {
        assert!(Coordinate::new(90.5, 0.0).is_none());
        assert!(Coordinate::new(0.0, -180.1).is_none());
        assert!(Coordinate::new(f64::NAN, 0.0).is_none());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn rating_serializes_as_number_or_marker() {
        assert_eq!(
            serde_json::to_value(Rating::Score(4.5)).unwrap(),
            serde_json::json!(4.5)
        );
        assert_eq!(
            serde_json::to_value(Rating::NotAvailable).unwrap(),
            serde_json::json!("N/A")
        );
    }

    #[test]
    fn rating_deserializes_numeric_strings() {
        let parsed: Rating = serde_json::from_value(serde_json::json!("4.0")).unwrap();
        assert_eq!(parsed, Rating::Score(4.0));
        let marker: Rating = serde_json::from_value(serde_json::json!("N/A")).unwrap();
        assert_eq!(marker, Rating::NotAvailable);
    }

    #[test]
    fn hotel_json_shape() {
        let hotel = Hotel {
            name: "Sea Breeze".to_string(),
            rating: Rating::NotAvailable,
            price: "₹2,000-4,000".to_string(),
            currency: Some("INR".to_string()),
            image: "https://img.example/a.jpg".to_string(),
            coordinates: Coordinate { lat: 15.5, lng: 73.8 },
            address: "Not available".to_string(),
            ranking: None,
        };
        let json = serde_json::to_value(&hotel).unwrap();
        assert_eq!(json["rating"], "N/A");
        assert_eq!(json["coordinates"]["lat"], 15.5);
        assert!(json["ranking"].is_null());
    }
}
