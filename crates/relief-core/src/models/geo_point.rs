use serde::{Deserialize, Serialize};

/// Named coordinate pair. Display-only data; no geodesic math is done on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64, name: &str) -> Self {
        Self {
            lat,
            lng,
            name: name.to_string(),
        }
    }
}
