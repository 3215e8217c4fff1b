use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceSource {
    Provider,
    Gazetteer,
}

/// A resolved place. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub region: Option<String>,
    pub country: String,
    pub coordinates: Option<Coordinates>,
    pub formatted_address: Option<String>,
    pub source: PlaceSource,
}

/// Autocomplete entry returned by `/api/trips/search-places`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub place_id: String,
    pub description: String,
    pub main_text: String,
    pub secondary_text: String,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub location: Option<PlaceLocation>,
    pub photos: Vec<String>,
    pub types: Vec<String>,
}

/// First comma-separated segment of a free-text place, e.g. `"Mumbai"` for
/// `"Mumbai, Maharashtra, India"`.
pub fn city_key(place: &str) -> &str {
    place.split(',').next().unwrap_or(place).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_key() {
        assert_eq!(city_key("Mumbai, Maharashtra, India"), "Mumbai");
        assert_eq!(city_key("  Delhi "), "Delhi");
        assert_eq!(city_key(""), "");
    }
}
