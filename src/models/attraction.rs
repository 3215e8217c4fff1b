use serde::{Deserialize, Serialize};

/// Point of interest near a place. Ephemeral, fetched per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    #[serde(rename = "place_id")]
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub location: AttractionLocation,
    pub types: Vec<String>,
    /// Provider price tier, 0 (free) to 4 (very expensive).
    pub price_level: Option<u8>,
    pub photo_url: Option<String>,
    pub opening_hours: Option<Vec<String>>,
    pub website: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttractionLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}
