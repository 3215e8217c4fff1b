use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Activity {
    pub fn new(name: impl Into<String>, time: &str, description: impl Into<String>, cost: &str) -> Self {
        Self {
            name: name.into(),
            time: time.to_string(),
            description: description.into(),
            cost: cost.to_string(),
            image_url: None,
            latitude: None,
            longitude: None,
            rating: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub city: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItinerarySource {
    /// Built from live provider attractions.
    Attractions,
    /// Only the per-city template activities were used.
    Templates,
    /// Produced by the language model.
    Llm,
    /// The single hardcoded day served when the model output was unusable.
    Mock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub total_days: u32,
    pub trip: Vec<ItineraryDay>,
    pub source: ItinerarySource,
}
