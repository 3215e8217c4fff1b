use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    pub distance: String,
    pub duration: String,
}

/// Driving route summary between two places.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub origin: String,
    pub destination: String,
    pub distance: String,
    pub duration: String,
    /// Meters.
    pub total_distance: u64,
    /// Seconds.
    pub total_duration: u64,
    pub steps: Vec<RouteStep>,
    #[serde(rename = "overview_polyline")]
    pub overview_polyline: Option<String>,
    pub estimated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
