//! Google Maps Platform client: geocoding, place autocomplete, nearby
//! search, place details and driving directions.
//!
//! Every call fails fast with [`ProviderError::NotConfigured`] when no
//! `GOOGLE_MAPS_API_KEY` is set, so callers go straight to their fallback.

use serde::Deserialize;
use url::Url;

use crate::error::ProviderError;
use crate::models::place::{Coordinates, Place, PlaceSource, PlaceSuggestion};
use crate::models::route::RouteStep;
use crate::services::http::send_json;

const PROVIDER: &str = "google_maps";
const BASE_URL: &str = "https://maps.googleapis.com/maps/api";
const PHOTO_MAX_WIDTH: u32 = 400;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: Option<String>,
    geometry: Geometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    long_name: String,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
    structured_formatting: Option<StructuredFormatting>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct StructuredFormatting {
    #[serde(default)]
    main_text: String,
    #[serde(default)]
    secondary_text: String,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    status: String,
    #[serde(default)]
    results: Vec<NearbyPlace>,
}

/// Summary record from a nearby search.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub geometry: Option<Geometry>,
    pub vicinity: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub price_level: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<PlaceDetailsResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetailsResult {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub types: Vec<String>,
    pub website: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub photo_reference: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
    overview_polyline: Option<Polyline>,
}

#[derive(Debug, Deserialize)]
struct Polyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    distance: Option<TextValue>,
    duration: Option<TextValue>,
    #[serde(default)]
    steps: Vec<DirectionsStep>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
    value: u64,
}

#[derive(Debug, Deserialize)]
struct DirectionsStep {
    html_instructions: Option<String>,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

/// Route as reported by the directions endpoint.
#[derive(Debug, Clone)]
pub struct DrivingRoute {
    pub distance_text: String,
    pub duration_text: String,
    pub total_distance_meters: u64,
    pub total_duration_seconds: u64,
    pub steps: Vec<RouteStep>,
    pub overview_polyline: Option<String>,
}

#[derive(Clone)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl GoogleMapsClient {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self { http, api_key }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured(PROVIDER))?;
        let mut all: Vec<(&str, &str)> = params.to_vec();
        all.push(("key", key));
        Url::parse_with_params(&format!("{}/{}", BASE_URL, path), all)
            .map_err(|e| ProviderError::unexpected(PROVIDER, e.to_string()))
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        send_json(self.http.get(url), PROVIDER).await
    }

    pub async fn geocode(&self, address: &str) -> Result<Place, ProviderError> {
        let url = self.endpoint("geocode/json", &[("address", address)])?;
        let body: GeocodeResponse = self.get(url).await?;
        check_status(&body.status, false)?;

        let result = body
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::unexpected(PROVIDER, "no geocoding results"))?;

        let component = |kind: &str| {
            result
                .address_components
                .iter()
                .find(|c| c.types.iter().any(|t| t == kind))
                .map(|c| c.long_name.clone())
        };

        Ok(Place {
            name: component("locality").unwrap_or_else(|| address.to_string()),
            region: component("administrative_area_level_1"),
            country: component("country").unwrap_or_else(|| "India".to_string()),
            coordinates: Some(Coordinates {
                latitude: result.geometry.location.lat,
                longitude: result.geometry.location.lng,
            }),
            formatted_address: result.formatted_address.clone(),
            source: PlaceSource::Provider,
        })
    }

    /// Autocomplete restricted to Indian geocodable places.
    pub async fn autocomplete(&self, input: &str) -> Result<Vec<PlaceSuggestion>, ProviderError> {
        let url = self.endpoint(
            "place/autocomplete/json",
            &[
                ("input", input),
                ("types", "geocode"),
                ("components", "country:in"),
                ("language", "en"),
            ],
        )?;
        let body: AutocompleteResponse = self.get(url).await?;
        check_status(&body.status, true)?;

        Ok(body
            .predictions
            .into_iter()
            .map(|p| {
                let (main_text, secondary_text) = p
                    .structured_formatting
                    .map(|s| (s.main_text, s.secondary_text))
                    .unwrap_or_default();
                PlaceSuggestion {
                    place_id: p.place_id,
                    description: p.description,
                    main_text,
                    secondary_text,
                    types: p.types,
                }
            })
            .collect())
    }

    /// Tourist attractions around `center`, rated ones only, best first.
    pub async fn nearby_attractions(
        &self,
        center: Coordinates,
        radius_meters: u32,
        limit: usize,
    ) -> Result<Vec<NearbyPlace>, ProviderError> {
        let location = format!("{},{}", center.latitude, center.longitude);
        let radius = radius_meters.to_string();
        let url = self.endpoint(
            "place/nearbysearch/json",
            &[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", "tourist_attraction"),
            ],
        )?;
        let body: NearbyResponse = self.get(url).await?;
        check_status(&body.status, true)?;

        let mut rated: Vec<NearbyPlace> = body
            .results
            .into_iter()
            .filter(|p| p.rating.is_some())
            .collect();
        rated.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0))
        });
        rated.truncate(limit);
        Ok(rated)
    }

    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResult, ProviderError> {
        let url = self.endpoint(
            "place/details/json",
            &[
                ("place_id", place_id),
                (
                    "fields",
                    "name,formatted_address,rating,opening_hours,photos,types,website,formatted_phone_number,geometry",
                ),
            ],
        )?;
        let body: DetailsResponse = self.get(url).await?;
        check_status(&body.status, false)?;
        body.result
            .ok_or_else(|| ProviderError::unexpected(PROVIDER, "details response without result"))
    }

    pub fn photo_url(&self, photo_reference: &str) -> Option<String> {
        let width = PHOTO_MAX_WIDTH.to_string();
        self.endpoint(
            "place/photo",
            &[("maxwidth", width.as_str()), ("photo_reference", photo_reference)],
        )
        .ok()
        .map(String::from)
    }

    pub async fn directions(
        &self,
        origin: &str,
        destination: &str,
        waypoints: &[String],
    ) -> Result<DrivingRoute, ProviderError> {
        let joined = waypoints.join("|");
        let mut params = vec![
            ("origin", origin),
            ("destination", destination),
            ("mode", "driving"),
            ("units", "metric"),
        ];
        if !waypoints.is_empty() {
            params.push(("waypoints", joined.as_str()));
        }
        let url = self.endpoint("directions/json", &params)?;
        let body: DirectionsResponse = self.get(url).await?;
        check_status(&body.status, false)?;

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::unexpected(PROVIDER, "no routes returned"))?;

        let first = route.legs.first();
        let text = |tv: Option<&TextValue>| {
            tv.map(|t| t.text.clone())
                .unwrap_or_else(|| "Unknown".to_string())
        };

        Ok(DrivingRoute {
            distance_text: text(first.and_then(|l| l.distance.as_ref())),
            duration_text: text(first.and_then(|l| l.duration.as_ref())),
            total_distance_meters: route
                .legs
                .iter()
                .filter_map(|l| l.distance.as_ref().map(|d| d.value))
                .sum(),
            total_duration_seconds: route
                .legs
                .iter()
                .filter_map(|l| l.duration.as_ref().map(|d| d.value))
                .sum(),
            steps: first
                .map(|l| {
                    l.steps
                        .iter()
                        .take(5)
                        .map(|s| RouteStep {
                            instruction: s.html_instructions.clone().unwrap_or_default(),
                            distance: text(s.distance.as_ref()),
                            duration: text(s.duration.as_ref()),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            overview_polyline: route.overview_polyline.map(|p| p.points),
        })
    }
}

fn check_status(status: &str, allow_empty: bool) -> Result<(), ProviderError> {
    match status {
        "OK" => Ok(()),
        "ZERO_RESULTS" if allow_empty => Ok(()),
        other => Err(ProviderError::unexpected(PROVIDER, format!("status {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_unconfigured_client_fails_fast() {
        let client = GoogleMapsClient::new(reqwest::Client::new(), None);
        assert!(!client.is_configured());
        assert!(matches!(
            client.geocode("Mumbai").await,
            Err(ProviderError::NotConfigured(_))
        ));
        assert!(client.photo_url("abc").is_none());
    }

    #[test]
    fn test_photo_url_includes_reference() {
        let client = GoogleMapsClient::new(reqwest::Client::new(), Some("k".into()));
        let url = client.photo_url("ref123").unwrap();
        assert!(url.contains("maxwidth=400"));
        assert!(url.contains("photo_reference=ref123"));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status("OK", false).is_ok());
        assert!(check_status("ZERO_RESULTS", true).is_ok());
        assert!(check_status("ZERO_RESULTS", false).is_err());
        assert!(check_status("REQUEST_DENIED", true).is_err());
    }
}
