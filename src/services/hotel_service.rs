use serde_json::Value;

use crate::error::ProviderError;
use crate::models::transport::AccommodationOption;
use crate::services::http::send_json;

const PROVIDER: &str = "rapidapi_hotels";

/// Stay parameters for one hotel search.
#[derive(Debug, Clone)]
pub struct HotelQuery<'a> {
    pub location: &'a str,
    pub check_in: &'a str,
    pub check_out: &'a str,
    pub adults: u32,
    pub rooms: u32,
}

/// Hotels partner API on RapidAPI: destination lookup, then property list.
#[derive(Clone)]
pub struct HotelClient {
    http: reqwest::Client,
    api_key: Option<String>,
    host: String,
}

impl HotelClient {
    pub fn new(http: reqwest::Client, api_key: Option<String>, host: String) -> Self {
        Self { http, api_key, host }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured(PROVIDER))?;
        let request = self
            .http
            .get(format!("https://{}/{}", self.host, path))
            .header("X-RapidAPI-Key", key)
            .header("X-RapidAPI-Host", &self.host)
            .query(params);
        send_json(request, PROVIDER).await
    }

    pub async fn search(
        &self,
        query: &HotelQuery<'_>,
    ) -> Result<Vec<AccommodationOption>, ProviderError> {
        let locations = self
            .get(
                "locations/v3/search",
                &[("q", query.location), ("locale", "en_US"), ("currency", "INR")],
            )
            .await?;

        let destination_id = destination_id(&locations).ok_or_else(|| {
            ProviderError::unexpected(PROVIDER, format!("no destination for {}", query.location))
        })?;

        let adults = query.adults.max(1).to_string();
        let rooms = query.rooms.max(1).to_string();
        let listing = self
            .get(
                "properties/v2/list",
                &[
                    ("destinationId", destination_id.as_str()),
                    ("checkIn", query.check_in),
                    ("checkOut", query.check_out),
                    ("adults", adults.as_str()),
                    ("rooms", rooms.as_str()),
                    ("currency", "INR"),
                ],
            )
            .await?;

        parse_properties(&listing)
    }
}

fn destination_id(locations: &Value) -> Option<String> {
    let suggestion = locations.pointer("/suggestions/0")?;
    let id = suggestion
        .pointer("/entities/0/destinationId")
        .or_else(|| suggestion.get("gaiaId"))?;
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_properties(listing: &Value) -> Result<Vec<AccommodationOption>, ProviderError> {
    let properties = listing
        .pointer("/data/propertySearch/properties")
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::unexpected(PROVIDER, "missing property list"))?;

    Ok(properties
        .iter()
        .map(|hotel| {
            let text = |pointer: &str| {
                hotel
                    .pointer(pointer)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            };
            AccommodationOption {
                id: text("/id").unwrap_or_default(),
                name: text("/name").unwrap_or_default(),
                price: hotel
                    .pointer("/price/lead/amount")
                    .and_then(Value::as_f64)
                    .unwrap_or(0.0),
                currency: text("/price/lead/currencyInfo/code").unwrap_or_else(|| "INR".to_string()),
                rating: hotel
                    .pointer("/reviews/score")
                    .and_then(Value::as_f64)
                    .unwrap_or(0.0),
                image: text("/propertyGallery/images/0/image/url"),
                amenities: hotel
                    .get("amenities")
                    .and_then(Value::as_array)
                    .map(|list| {
                        list.iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            }
        })
        .collect())
}
