use futures::future::join_all;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use url::Url;

use crate::error::ProviderError;
use crate::models::itinerary::{Activity, ItineraryDay};
use crate::services::http::send_json;

const PROVIDER: &str = "foursquare";
const SEARCH_URL: &str = "https://api.foursquare.com/v3/places/search";
const PLACES_URL: &str = "https://api.foursquare.com/v3/places";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<FoursquarePlace>,
}

#[derive(Debug, Deserialize)]
struct FoursquarePlace {
    fsq_id: Option<String>,
    geocodes: Option<Geocodes>,
    rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Geocodes {
    main: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct Photo {
    prefix: Option<String>,
    suffix: Option<String>,
}

/// Details found for one activity.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Enrichment {
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: Option<f64>,
}

impl Enrichment {
    fn apply(self, activity: &mut Activity) {
        activity.image_url = self.image_url;
        activity.latitude = self.latitude;
        activity.longitude = self.longitude;
        activity.rating = self.rating;
    }
}

/// Adds photos, coordinates and ratings to generated activities.
#[derive(Clone)]
pub struct EnrichmentService {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl EnrichmentService {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self { http, api_key }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Enriches every activity in place. Lookups that fail leave the
    /// activity untouched.
    pub async fn enrich_days(&self, days: &mut [ItineraryDay], default_city: &str) {
        if !self.is_configured() {
            return;
        }

        for day in days.iter_mut() {
            let city = if day.city.trim().is_empty() {
                default_city.to_string()
            } else {
                day.city.clone()
            };
            let lookups = day.activities.iter().map(|a| self.enrich(&a.name, &city));
            let results = join_all(lookups).await;

            for (activity, result) in day.activities.iter_mut().zip(results) {
                match result {
                    Ok(Some(enrichment)) => enrichment.apply(activity),
                    Ok(None) => {}
                    Err(e) => log::warn!("Enrichment of {} failed: {}", activity.name, e),
                }
            }
        }
    }

    async fn enrich(&self, name: &str, city: &str) -> Result<Option<Enrichment>, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured(PROVIDER))?;

        let url = Url::parse_with_params(
            SEARCH_URL,
            &[("query", name), ("near", city), ("limit", "1")],
        )
        .map_err(|e| ProviderError::unexpected(PROVIDER, e.to_string()))?;

        let search: SearchResponse = send_json(self.authorized(url, api_key), PROVIDER).await?;
        let Some(place) = search.results.into_iter().next() else {
            return Ok(None);
        };

        let image_url = match place.fsq_id.as_deref() {
            Some(id) => self.first_photo(id, api_key).await.unwrap_or_else(|e| {
                log::debug!("No photo for {}: {}", name, e);
                None
            }),
            None => None,
        };
        let coordinates = place.geocodes.and_then(|g| g.main);

        Ok(Some(Enrichment {
            image_url,
            latitude: coordinates.as_ref().map(|c| c.latitude),
            longitude: coordinates.as_ref().map(|c| c.longitude),
            rating: place.rating,
        }))
    }

    async fn first_photo(&self, fsq_id: &str, api_key: &str) -> Result<Option<String>, ProviderError> {
        let url = Url::parse(&format!("{}/{}/photos", PLACES_URL, fsq_id))
            .map_err(|e| ProviderError::unexpected(PROVIDER, e.to_string()))?;
        let photos: Vec<Photo> = send_json(self.authorized(url, api_key), PROVIDER).await?;
        Ok(photos.into_iter().next().and_then(photo_url))
    }

    fn authorized(&self, url: Url, api_key: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(AUTHORIZATION, api_key)
            .header(ACCEPT, "application/json")
    }
}

fn photo_url(photo: Photo) -> Option<String> {
    match (photo.prefix, photo.suffix) {
        (Some(prefix), Some(suffix)) => Some(format!("{}original{}", prefix, suffix)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_url_from_prefix_and_suffix() {
        let photo = Photo {
            prefix: Some("https://fastly.4sqi.net/img/general/".to_string()),
            suffix: Some("/123_abc.jpg".to_string()),
        };
        assert_eq!(
            photo_url(photo).as_deref(),
            Some("https://fastly.4sqi.net/img/general/original/123_abc.jpg")
        );
        assert!(photo_url(Photo { prefix: None, suffix: Some("x".into()) }).is_none());
    }

    #[test]
    fn test_search_result_shape() {
        let search: SearchResponse = serde_json::from_value(serde_json::json!({
            "results": [{
                "fsq_id": "4b0588",
                "geocodes": { "main": { "latitude": 26.98, "longitude": 75.85 } },
                "rating": 8.9
            }]
        }))
        .unwrap();
        let place = &search.results[0];
        assert_eq!(place.fsq_id.as_deref(), Some("4b0588"));
        assert_eq!(place.geocodes.as_ref().and_then(|g| g.main.as_ref()).map(|c| c.latitude), Some(26.98));
    }

    #[actix_rt::test]
    async fn test_unconfigured_leaves_days_alone() {
        let service = EnrichmentService::new(reqwest::Client::new(), None);
        let mut days = vec![ItineraryDay {
            day: 1,
            date: None,
            city: "Goa".to_string(),
            activities: vec![Activity::new("Baga Beach", "09:00 AM", "Beach", "₹0")],
        }];
        let before = days.clone();
        service.enrich_days(&mut days, "Goa").await;
        assert_eq!(days, before);
    }
}
