use futures::future::join_all;

use crate::data::attractions as fallback;
use crate::error::ProviderError;
use crate::models::attraction::{Attraction, AttractionLocation};
use crate::models::place::{city_key, Coordinates};
use crate::services::cache::{cache_key, ResponseCache};
use crate::services::place_service::PlaceService;
use crate::services::places_service::{GoogleMapsClient, NearbyPlace};

pub const DEFAULT_RADIUS_METERS: u32 = 5000;
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Clone)]
pub struct AttractionService {
    places: PlaceService,
    maps: GoogleMapsClient,
    cache: ResponseCache,
}

impl AttractionService {
    pub fn new(places: PlaceService, maps: GoogleMapsClient, cache: ResponseCache) -> Self {
        Self {
            places,
            maps,
            cache,
        }
    }

    /// Search center for `location` through the place resolver. Gazetteer
    /// places carry no coordinates, so they cannot center a nearby search.
    pub async fn center(&self, location: &str) -> Result<Coordinates, ProviderError> {
        let place = self.places.resolve(location).await.ok_or_else(|| {
            ProviderError::unexpected("google_maps", format!("no place found for {}", location))
        })?;

        match place.coordinates {
            Some(center) => Ok(center),
            None if !self.maps.is_configured() => Err(ProviderError::NotConfigured("google_maps")),
            None => Err(ProviderError::unexpected(
                "google_maps",
                format!("{} resolved without coordinates", place.name),
            )),
        }
    }

    /// Attractions near `location`, or the static list for its city when the
    /// provider is unavailable or any lookup step fails.
    pub async fn attractions_near(
        &self,
        location: &str,
        radius_meters: u32,
        limit: usize,
    ) -> Vec<Attraction> {
        match self.fetch_live(location, radius_meters, limit).await {
            Ok(attractions) => attractions,
            Err(e) => {
                log::warn!("Using fallback attractions for {}: {}", location, e);
                fallback_attractions(location, limit)
            }
        }
    }

    /// Provider results only; an empty list when the provider cannot answer.
    pub async fn live_attractions(
        &self,
        location: &str,
        radius_meters: u32,
        limit: usize,
    ) -> Vec<Attraction> {
        self.fetch_live(location, radius_meters, limit)
            .await
            .unwrap_or_else(|e| {
                log::warn!("No live attractions for {}: {}", location, e);
                Vec::new()
            })
    }

    async fn fetch_live(
        &self,
        location: &str,
        radius_meters: u32,
        limit: usize,
    ) -> Result<Vec<Attraction>, ProviderError> {
        let key = cache_key(
            "attractions",
            &[location, &radius_meters.to_string(), &limit.to_string()],
        );
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let center = self.center(location).await?;

        let nearby = self
            .maps
            .nearby_attractions(center, radius_meters, limit)
            .await?;

        let attractions: Vec<Attraction> =
            join_all(nearby.into_iter().map(|p| self.with_details(p))).await;

        self.cache.put(&key, &attractions).await;
        Ok(attractions)
    }

    /// Merges a nearby-search summary with its detail record. A failed detail
    /// fetch keeps the summary fields.
    async fn with_details(&self, place: NearbyPlace) -> Attraction {
        let (latitude, longitude) = place
            .geometry
            .as_ref()
            .map(|g| (Some(g.location.lat), Some(g.location.lng)))
            .unwrap_or((None, None));

        let mut attraction = Attraction {
            id: place.place_id.clone(),
            name: place.name.clone(),
            rating: place.rating.unwrap_or(0.0),
            location: AttractionLocation {
                latitude,
                longitude,
                address: place.vicinity.clone(),
            },
            types: place.types.clone(),
            price_level: place.price_level,
            photo_url: None,
            opening_hours: None,
            website: None,
            phone: None,
        };

        match self.maps.place_details(&place.place_id).await {
            Ok(details) => {
                if let Some(name) = details.name {
                    attraction.name = name;
                }
                if let Some(address) = details.formatted_address {
                    attraction.location.address = Some(address);
                }
                if let Some(rating) = details.rating {
                    attraction.rating = rating;
                }
                if !details.types.is_empty() {
                    attraction.types = details.types;
                }
                attraction.opening_hours = details
                    .opening_hours
                    .map(|h| h.weekday_text)
                    .filter(|t| !t.is_empty());
                attraction.website = details.website;
                attraction.phone = details.formatted_phone_number;
                attraction.photo_url = details
                    .photos
                    .first()
                    .and_then(|p| self.maps.photo_url(&p.photo_reference));
            }
            Err(e) => log::info!("Details for {} unavailable: {}", place.name, e),
        }

        attraction
    }
}

/// Static attractions for the city named by `location`, truncated to `limit`.
pub fn fallback_attractions(location: &str, limit: usize) -> Vec<Attraction> {
    let city = city_key(location);
    fallback::for_city(city)
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, a)| Attraction {
            id: format!("fallback_{}_{}", city, index),
            name: a.name.to_string(),
            rating: a.rating,
            location: AttractionLocation {
                latitude: None,
                longitude: None,
                address: Some(format!("{}, {}", a.name, city)),
            },
            types: vec!["tourist_attraction".to_string(), a.category.to_string()],
            price_level: Some(a.price_level),
            photo_url: None,
            opening_hours: None,
            website: None,
            phone: None,
        })
        .collect()
}

/// Drops repeated ids, sorts by rating (best first) and keeps `limit`.
pub fn rank_unique(attractions: Vec<Attraction>, limit: usize) -> Vec<Attraction> {
    let mut seen = std::collections::HashSet::new();
    let mut unique: Vec<Attraction> = attractions
        .into_iter()
        .filter(|a| seen.insert(a.id.clone()))
        .collect();
    unique.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    unique.truncate(limit);
    unique
}
