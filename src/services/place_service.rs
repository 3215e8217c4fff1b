use crate::models::place::{city_key, Place, PlaceDetails, PlaceLocation, PlaceSuggestion};
use crate::services::gazetteer;
use crate::services::places_service::GoogleMapsClient;

/// Resolves free-text places, preferring the maps provider and falling back
/// to the built-in gazetteer.
#[derive(Clone)]
pub struct PlaceService {
    maps: GoogleMapsClient,
}

impl PlaceService {
    pub fn new(maps: GoogleMapsClient) -> Self {
        Self { maps }
    }

    pub async fn resolve(&self, text: &str) -> Option<Place> {
        if text.trim().is_empty() {
            return None;
        }
        if self.maps.is_configured() {
            match self.maps.geocode(text).await {
                Ok(place) => return Some(place),
                Err(e) => log::warn!("Geocoding {} failed, using gazetteer: {}", text, e),
            }
        }
        gazetteer::resolve(text).map(|c| c.to_place())
    }

    /// Autocomplete suggestions. Blank queries and misses return an empty list.
    pub async fn suggest(&self, query: &str) -> Vec<PlaceSuggestion> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        if self.maps.is_configured() {
            match self.maps.autocomplete(query).await {
                Ok(places) if !places.is_empty() => return places,
                Ok(_) => log::info!("No provider suggestions for {}, using gazetteer", query),
                Err(e) => log::warn!("Autocomplete for {} failed, using gazetteer: {}", query, e),
            }
        }
        gazetteer::suggest(query)
    }

    pub async fn details(&self, place_id: &str) -> PlaceDetails {
        if gazetteer::is_local_place_id(place_id) {
            let address = gazetteer::find_by_place_id(place_id)
                .map(|c| c.full_name())
                .unwrap_or_else(|| place_id.replace('_', " "));
            return PlaceDetails {
                place_id: place_id.to_string(),
                name: city_key(&address).to_string(),
                address,
                location: None,
                photos: Vec::new(),
                types: locality_types(),
            };
        }

        if self.maps.is_configured() {
            match self.maps.place_details(place_id).await {
                Ok(details) => {
                    return PlaceDetails {
                        place_id: place_id.to_string(),
                        name: details.name.clone().unwrap_or_else(|| place_id.to_string()),
                        address: details
                            .formatted_address
                            .clone()
                            .unwrap_or_else(|| place_id.to_string()),
                        location: details.geometry.as_ref().map(|g| PlaceLocation {
                            lat: g.location.lat,
                            lng: g.location.lng,
                        }),
                        photos: details
                            .photos
                            .iter()
                            .take(3)
                            .filter_map(|p| self.maps.photo_url(&p.photo_reference))
                            .collect(),
                        types: details.types,
                    }
                }
                Err(e) => log::warn!("Place details for {} failed: {}", place_id, e),
            }
        }

        PlaceDetails {
            place_id: place_id.to_string(),
            name: place_id.to_string(),
            address: place_id.to_string(),
            location: None,
            photos: Vec::new(),
            types: locality_types(),
        }
    }
}

fn locality_types() -> Vec<String> {
    vec!["locality".to_string(), "political".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::PlaceSource;

    fn offline() -> PlaceService {
        PlaceService::new(GoogleMapsClient::new(reqwest::Client::new(), None))
    }

    #[actix_rt::test]
    async fn test_resolve_uses_gazetteer_offline() {
        let place = offline().resolve("Manali, Himachal Pradesh").await.unwrap();
        assert_eq!(place.name, "Manali");
        assert_eq!(place.source, PlaceSource::Gazetteer);
        assert!(offline().resolve("Nowhere Town").await.is_none());
    }

    #[actix_rt::test]
    async fn test_details_for_local_id() {
        let details = offline().details("mumbai,_maharashtra,_india").await;
        assert_eq!(details.name, "Mumbai");
        assert_eq!(details.address, "Mumbai, Maharashtra, India");
        assert!(details.location.is_none());
    }

    #[actix_rt::test]
    async fn test_details_echo_without_provider() {
        let details = offline().details("ChIJabc").await;
        assert_eq!(details.name, "ChIJabc");
        assert_eq!(details.types, vec!["locality", "political"]);
    }
}
