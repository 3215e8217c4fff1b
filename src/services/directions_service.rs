use crate::data::distances::{road_distance_km, DEFAULT_ROAD_DISTANCE_KM};
use crate::models::place::city_key;
use crate::models::route::{RouteInfo, RouteStep};
use crate::services::places_service::GoogleMapsClient;

/// Average road speed assumed by the offline estimate.
const ESTIMATED_SPEED_KMH: u64 = 60;

#[derive(Clone)]
pub struct DirectionsService {
    maps: GoogleMapsClient,
}

impl DirectionsService {
    pub fn new(maps: GoogleMapsClient) -> Self {
        Self { maps }
    }

    /// Driving route from the provider, else the table-based estimate.
    /// Never fails.
    pub async fn route(&self, origin: &str, destination: &str, waypoints: &[String]) -> RouteInfo {
        if !self.maps.is_configured() {
            return estimated_route(origin, destination, "Using estimated route data");
        }

        match self.maps.directions(origin, destination, waypoints).await {
            Ok(route) => RouteInfo {
                origin: origin.to_string(),
                destination: destination.to_string(),
                distance: route.distance_text,
                duration: route.duration_text,
                total_distance: route.total_distance_meters,
                total_duration: route.total_duration_seconds,
                steps: route.steps,
                overview_polyline: route.overview_polyline,
                estimated: false,
                message: None,
            },
            Err(e) => {
                log::warn!("Directions {} -> {} failed: {}", origin, destination, e);
                estimated_route(
                    origin,
                    destination,
                    "Route calculation failed, using estimated data",
                )
            }
        }
    }
}

/// Route estimate from the city distance table at 60 km/h.
pub fn estimated_route(origin: &str, destination: &str, message: &str) -> RouteInfo {
    let from = city_key(origin);
    let to = city_key(destination);
    let km = road_distance_km(from, to).unwrap_or(DEFAULT_ROAD_DISTANCE_KM);
    let hours = km / ESTIMATED_SPEED_KMH;
    let minutes = km % ESTIMATED_SPEED_KMH;
    let distance = format!("{} km", km);
    let duration = format!("{}h {}m", hours, minutes);

    RouteInfo {
        origin: origin.to_string(),
        destination: destination.to_string(),
        distance: distance.clone(),
        duration: duration.clone(),
        total_distance: km * 1000,
        total_duration: hours * 3600 + minutes * 60,
        steps: vec![RouteStep {
            instruction: format!("Drive from {} to {}", from, to),
            distance,
            duration,
        }],
        overview_polyline: None,
        estimated: true,
        message: Some(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_from_table() {
        let route = estimated_route("Mumbai, Maharashtra, India", "Delhi", "estimate");
        assert_eq!(route.distance, "1400 km");
        assert_eq!(route.duration, "23h 20m");
        assert_eq!(route.total_distance, 1_400_000);
        assert_eq!(route.total_duration, 23 * 3600 + 20 * 60);
        assert_eq!(route.steps[0].instruction, "Drive from Mumbai to Delhi");
    }

    #[test]
    fn test_estimate_default_distance() {
        let route = estimated_route("Goa", "Manali", "estimate");
        assert_eq!(route.distance, "1000 km");
        assert_eq!(route.duration, "16h 40m");
        assert!(route.estimated);
    }

    #[actix_rt::test]
    async fn test_route_offline_is_estimated() {
        let service = DirectionsService::new(GoogleMapsClient::new(reqwest::Client::new(), None));
        let route = service.route("Bangalore", "Chennai", &[]).await;
        assert_eq!(route.distance, "350 km");
        assert_eq!(route.message.as_deref(), Some("Using estimated route data"));
    }
}
