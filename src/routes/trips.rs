use actix_web::{web, HttpRequest, HttpResponse};
use futures::future::join_all;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::models::tips::TravelTips;
use crate::models::transport::AccommodationOption;
use crate::models::trip::{parse_date, TripRequest};
use crate::services::attraction_service::rank_unique;
use crate::state::AppState;

const DEFAULT_ATTRACTION_RADIUS: u32 = 50_000;
const ATTRACTIONS_PER_LOCATION: usize = 10;
const MAX_ATTRACTIONS: usize = 15;

#[derive(Deserialize)]
pub struct SearchQuery {
    query: Option<String>,
}

#[derive(Deserialize)]
pub struct DirectionsQuery {
    origin: Option<String>,
    destination: Option<String>,
    waypoints: Option<String>,
}

#[derive(Deserialize)]
pub struct TransportQuery {
    origin: Option<String>,
    destination: Option<String>,
    date: Option<String>,
    travelers: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelQuery {
    location: Option<String>,
    check_in: Option<String>,
    check_out: Option<String>,
    adults: Option<u32>,
    rooms: Option<u32>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Splits a `|`-separated list, dropping blanks.
fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split('|')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/*
    /api/trips/search-places?query=
*/
pub async fn search_places(
    state: web::Data<AppState>,
    params: web::Query<SearchQuery>,
) -> HttpResponse {
    let places = match present(&params.query) {
        Some(query) => state.places.suggest(query).await,
        None => Vec::new(),
    };
    HttpResponse::Ok().json(json!({ "places": places }))
}

/*
    /api/trips/place-details/{place_id}
*/
pub async fn place_details(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let details = state.places.details(&path.into_inner()).await;
    HttpResponse::Ok().json(details)
}

/*
    /api/trips/directions?origin=&destination=&waypoints=a|b
*/
pub async fn directions(
    state: web::Data<AppState>,
    params: web::Query<DirectionsQuery>,
) -> Result<HttpResponse, ApiError> {
    let (Some(origin), Some(destination)) = (present(&params.origin), present(&params.destination))
    else {
        return Err(ApiError::validation("Origin and destination are required"));
    };
    let waypoints: Vec<String> = params
        .waypoints
        .as_deref()
        .map(|w| split_list(w).collect())
        .unwrap_or_default();

    let route = state.directions.route(origin, destination, &waypoints).await;
    Ok(HttpResponse::Ok().json(route))
}

/*
    /api/trips/attractions?locations=a&locations=b&radius=
*/
pub async fn attractions(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let mut locations = Vec::new();
    let mut radius = DEFAULT_ATTRACTION_RADIUS;
    for (key, value) in url::form_urlencoded::parse(req.query_string().as_bytes()) {
        match key.as_ref() {
            "locations" | "locations[]" => locations.extend(split_list(&value)),
            "radius" => radius = value.parse().unwrap_or(DEFAULT_ATTRACTION_RADIUS),
            _ => {}
        }
    }
    if locations.is_empty() {
        return Err(ApiError::validation("Locations are required"));
    }

    let lookups = locations.iter().map(|location| {
        state
            .attractions
            .attractions_near(location, radius, ATTRACTIONS_PER_LOCATION)
    });
    let found: Vec<_> = join_all(lookups).await.into_iter().flatten().collect();

    Ok(HttpResponse::Ok().json(json!({ "attractions": rank_unique(found, MAX_ATTRACTIONS) })))
}

/*
    /api/trips/transport-options?origin=&destination=&date=&travelers=
*/
pub async fn transport_options(
    state: web::Data<AppState>,
    params: web::Query<TransportQuery>,
) -> Result<HttpResponse, ApiError> {
    let (Some(origin), Some(destination), Some(date)) = (
        present(&params.origin),
        present(&params.destination),
        present(&params.date),
    ) else {
        return Err(ApiError::validation(
            "Origin, destination, and date are required",
        ));
    };
    let date = parse_date(date)?;
    let travelers = params.travelers.unwrap_or(1).max(1);

    let options = state
        .prices
        .transport_options(origin, destination, date, None, travelers)
        .await;

    Ok(HttpResponse::Ok().json(json!({
        "summary": {
            "cheapestFlight": options.cheapest_flight(),
            "cheapestTrain": options.cheapest_train(),
            "cheapestBus": options.cheapest_bus(),
        },
        "flights": options.flights,
        "trains": options.trains,
        "buses": options.buses,
    })))
}

fn hotel_summary(hotels: &[AccommodationOption]) -> serde_json::Value {
    let prices = hotels.iter().map(|h| h.price);
    let min = prices.clone().reduce(f64::min);
    let max = prices.reduce(f64::max);
    let average_rating = if hotels.is_empty() {
        None
    } else {
        Some(hotels.iter().map(|h| h.rating).sum::<f64>() / hotels.len() as f64)
    };

    json!({
        "totalHotels": hotels.len(),
        "priceRange": { "min": min, "max": max },
        "averageRating": average_rating,
    })
}

/*
    /api/trips/hotel-options?location=&checkIn=&checkOut=&adults=&rooms=
*/
pub async fn hotel_options(
    state: web::Data<AppState>,
    params: web::Query<HotelQuery>,
) -> Result<HttpResponse, ApiError> {
    let (Some(location), Some(check_in), Some(check_out)) = (
        present(&params.location),
        present(&params.check_in),
        present(&params.check_out),
    ) else {
        return Err(ApiError::validation(
            "Location, check-in, and check-out dates are required",
        ));
    };
    let check_in = parse_date(check_in)?;
    let check_out = parse_date(check_out)?;
    if check_out <= check_in {
        return Err(ApiError::validation("Check-out must be after check-in"));
    }

    let hotels = state
        .prices
        .hotel_prices(
            location,
            check_in,
            check_out,
            params.adults.unwrap_or(1).max(1),
            params.rooms.unwrap_or(1).max(1),
        )
        .await;

    Ok(HttpResponse::Ok().json(json!({
        "summary": hotel_summary(&hotels),
        "hotels": hotels,
    })))
}

/*
    /api/trips/generate-packages
*/
pub async fn generate_packages(
    state: web::Data<AppState>,
    input: web::Json<TripRequest>,
) -> Result<HttpResponse, ApiError> {
    let plan = input.validate()?;
    let package = state.packages.travel_package(&plan).await;
    Ok(HttpResponse::Ok().json(package))
}

/*
    /api/trips/weather/{location}
*/
pub async fn weather(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let report = state.weather.report(&path.into_inner()).await;
    HttpResponse::Ok().json(report)
}

/*
    /api/trips/travel-tips/{destination}
*/
pub async fn travel_tips(path: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(TravelTips::for_destination(&path.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        let items: Vec<String> = split_list(" Jaipur | | Agra, Uttar Pradesh").collect();
        assert_eq!(items, vec!["Jaipur", "Agra, Uttar Pradesh"]);
    }

    #[test]
    fn test_hotel_summary() {
        let hotel = |price: f64, rating: f64| AccommodationOption {
            id: "h".to_string(),
            name: "h".to_string(),
            price,
            currency: "INR".to_string(),
            rating,
            image: None,
            amenities: Vec::new(),
        };
        let summary = hotel_summary(&[hotel(2000.0, 4.0), hotel(5000.0, 4.6)]);
        assert_eq!(summary["totalHotels"], 2);
        assert_eq!(summary["priceRange"]["min"], 2000.0);
        assert_eq!(summary["priceRange"]["max"], 5000.0);
        assert!((summary["averageRating"].as_f64().unwrap() - 4.3).abs() < 1e-9);

        let empty = hotel_summary(&[]);
        assert!(empty["priceRange"]["min"].is_null());
    }
}
