use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use serial_test::serial;

mod common;
use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_search_places_uses_gazetteer() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/search-places?query=mum")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let places = body["places"].as_array().unwrap();
    assert!(!places.is_empty());
    assert!(places.len() <= 25);
    assert_eq!(places[0]["main_text"], "Mumbai");
    assert_eq!(places[0]["description"], "Mumbai, Maharashtra, India");
}

#[actix_rt::test]
#[serial]
async fn test_search_places_without_query_is_empty() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/search-places")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["places"], json!([]));
}

#[actix_rt::test]
#[serial]
async fn test_place_details_for_local_id() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/place-details/jaipur,_rajasthan,_india")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Jaipur");
    assert_eq!(body["address"], "Jaipur, Rajasthan, India");
}

#[actix_rt::test]
#[serial]
async fn test_directions_requires_both_ends() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/directions?origin=Mumbai")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Origin and destination are required");
}

#[actix_rt::test]
#[serial]
async fn test_directions_estimate_from_distance_table() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/directions?origin=Mumbai&destination=Delhi")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["estimated"], true);
    assert_eq!(body["distance"], "1400 km");
    assert_eq!(body["duration"], "23h 20m");
    assert_eq!(body["totalDistance"], 1_400_000);
}

#[actix_rt::test]
#[serial]
async fn test_attractions_require_locations() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/attractions")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Locations are required");
}

#[actix_rt::test]
#[serial]
async fn test_attractions_are_ranked_across_locations() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/attractions?locations=Mumbai&locations=Delhi")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let attractions = body["attractions"].as_array().unwrap();
    assert!(!attractions.is_empty());
    assert!(attractions.len() <= 15);

    let ratings: Vec<f64> = attractions
        .iter()
        .map(|a| a["rating"].as_f64().unwrap())
        .collect();
    assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[actix_rt::test]
#[serial]
async fn test_transport_options_requires_date() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/transport-options?origin=Mumbai&destination=Delhi")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Origin, destination, and date are required");
}

#[actix_rt::test]
#[serial]
async fn test_transport_options_bad_travelers_answers_json_error() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/transport-options?origin=Mumbai&destination=Delhi&date=2024-02-15&travelers=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("Query deserialize error"));
}

#[actix_rt::test]
#[serial]
async fn test_transport_options_offline_estimates() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/transport-options?origin=Mumbai&destination=Delhi&date=2024-02-15&travelers=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    for mode in ["flights", "trains", "buses"] {
        assert!(!body[mode].as_array().unwrap().is_empty(), "{} missing", mode);
    }

    let cheapest_bus = body["summary"]["cheapestBus"].as_f64().unwrap();
    let bus_prices: Vec<f64> = body["buses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["price"].as_f64().unwrap())
        .collect();
    assert!(bus_prices.iter().all(|p| *p >= cheapest_bus));
}

#[actix_rt::test]
#[serial]
async fn test_hotel_options_offline_estimates() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/hotel-options?location=Goa&checkIn=2024-03-01&checkOut=2024-03-04&rooms=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let hotels = body["hotels"].as_array().unwrap();
    assert!(!hotels.is_empty());
    assert_eq!(body["summary"]["totalHotels"], hotels.len());
    // 3 nights, 2 rooms at the base nightly rate
    assert_eq!(body["summary"]["priceRange"]["min"], 12000.0);
}

#[actix_rt::test]
#[serial]
async fn test_hotel_options_rejects_reversed_dates() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/hotel-options?location=Goa&checkIn=2024-03-04&checkOut=2024-03-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
#[serial]
async fn test_generate_packages_requires_fields() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/generate-packages")
        .set_json(&json!({ "startPlace": "Mumbai" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing required fields");
}

#[actix_rt::test]
#[serial]
async fn test_generate_packages_for_every_tier() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/generate-packages")
        .set_json(&json!({
            "startPlace": "Mumbai",
            "endPlace": "Delhi",
            "startDate": "2024-02-15",
            "endDate": "2024-02-20",
            "travelers": 2
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let tiers: Vec<&str> = body["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["type"].as_str().unwrap())
        .collect();
    assert_eq!(tiers, vec!["budget", "comfort", "luxury"]);
    assert_eq!(body["tripSummary"]["travelers"], 2);
    assert_eq!(body["routeInfo"]["estimated"], true);
}

#[actix_rt::test]
#[serial]
async fn test_generate_packages_budget_filter() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/generate-packages")
        .set_json(&json!({
            "startPlace": "Mumbai",
            "endPlace": "Goa",
            "startDate": "2024-02-15",
            "endDate": "2024-02-18",
            "budget": "luxury"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let packages = body["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0]["type"], "luxury");
}

#[actix_rt::test]
#[serial]
async fn test_weather_is_estimated_offline() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/weather/Jaipur")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["location"], "Jaipur");
    assert_eq!(body["estimated"], true);
    assert_eq!(body["forecast"].as_array().unwrap().len(), 5);
}

#[actix_rt::test]
#[serial]
async fn test_travel_tips() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips/travel-tips/Goa")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["destination"], "Goa");
    assert!(!body["general"].as_array().unwrap().is_empty());
}
