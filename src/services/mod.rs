pub mod account_service;
pub mod attraction_service;
pub mod cache;
pub mod directions_service;
pub mod email_service;
pub mod enrichment_service;
pub mod flight_service;
pub mod gazetteer;
pub mod hotel_service;
pub mod http;
pub mod itinerary_generation_service;
pub mod llm_service;
pub mod package_service;
pub mod place_service;
pub mod places_service;
pub mod price_service;
pub mod pricing_service;
pub mod weather_service;
