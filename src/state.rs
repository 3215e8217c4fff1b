use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::attraction_service::AttractionService;
use crate::services::cache::ResponseCache;
use crate::services::directions_service::DirectionsService;
use crate::services::email_service::EmailService;
use crate::services::enrichment_service::EnrichmentService;
use crate::services::flight_service::AmadeusClient;
use crate::services::hotel_service::HotelClient;
use crate::services::itinerary_generation_service::ItineraryGenerator;
use crate::services::llm_service::{GeminiClient, TextGenerator};
use crate::services::package_service::PackageService;
use crate::services::place_service::PlaceService;
use crate::services::places_service::GoogleMapsClient;
use crate::services::price_service::PriceService;
use crate::services::weather_service::WeatherService;

/// Everything a handler needs, built once at startup and shared through
/// `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub cache: ResponseCache,
    pub places: PlaceService,
    pub attractions: AttractionService,
    pub prices: PriceService,
    pub directions: DirectionsService,
    pub packages: PackageService,
    pub itineraries: ItineraryGenerator,
    pub weather: WeatherService,
    pub email: EmailService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let http = reqwest::Client::new();
        let cache = ResponseCache::default();

        let maps = GoogleMapsClient::new(http.clone(), config.google_maps_api_key.clone());
        let places = PlaceService::new(maps.clone());
        let attractions = AttractionService::new(places.clone(), maps.clone(), cache.clone());
        let directions = DirectionsService::new(maps);
        let prices = PriceService::new(
            AmadeusClient::new(http.clone(), config.amadeus.as_ref()),
            HotelClient::new(
                http.clone(),
                config.rapidapi_key.clone(),
                config.rapidapi_host.clone(),
            ),
            cache.clone(),
        );
        let packages = PackageService::new(prices.clone(), attractions.clone(), directions.clone());

        let llm = config.gemini_api_key.clone().map(|key| {
            Arc::new(GeminiClient::new(http.clone(), key)) as Arc<dyn TextGenerator>
        });
        let itineraries = ItineraryGenerator::new(
            attractions.clone(),
            EnrichmentService::new(http.clone(), config.foursquare_api_key.clone()),
            llm,
        );

        let weather = WeatherService::new(http.clone(), config.open_meteo_enabled);
        let email = EmailService::new(
            http,
            config.sendgrid_api_key.clone(),
            config.email_from.clone(),
            config.client_url.clone(),
        );

        log::info!(
            "Configured providers: {:?}",
            config.configured_providers()
        );

        Self {
            config,
            cache,
            places,
            attractions,
            prices,
            directions,
            packages,
            itineraries,
            weather,
            email,
        }
    }

    /// Replaces the itinerary model, e.g. with a canned generator.
    pub fn with_text_generator(mut self, llm: Arc<dyn TextGenerator>) -> Self {
        self.itineraries = self.itineraries.with_text_generator(llm);
        self
    }
}
