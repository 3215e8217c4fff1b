use chrono::{NaiveDate, Utc};

use crate::data::distances::iata_code;
use crate::error::ProviderError;
use crate::models::place::city_key;
use crate::models::transport::{AccommodationOption, TransportOption, TransportOptions};
use crate::services::cache::{cache_key, ResponseCache};
use crate::services::flight_service::{AmadeusClient, FlightQuery};
use crate::services::hotel_service::{HotelClient, HotelQuery};
use crate::services::pricing_service::PricingService;

/// Transport and hotel price lookup with per-mode fallbacks.
///
/// Provider answers and formula-only train/bus prices are cached for the
/// cache TTL. Flight and hotel fallbacks are not cached so a recovering
/// provider is picked up on the next request.
#[derive(Clone)]
pub struct PriceService {
    flights: AmadeusClient,
    hotels: HotelClient,
    cache: ResponseCache,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl PriceService {
    pub fn new(flights: AmadeusClient, hotels: HotelClient, cache: ResponseCache) -> Self {
        Self {
            flights,
            hotels,
            cache,
        }
    }

    pub async fn flight_prices(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDate,
        return_date: Option<NaiveDate>,
        adults: u32,
    ) -> Vec<TransportOption> {
        let departure_text = departure.to_string();
        let return_text = return_date.map(|d| d.to_string());
        let key = cache_key(
            "flight",
            &[
                origin,
                destination,
                &departure_text,
                return_text.as_deref().unwrap_or("none"),
                &adults.to_string(),
            ],
        );
        if let Some(cached) = self.cache.get(&key).await {
            return cached;
        }

        match self
            .live_flights(origin, destination, &departure_text, return_text.as_deref(), adults)
            .await
        {
            Ok(flights) if !flights.is_empty() => {
                self.cache.put(&key, &flights).await;
                flights
            }
            Ok(_) => {
                log::info!("No flight offers for {} -> {}, using estimate", origin, destination);
                PricingService::fallback_flights(origin, destination, departure, adults, today())
            }
            Err(e) => {
                log::warn!("Flight search failed, using estimate: {}", e);
                PricingService::fallback_flights(origin, destination, departure, adults, today())
            }
        }
    }

    async fn live_flights(
        &self,
        origin: &str,
        destination: &str,
        departure: &str,
        return_date: Option<&str>,
        adults: u32,
    ) -> Result<Vec<TransportOption>, ProviderError> {
        if !self.flights.is_configured() {
            return Err(ProviderError::NotConfigured("amadeus"));
        }
        let airport = |place: &str| {
            iata_code(city_key(place)).ok_or_else(|| {
                ProviderError::unexpected("amadeus", format!("no airport code for {}", place))
            })
        };
        let origin_code = airport(origin)?;
        let destination_code = airport(destination)?;

        self.flights
            .flight_offers(&FlightQuery {
                origin_code: &origin_code,
                destination_code: &destination_code,
                departure_date: departure,
                return_date,
                adults,
            })
            .await
    }

    /// Formula-priced; no train provider is integrated.
    pub async fn train_prices(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Vec<TransportOption> {
        let key = cache_key("train", &[origin, destination, &date.to_string()]);
        if let Some(cached) = self.cache.get(&key).await {
            return cached;
        }
        let trains = PricingService::fallback_trains(origin, destination, date, today());
        self.cache.put(&key, &trains).await;
        trains
    }

    /// Formula-priced; no bus provider is integrated.
    pub async fn bus_prices(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Vec<TransportOption> {
        let key = cache_key("bus", &[origin, destination, &date.to_string()]);
        if let Some(cached) = self.cache.get(&key).await {
            return cached;
        }
        let buses = PricingService::fallback_buses(origin, destination, date, today());
        self.cache.put(&key, &buses).await;
        buses
    }

    pub async fn hotel_prices(
        &self,
        location: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        adults: u32,
        rooms: u32,
    ) -> Vec<AccommodationOption> {
        let check_in_text = check_in.to_string();
        let check_out_text = check_out.to_string();
        let key = cache_key(
            "hotel",
            &[
                location,
                &check_in_text,
                &check_out_text,
                &adults.to_string(),
                &rooms.to_string(),
            ],
        );
        if let Some(cached) = self.cache.get(&key).await {
            return cached;
        }

        if self.hotels.is_configured() {
            let query = HotelQuery {
                location,
                check_in: &check_in_text,
                check_out: &check_out_text,
                adults,
                rooms,
            };
            match self.hotels.search(&query).await {
                Ok(hotels) if !hotels.is_empty() => {
                    self.cache.put(&key, &hotels).await;
                    return hotels;
                }
                Ok(_) => log::info!("No hotels listed for {}, using estimate", location),
                Err(e) => log::warn!("Hotel search for {} failed, using estimate: {}", location, e),
            }
        }

        PricingService::fallback_hotels((check_out - check_in).num_days(), rooms)
    }

    /// Flights, trains and buses for one leg, fetched concurrently.
    pub async fn transport_options(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
        return_date: Option<NaiveDate>,
        travelers: u32,
    ) -> TransportOptions {
        let (flights, trains, buses) = tokio::join!(
            self.flight_prices(origin, destination, date, return_date, travelers),
            self.train_prices(origin, destination, date),
            self.bus_prices(origin, destination, date),
        );
        TransportOptions {
            flights,
            trains,
            buses,
        }
    }
}
