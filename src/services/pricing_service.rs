use chrono::NaiveDate;

use crate::data::distances::{self, DEFAULT_PRICE_MULTIPLIER};
use crate::models::package::{CostBreakdown, PricingMatrix};
use crate::models::place::city_key;
use crate::models::route::RouteInfo;
use crate::models::transport::{
    AccommodationOption, Endpoint, FlightEndpoint, TransportMode, TransportOption,
};
use crate::models::trip::{BudgetTier, TripType};

pub const CURRENCY: &str = "INR";

pub const FLIGHT_BASE_PRICE: f64 = 5000.0;
pub const TRAIN_BASE_PRICE: f64 = 800.0;
pub const BUS_BASE_PRICE: f64 = 300.0;
pub const HOTEL_BASE_PRICE_PER_NIGHT: f64 = 2000.0;

/// Per-tier rates for the route pricing matrix: transport per km, then
/// accommodation, food and activities per day.
struct TierRates {
    transport_per_km: f64,
    accommodation: f64,
    food: f64,
    activities: f64,
}

fn tier_rates(tier: BudgetTier) -> TierRates {
    match tier {
        BudgetTier::Budget => TierRates {
            transport_per_km: 15.0,
            accommodation: 800.0,
            food: 300.0,
            activities: 200.0,
        },
        BudgetTier::Comfort => TierRates {
            transport_per_km: 25.0,
            accommodation: 1500.0,
            food: 600.0,
            activities: 400.0,
        },
        BudgetTier::Luxury => TierRates {
            transport_per_km: 50.0,
            accommodation: 3000.0,
            food: 1200.0,
            activities: 800.0,
        },
    }
}

pub struct PricingService;

impl PricingService {
    /// Multiplier for a city pair, keyed on the first comma segment of each
    /// place. Pairs missing from the table get 2.0.
    pub fn distance_multiplier(origin: &str, destination: &str) -> f64 {
        distances::price_multiplier(city_key(origin), city_key(destination))
            .unwrap_or(DEFAULT_PRICE_MULTIPLIER)
    }

    /// Step function over booking lead time in days.
    pub fn date_multiplier(lead_time_days: i64) -> f64 {
        match lead_time_days {
            d if d <= 7 => 1.5,
            d if d <= 30 => 1.2,
            d if d <= 90 => 1.0,
            _ => 0.9,
        }
    }

    pub fn lead_time_days(travel_date: NaiveDate, today: NaiveDate) -> i64 {
        (travel_date - today).num_days()
    }

    /// `base x distance multiplier x date multiplier`, rounded to whole rupees.
    pub fn formula_price(
        base: f64,
        origin: &str,
        destination: &str,
        travel_date: NaiveDate,
        today: NaiveDate,
    ) -> f64 {
        let lead = Self::lead_time_days(travel_date, today);
        base * Self::distance_multiplier(origin, destination) * Self::date_multiplier(lead)
    }

    pub fn fallback_flights(
        origin: &str,
        destination: &str,
        travel_date: NaiveDate,
        adults: u32,
        today: NaiveDate,
    ) -> Vec<TransportOption> {
        let price = Self::formula_price(FLIGHT_BASE_PRICE, origin, destination, travel_date, today)
            * adults as f64;
        let from = distances::iata_code(city_key(origin)).unwrap_or_else(|| city_key(origin).to_string());
        let to = distances::iata_code(city_key(destination))
            .unwrap_or_else(|| city_key(destination).to_string());

        let airport = |code: &str, terminal: &str| {
            Endpoint::Airport(FlightEndpoint {
                iata_code: code.to_string(),
                terminal: Some(terminal.to_string()),
                at: None,
            })
        };

        vec![
            TransportOption {
                id: "flight-1".to_string(),
                mode: TransportMode::Flight,
                name: "AI".to_string(),
                departure: airport(&from, "1"),
                arrival: airport(&to, "2"),
                price: price.round(),
                currency: CURRENCY.to_string(),
                duration: "PT2H30M".to_string(),
                stops: Some(0),
                number: None,
                class: None,
            },
            TransportOption {
                id: "flight-2".to_string(),
                mode: TransportMode::Flight,
                name: "6E".to_string(),
                departure: airport(&from, "3"),
                arrival: airport(&to, "1"),
                price: (price * 0.8).round(),
                currency: CURRENCY.to_string(),
                duration: "PT3H15M".to_string(),
                stops: Some(1),
                number: None,
                class: None,
            },
        ]
    }

    pub fn fallback_trains(
        origin: &str,
        destination: &str,
        travel_date: NaiveDate,
        today: NaiveDate,
    ) -> Vec<TransportOption> {
        let price = Self::formula_price(TRAIN_BASE_PRICE, origin, destination, travel_date, today);
        vec![
            ground_option(TransportMode::Train, "train-1", "Rajdhani Express", ("06:00", "14:30"), price, "8h 30m")
                .with_number("12301")
                .with_class("AC 3 Tier"),
            ground_option(TransportMode::Train, "train-2", "Shatabdi Express", ("08:00", "16:00"), price * 1.2, "8h 0m")
                .with_number("12019")
                .with_class("AC Chair Car"),
        ]
    }

    pub fn fallback_buses(
        origin: &str,
        destination: &str,
        travel_date: NaiveDate,
        today: NaiveDate,
    ) -> Vec<TransportOption> {
        let price = Self::formula_price(BUS_BASE_PRICE, origin, destination, travel_date, today);
        vec![
            ground_option(TransportMode::Bus, "bus-1", "Volvo AC", ("20:00", "06:00"), price, "10h 0m")
                .with_class("AC Sleeper"),
            ground_option(TransportMode::Bus, "bus-2", "Regular Bus", ("22:00", "08:00"), price * 0.7, "10h 0m")
                .with_class("Non-AC"),
        ]
    }

    /// Three stays at 1x, 1.5x and 2.5x of the nightly base rate.
    pub fn fallback_hotels(nights: i64, rooms: u32) -> Vec<AccommodationOption> {
        let stay = HOTEL_BASE_PRICE_PER_NIGHT * nights.max(1) as f64 * rooms.max(1) as f64;
        let hotel = |id: &str, name: &str, factor: f64, rating: f64, image: &str, amenities: &[&str]| {
            AccommodationOption {
                id: id.to_string(),
                name: name.to_string(),
                price: (stay * factor).round(),
                currency: CURRENCY.to_string(),
                rating,
                image: Some(image.to_string()),
                amenities: amenities.iter().map(|a| a.to_string()).collect(),
            }
        };

        vec![
            hotel(
                "hotel-1",
                "Budget Hotel",
                1.0,
                3.5,
                "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=2070&q=80",
                &["WiFi", "AC", "TV"],
            ),
            hotel(
                "hotel-2",
                "Comfort Hotel",
                1.5,
                4.2,
                "https://images.unsplash.com/photo-1571896349842-33c89424de2d?auto=format&fit=crop&w=2060&q=80",
                &["WiFi", "AC", "TV", "Restaurant", "Gym"],
            ),
            hotel(
                "hotel-3",
                "Luxury Hotel",
                2.5,
                4.8,
                "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?auto=format&fit=crop&w=2070&q=80",
                &["WiFi", "AC", "TV", "Restaurant", "Gym", "Spa", "Pool"],
            ),
        ]
    }

    /// Route-based estimate for every tier.
    ///
    /// Distance defaults to 1 km and duration to one day when no route is known.
    pub fn calculate_pricing(
        route: Option<&RouteInfo>,
        travelers: u32,
        trip_type: TripType,
    ) -> PricingMatrix {
        let distance_km = route
            .map(|r| r.total_distance)
            .filter(|d| *d > 0)
            .unwrap_or(1000) as f64
            / 1000.0;
        let seconds = route
            .map(|r| r.total_duration)
            .filter(|d| *d > 0)
            .unwrap_or(86_400);
        let days = seconds.div_ceil(86_400) as f64;
        let travelers = travelers as f64;
        let multiplier = trip_type.multiplier();

        let breakdown = |tier: BudgetTier| {
            let rates = tier_rates(tier);
            CostBreakdown::new(
                (rates.transport_per_km * distance_km * multiplier).round(),
                (rates.accommodation * days * multiplier).round(),
                (rates.food * days * travelers * multiplier).round(),
                (rates.activities * days * travelers * multiplier).round(),
            )
        };

        PricingMatrix {
            budget: breakdown(BudgetTier::Budget),
            comfort: breakdown(BudgetTier::Comfort),
            luxury: breakdown(BudgetTier::Luxury),
        }
    }
}

fn ground_option(
    mode: TransportMode,
    id: &str,
    name: &str,
    (departure, arrival): (&str, &str),
    price: f64,
    duration: &str,
) -> TransportOption {
    TransportOption {
        id: id.to_string(),
        mode,
        name: name.to_string(),
        departure: Endpoint::Time(departure.to_string()),
        arrival: Endpoint::Time(arrival.to_string()),
        price: price.round(),
        currency: CURRENCY.to_string(),
        duration: duration.to_string(),
        stops: None,
        number: None,
        class: None,
    }
}

impl TransportOption {
    fn with_number(mut self, number: &str) -> Self {
        self.number = Some(number.to_string());
        self
    }

    fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_distance_multiplier_table() {
        assert_eq!(PricingService::distance_multiplier("Mumbai", "Delhi"), 2.5);
        assert_eq!(
            PricingService::distance_multiplier("Bangalore, Karnataka, India", "Chennai"),
            1.2
        );
    }

    #[test]
    fn test_distance_multiplier_defaults_to_two() {
        assert_eq!(PricingService::distance_multiplier("Goa", "Manali"), 2.0);
        assert_eq!(PricingService::distance_multiplier("Kolkata", "Mumbai"), 2.0);
        assert_eq!(PricingService::distance_multiplier("Mumbai", "Mumbai"), 2.0);
    }

    #[test]
    fn test_date_multiplier_steps() {
        assert_eq!(PricingService::date_multiplier(-3), 1.5);
        assert_eq!(PricingService::date_multiplier(7), 1.5);
        assert_eq!(PricingService::date_multiplier(8), 1.2);
        assert_eq!(PricingService::date_multiplier(30), 1.2);
        assert_eq!(PricingService::date_multiplier(31), 1.0);
        assert_eq!(PricingService::date_multiplier(90), 1.0);
        assert_eq!(PricingService::date_multiplier(91), 0.9);
        assert_eq!(PricingService::date_multiplier(365), 0.9);
    }

    #[test]
    fn test_fallback_flights_apply_both_multipliers() {
        let today = date("2024-01-01");
        let flights =
            PricingService::fallback_flights("Mumbai", "Delhi", date("2024-01-05"), 2, today);
        // 5000 x 2.5 x 1.5 x 2 adults
        assert_eq!(flights[0].price, 37_500.0);
        assert_eq!(flights[1].price, 30_000.0);
        assert_eq!(flights[0].stops, Some(0));
    }

    #[test]
    fn test_fallback_ground_prices() {
        let today = date("2024-01-01");
        let far = date("2024-06-01");
        let trains = PricingService::fallback_trains("Goa", "Pune", far, today);
        assert_eq!(trains[0].price, 1440.0); // 800 x 2.0 x 0.9
        assert_eq!(trains[1].number.as_deref(), Some("12019"));

        let buses = PricingService::fallback_buses("Goa", "Pune", far, today);
        assert_eq!(buses[0].price, 540.0);
        assert_eq!(buses[1].price, 378.0);
    }

    #[test]
    fn test_fallback_hotels_scale_with_stay() {
        let hotels = PricingService::fallback_hotels(5, 2);
        let prices: Vec<f64> = hotels.iter().map(|h| h.price).collect();
        assert_eq!(prices, vec![20_000.0, 30_000.0, 50_000.0]);
    }

    #[test]
    fn test_calculate_pricing_defaults() {
        let matrix = PricingService::calculate_pricing(None, 2, TripType::Business);
        // 1 km, 1 day, 1.3x
        assert_eq!(matrix.budget.transport, 20.0);
        assert_eq!(matrix.budget.accommodation, 1040.0);
        assert_eq!(matrix.budget.food, 780.0);
        assert_eq!(matrix.budget.activities, 520.0);
        assert_eq!(matrix.budget.total, 2360.0);
        assert!(matrix.luxury.total > matrix.comfort.total);
    }
}
