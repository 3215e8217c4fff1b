use futures::future::join_all;

use crate::models::attraction::Attraction;
use crate::models::package::{CostBreakdown, Package, TravelPackage, TripSummary};
use crate::models::transport::{cheapest, AccommodationOption, TransportOptions};
use crate::models::trip::{BudgetTier, TripPlan};
use crate::services::attraction_service::{AttractionService, DEFAULT_LIMIT, DEFAULT_RADIUS_METERS};
use crate::services::directions_service::DirectionsService;
use crate::services::price_service::PriceService;
use crate::services::pricing_service::{PricingService, HOTEL_BASE_PRICE_PER_NIGHT};

struct TierProfile {
    tier: BudgetTier,
    id: &'static str,
    title: &'static str,
    default_transport: f64,
    accommodation_factor: f64,
    food_per_day: f64,
    activities_per_day: f64,
    attractions: usize,
    rating: f64,
    image: &'static str,
    highlights: &'static [&'static str],
    features: &'static [&'static str],
}

const TIERS: [TierProfile; 3] = [
    TierProfile {
        tier: BudgetTier::Budget,
        id: "budget-1",
        title: "Budget Explorer",
        default_transport: 1500.0,
        accommodation_factor: 1.0,
        food_per_day: 300.0,
        activities_per_day: 200.0,
        attractions: 3,
        rating: 4.2,
        image: "https://images.unsplash.com/photo-1488646953014-85cb44e25828?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
        highlights: &["Budget transport", "Affordable hotels", "Local experiences"],
        features: &["Free WiFi", "Local Guide", "Basic Insurance"],
    },
    TierProfile {
        tier: BudgetTier::Comfort,
        id: "comfort-1",
        title: "Comfort Journey",
        default_transport: 2500.0,
        accommodation_factor: 1.5,
        food_per_day: 600.0,
        activities_per_day: 400.0,
        attractions: 4,
        rating: 4.5,
        image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
        highlights: &["Comfortable transport", "Quality hotels", "Guided tours"],
        features: &["Free WiFi", "Professional Guide", "Travel Insurance", "24/7 Support"],
    },
    TierProfile {
        tier: BudgetTier::Luxury,
        id: "luxury-1",
        title: "Luxury Experience",
        default_transport: 5000.0,
        accommodation_factor: 2.5,
        food_per_day: 1200.0,
        activities_per_day: 800.0,
        attractions: 5,
        rating: 4.8,
        image: "https://images.unsplash.com/photo-1564507592333-c60657eea523?ixlib=rb-4.0.3&auto=format&fit=crop&w=2071&q=80",
        highlights: &["Premium transport", "Luxury hotels", "Exclusive experiences"],
        features: &[
            "Premium WiFi",
            "Personal Guide",
            "Premium Insurance",
            "24/7 Concierge",
            "VIP Access",
        ],
    },
];

/// Cheapest stay across all cities, using the nightly default for cities
/// with no options.
fn base_accommodation(hotels_per_city: &[Vec<AccommodationOption>]) -> f64 {
    hotels_per_city
        .iter()
        .map(|hotels| {
            hotels
                .iter()
                .map(|h| h.price)
                .reduce(f64::min)
                .unwrap_or(HOTEL_BASE_PRICE_PER_NIGHT)
        })
        .reduce(f64::min)
        .unwrap_or(HOTEL_BASE_PRICE_PER_NIGHT)
}

fn rupees(amount: f64) -> String {
    format!("₹{}", amount.round() as i64)
}

/// Budget, comfort and luxury packages for one trip, or only the tier named
/// by `budget`.
///
/// `hotels_per_city` and `attractions_per_city` follow the trip's city order.
pub fn build_packages(
    transport: &TransportOptions,
    hotels_per_city: &[Vec<AccommodationOption>],
    attractions_per_city: &[Vec<Attraction>],
    duration: i64,
    travelers: u32,
    budget: Option<BudgetTier>,
    route: &str,
) -> Vec<Package> {
    let accommodation_base = base_accommodation(hotels_per_city);
    let first_city_hotels = hotels_per_city.first().map(Vec::as_slice).unwrap_or_default();
    let first_city_attractions = attractions_per_city
        .first()
        .map(Vec::as_slice)
        .unwrap_or_default();
    let person_days = (duration.max(0) as f64) * travelers as f64;

    TIERS
        .iter()
        .filter(|profile| budget.map_or(true, |b| b == profile.tier))
        .map(|profile| {
            let (options, hotel_index) = match profile.tier {
                BudgetTier::Budget => (&transport.buses, 0),
                BudgetTier::Comfort => (&transport.trains, 1),
                BudgetTier::Luxury => (&transport.flights, 2),
            };
            let transport_cost = cheapest(options).unwrap_or(profile.default_transport);
            let accommodation_cost = accommodation_base * profile.accommodation_factor;
            let pricing = CostBreakdown::new(
                transport_cost,
                accommodation_cost,
                profile.food_per_day * person_days,
                profile.activities_per_day * person_days,
            );
            let headline = transport_cost + accommodation_cost;
            let accommodation = first_city_hotels
                .get(hotel_index)
                .or_else(|| first_city_hotels.last())
                .cloned();

            Package {
                id: profile.id.to_string(),
                tier: profile.tier,
                title: profile.title.to_string(),
                route: route.to_string(),
                duration: format!("{} days", duration),
                price: rupees(headline),
                estimated_cost: headline,
                rating: profile.rating,
                image: profile.image.to_string(),
                highlights: profile.highlights.iter().map(|s| s.to_string()).collect(),
                features: profile.features.iter().map(|s| s.to_string()).collect(),
                transport: options.first().cloned(),
                accommodation,
                attractions: first_city_attractions
                    .iter()
                    .take(profile.attractions)
                    .cloned()
                    .collect(),
                pricing,
            }
        })
        .collect()
}

/// Assembles packages for a validated trip from every data source.
#[derive(Clone)]
pub struct PackageService {
    prices: PriceService,
    attractions: AttractionService,
    directions: DirectionsService,
}

impl PackageService {
    pub fn new(
        prices: PriceService,
        attractions: AttractionService,
        directions: DirectionsService,
    ) -> Self {
        Self {
            prices,
            attractions,
            directions,
        }
    }

    pub async fn travel_package(&self, plan: &TripPlan) -> TravelPackage {
        let cities = plan.cities();

        let hotel_lookups = cities.iter().map(|city| {
            self.prices
                .hotel_prices(city, plan.start_date, plan.end_date, plan.travelers, 1)
        });
        let attraction_lookups = cities.iter().map(|city| {
            self.attractions
                .attractions_near(city, DEFAULT_RADIUS_METERS, DEFAULT_LIMIT)
        });

        let (transport, hotels, attractions, route) = tokio::join!(
            self.prices.transport_options(
                &plan.origin,
                &plan.destination,
                plan.start_date,
                Some(plan.end_date),
                plan.travelers,
            ),
            join_all(hotel_lookups),
            join_all(attraction_lookups),
            self.directions
                .route(&plan.origin, &plan.destination, &plan.stops),
        );

        let packages = build_packages(
            &transport,
            &hotels,
            &attractions,
            plan.nights(),
            plan.travelers,
            plan.budget,
            &format!("{} → {}", plan.origin, plan.destination),
        );
        log::info!(
            "Built {} package(s) for {} -> {}",
            packages.len(),
            plan.origin,
            plan.destination
        );

        TravelPackage {
            packages,
            total_attractions: attractions.iter().map(Vec::len).sum(),
            pricing: PricingService::calculate_pricing(
                Some(&route),
                plan.travelers,
                plan.trip_type,
            ),
            trip_summary: TripSummary {
                total_distance: route.total_distance,
                total_duration: route.total_duration,
                duration: plan.nights(),
                travelers: plan.travelers,
                trip_type: plan.trip_type,
            },
            route_info: route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transport::{Endpoint, TransportMode, TransportOption};
    use crate::models::trip::TripRequest;
    use crate::services::attraction_service::fallback_attractions;
    use crate::services::cache::ResponseCache;
    use crate::services::flight_service::AmadeusClient;
    use crate::services::hotel_service::HotelClient;
    use crate::services::place_service::PlaceService;
    use crate::services::places_service::GoogleMapsClient;

    fn option(mode: TransportMode, price: f64) -> TransportOption {
        TransportOption {
            id: format!("{:?}-{}", mode, price),
            mode,
            name: "Test".to_string(),
            departure: Endpoint::Time("08:00".to_string()),
            arrival: Endpoint::Time("16:00".to_string()),
            price,
            currency: "INR".to_string(),
            duration: "8h 0m".to_string(),
            stops: None,
            number: None,
            class: None,
        }
    }

    fn hotel(id: &str, price: f64) -> AccommodationOption {
        AccommodationOption {
            id: id.to_string(),
            name: id.to_string(),
            price,
            currency: "INR".to_string(),
            rating: 4.0,
            image: None,
            amenities: Vec::new(),
        }
    }

    #[test]
    fn test_defaults_without_any_options() {
        let packages = build_packages(
            &TransportOptions::default(),
            &[],
            &[],
            3,
            2,
            None,
            "Mumbai → Goa",
        );

        assert_eq!(packages.len(), 3);
        let budget = &packages[0];
        assert_eq!(budget.id, "budget-1");
        assert_eq!(budget.pricing.transport, 1500.0);
        assert_eq!(budget.pricing.accommodation, 2000.0);
        assert_eq!(budget.pricing.food, 300.0 * 3.0 * 2.0);
        assert_eq!(budget.pricing.activities, 200.0 * 3.0 * 2.0);
        assert_eq!(budget.price, "₹3500");
        assert_eq!(budget.duration, "3 days");
        assert!(budget.transport.is_none());

        assert_eq!(packages[1].pricing.transport, 2500.0);
        assert_eq!(packages[1].pricing.accommodation, 3000.0);
        assert_eq!(packages[2].pricing.transport, 5000.0);
        assert_eq!(packages[2].pricing.accommodation, 5000.0);
        assert_eq!(packages[2].price, "₹10000");
    }

    #[test]
    fn test_budget_filter_keeps_one_tier() {
        let packages = build_packages(
            &TransportOptions::default(),
            &[],
            &[],
            2,
            1,
            Some(BudgetTier::Luxury),
            "Delhi → Agra",
        );
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].title, "Luxury Experience");
        assert_eq!(packages[0].features.len(), 5);
    }

    #[test]
    fn test_costs_come_from_cheapest_options() {
        let transport = TransportOptions {
            flights: vec![option(TransportMode::Flight, 7000.0), option(TransportMode::Flight, 5600.0)],
            trains: vec![option(TransportMode::Train, 1200.0)],
            buses: vec![option(TransportMode::Bus, 650.0), option(TransportMode::Bus, 450.0)],
        };
        let hotels = vec![
            vec![hotel("a", 3000.0), hotel("b", 4500.0)],
            vec![hotel("c", 1800.0)],
        ];
        let attractions = vec![fallback_attractions("Delhi", 5), Vec::new()];

        let packages = build_packages(&transport, &hotels, &attractions, 4, 1, None, "Delhi → Jaipur");

        assert_eq!(packages[0].pricing.transport, 450.0);
        assert_eq!(packages[0].pricing.accommodation, 1800.0);
        assert_eq!(packages[1].pricing.transport, 1200.0);
        assert_eq!(packages[1].pricing.accommodation, 2700.0);
        assert_eq!(packages[2].pricing.transport, 5600.0);

        // first option of the mode, not the cheapest
        assert_eq!(packages[0].transport.as_ref().map(|t| t.price), Some(650.0));
        assert_eq!(packages[0].accommodation.as_ref().map(|h| h.id.as_str()), Some("a"));
        assert_eq!(packages[1].accommodation.as_ref().map(|h| h.id.as_str()), Some("b"));
        assert_eq!(packages[2].accommodation.as_ref().map(|h| h.id.as_str()), Some("b"));

        assert_eq!(packages[0].attractions.len(), 3);
        assert_eq!(packages[2].attractions.len(), 5);
    }

    #[actix_rt::test]
    async fn test_travel_package_offline() {
        let http = reqwest::Client::new();
        let cache = ResponseCache::default();
        let maps = GoogleMapsClient::new(http.clone(), None);
        let service = PackageService::new(
            PriceService::new(
                AmadeusClient::new(http.clone(), None),
                HotelClient::new(http, None, "hotels4.p.rapidapi.com".to_string()),
                cache.clone(),
            ),
            AttractionService::new(PlaceService::new(maps.clone()), maps.clone(), cache),
            DirectionsService::new(maps),
        );
        let plan = TripRequest {
            start_place: Some("Mumbai".into()),
            end_place: Some("Delhi".into()),
            stops: vec!["Jaipur".into()],
            start_date: Some("2030-01-10".into()),
            end_date: Some("2030-01-15".into()),
            travelers: Some(2),
            ..Default::default()
        }
        .validate()
        .unwrap();

        let package = service.travel_package(&plan).await;
        assert_eq!(package.packages.len(), 3);
        assert_eq!(package.packages[0].route, "Mumbai → Delhi");
        assert_eq!(package.trip_summary.duration, 5);
        assert_eq!(package.trip_summary.travelers, 2);
        assert_eq!(package.trip_summary.total_distance, 1_400_000);
        assert!(package.route_info.estimated);
        assert!(package.total_attractions > 0);
    }
}
