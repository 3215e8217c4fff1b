use crate::models::attraction::Attraction;
use crate::models::itinerary::{Activity, Itinerary, ItineraryDay, ItinerarySource};
use crate::models::place::city_key;
use crate::models::trip::TripPlan;
use crate::services::attraction_service::{AttractionService, DEFAULT_RADIUS_METERS};
use crate::services::enrichment_service::EnrichmentService;
use crate::services::llm_service::{itinerary_prompt, parse_itinerary, TextGenerator};
use chrono::{Duration, NaiveDate};
use futures::future::join_all;
use std::{collections::HashSet, sync::Arc};

const ATTRACTIONS_PER_DAY: usize = 3;
const ATTRACTIONS_PER_CITY: usize = 10;
const MIN_DAYS_PER_CITY: u32 = 2;
const TIME_SLOTS: [&str; ATTRACTIONS_PER_DAY] = ["09:00 AM", "01:00 PM", "04:00 PM"];
const COST_BY_PRICE_LEVEL: [&str; 5] = ["₹100", "₹200", "₹400", "₹600", "₹800"];

/// Builds day-by-day plans, from the language model when one is configured
/// and from nearby attractions otherwise.
#[derive(Clone)]
pub struct ItineraryGenerator {
    attractions: AttractionService,
    enrichment: EnrichmentService,
    llm: Option<Arc<dyn TextGenerator>>,
}

impl ItineraryGenerator {
    pub fn new(
        attractions: AttractionService,
        enrichment: EnrichmentService,
        llm: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            attractions,
            enrichment,
            llm,
        }
    }

    pub fn with_text_generator(mut self, llm: Arc<dyn TextGenerator>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub async fn generate(&self, plan: &TripPlan) -> Itinerary {
        let total_days = plan.total_days() as u32;
        match &self.llm {
            Some(llm) => self.generate_with_llm(&**llm, plan, total_days).await,
            None => self.generate_from_attractions(plan, total_days).await,
        }
    }

    async fn generate_from_attractions(&self, plan: &TripPlan, total_days: u32) -> Itinerary {
        let cities = plan.cities();
        let lookups = cities.iter().map(|city| {
            self.attractions
                .live_attractions(city, DEFAULT_RADIUS_METERS, ATTRACTIONS_PER_CITY)
        });
        let per_city = join_all(lookups).await;

        let source = if per_city.iter().any(|a| !a.is_empty()) {
            ItinerarySource::Attractions
        } else {
            ItinerarySource::Templates
        };

        Itinerary {
            total_days,
            trip: build_trip(&cities, plan.start_date, total_days, &per_city),
            source,
        }
    }

    async fn generate_with_llm(
        &self,
        llm: &dyn TextGenerator,
        plan: &TripPlan,
        total_days: u32,
    ) -> Itinerary {
        let prompt = itinerary_prompt(
            &plan.origin,
            &plan.destination,
            &plan.stops,
            &plan.start_date.to_string(),
            &plan.end_date.to_string(),
        );

        let text = match llm.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Itinerary model call failed, serving mock day: {}", e);
                return mock_itinerary(total_days);
            }
        };

        let mut trip = match parse_itinerary(&text) {
            Ok(days) if !days.is_empty() => days,
            Ok(_) => {
                log::warn!("Itinerary model returned no days, serving mock day");
                return mock_itinerary(total_days);
            }
            Err(e) => {
                log::warn!("Itinerary model output unusable, serving mock day: {}", e);
                return mock_itinerary(total_days);
            }
        };

        self.enrichment
            .enrich_days(&mut trip, city_key(&plan.origin))
            .await;

        Itinerary {
            total_days,
            trip,
            source: ItinerarySource::Llm,
        }
    }
}

/// Number of day entries for a trip; the last calendar day is departure.
pub fn day_count(total_days: u32) -> u32 {
    total_days.saturating_sub(1).max(1)
}

/// Index into `cities` for 1-based day `day`.
pub fn city_index(day: u32, total_days: u32, city_count: usize) -> usize {
    if city_count == 0 {
        return 0;
    }
    let days_per_city = MIN_DAYS_PER_CITY.max(total_days / city_count as u32);
    ((day.saturating_sub(1) / days_per_city) as usize).min(city_count - 1)
}

/// Assigns cities to days and fills each day with up to three unused
/// attractions of that city, or the city templates when none are left.
///
/// `attractions[i]` belongs to `cities[i]`.
pub fn build_trip(
    cities: &[String],
    start_date: NaiveDate,
    total_days: u32,
    attractions: &[Vec<Attraction>],
) -> Vec<ItineraryDay> {
    let mut used: HashSet<&str> = HashSet::new();
    let mut trip = Vec::new();

    for day in 1..=day_count(total_days) {
        let index = city_index(day, total_days, cities.len());
        let city = cities.get(index).map(|c| city_key(c)).unwrap_or_default();

        let picked: Vec<&Attraction> = attractions
            .get(index)
            .map(|pool| {
                pool.iter()
                    .filter(|a| !used.contains(a.id.as_str()))
                    .take(ATTRACTIONS_PER_DAY)
                    .collect()
            })
            .unwrap_or_default();

        let activities = if picked.is_empty() {
            template_activities(city)
        } else {
            picked
                .into_iter()
                .zip(TIME_SLOTS)
                .map(|(attraction, slot)| {
                    used.insert(attraction.id.as_str());
                    attraction_activity(attraction, city, slot)
                })
                .collect()
        };

        trip.push(ItineraryDay {
            day,
            date: Some((start_date + Duration::days(day as i64 - 1)).to_string()),
            city: city.to_string(),
            activities,
        });
    }

    trip
}

/// Cost string for a provider price level; missing levels count as free.
pub fn cost_for_price_level(level: Option<u8>) -> &'static str {
    let index = (level.unwrap_or(0) as usize).min(COST_BY_PRICE_LEVEL.len() - 1);
    COST_BY_PRICE_LEVEL[index]
}

fn attraction_activity(attraction: &Attraction, city: &str, slot: &str) -> Activity {
    let description = match attraction.location.address.as_deref() {
        Some(address) => format!("Visit {} at {}", attraction.name, address),
        None => format!("Visit {} in {}", attraction.name, city),
    };
    Activity {
        image_url: attraction.photo_url.clone(),
        latitude: attraction.location.latitude,
        longitude: attraction.location.longitude,
        rating: Some(attraction.rating),
        ..Activity::new(
            attraction.name.clone(),
            slot,
            description,
            cost_for_price_level(attraction.price_level),
        )
    }
}

pub fn template_activities(city: &str) -> Vec<Activity> {
    vec![
        Activity::new(
            format!("{} City Tour", city),
            TIME_SLOTS[0],
            format!("Guided tour of {}'s main sights", city),
            "₹200",
        ),
        Activity::new(
            format!("{} Local Market", city),
            TIME_SLOTS[1],
            format!("Browse local food and crafts in {}", city),
            "₹150",
        ),
        Activity::new(
            format!("{} Historical Site", city),
            TIME_SLOTS[2],
            format!("Explore the history of {}", city),
            "₹100",
        ),
    ]
}

/// Served whenever the model output cannot be used.
pub fn mock_itinerary(total_days: u32) -> Itinerary {
    Itinerary {
        total_days,
        trip: vec![ItineraryDay {
            day: 1,
            date: None,
            city: "Sample City".to_string(),
            activities: vec![Activity::new(
                "Sample Attraction",
                "09:00 AM",
                "This is a sample activity.",
                "₹0",
            )],
        }],
        source: ItinerarySource::Mock,
    }
}
