use serde::{Deserialize, Serialize};

use super::attraction::Attraction;
use super::route::RouteInfo;
use super::transport::{AccommodationOption, TransportOption};
use super::trip::{BudgetTier, TripType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub transport: f64,
    pub accommodation: f64,
    pub food: f64,
    pub activities: f64,
    pub total: f64,
}

impl CostBreakdown {
    pub fn new(transport: f64, accommodation: f64, food: f64, activities: f64) -> Self {
        Self {
            transport,
            accommodation,
            food,
            activities,
            total: transport + accommodation + food + activities,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    #[serde(rename = "type")]
    pub tier: BudgetTier,
    pub title: String,
    pub route: String,
    pub duration: String,
    pub price: String,
    pub estimated_cost: f64,
    pub rating: f64,
    pub image: String,
    pub highlights: Vec<String>,
    pub features: Vec<String>,
    pub transport: Option<TransportOption>,
    pub accommodation: Option<AccommodationOption>,
    pub attractions: Vec<Attraction>,
    pub pricing: CostBreakdown,
}

/// Per-tier estimate derived from route distance and duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingMatrix {
    pub budget: CostBreakdown,
    pub comfort: CostBreakdown,
    pub luxury: CostBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub total_distance: u64,
    pub total_duration: u64,
    pub duration: i64,
    pub travelers: u32,
    pub trip_type: TripType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPackage {
    pub packages: Vec<Package>,
    pub route_info: RouteInfo,
    pub total_attractions: usize,
    pub pricing: PricingMatrix,
    pub trip_summary: TripSummary,
}
