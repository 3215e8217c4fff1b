use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const MAX_TRIP_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Comfort,
    Luxury,
}

impl BudgetTier {
    /// Parses a client budget value. `"mid"` and `"moderate"` are accepted
    /// as comfort; anything unrecognised means no filter.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "budget" | "low" => Some(BudgetTier::Budget),
            "comfort" | "mid" | "moderate" => Some(BudgetTier::Comfort),
            "luxury" | "high" => Some(BudgetTier::Luxury),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Leisure,
    Business,
    Adventure,
    Cultural,
}

impl TripType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "business" => TripType::Business,
            "adventure" => TripType::Adventure,
            "cultural" => TripType::Cultural,
            _ => TripType::Leisure,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            TripType::Leisure => 1.0,
            TripType::Business => 1.3,
            TripType::Adventure => 1.2,
            TripType::Cultural => 1.1,
        }
    }
}

/// Raw trip body shared by the package and itinerary endpoints.
///
/// Every field is optional at the wire level so that missing fields produce
/// a JSON 400 from [`TripRequest::validate`] rather than an extractor error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    #[serde(default)]
    pub start_place: Option<String>,
    #[serde(default)]
    pub end_place: Option<String>,
    #[serde(default)]
    pub stops: Vec<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub travelers: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub trip_type: Option<String>,
}

/// A validated trip.
#[derive(Debug, Clone)]
pub struct TripPlan {
    pub origin: String,
    pub destination: String,
    pub stops: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget: Option<BudgetTier>,
    pub trip_type: TripType,
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("Invalid date: {}", value)))
}

impl TripRequest {
    pub fn validate(&self) -> Result<TripPlan, ApiError> {
        let (Some(origin), Some(destination), Some(start), Some(end)) = (
            required(&self.start_place),
            required(&self.end_place),
            required(&self.start_date),
            required(&self.end_date),
        ) else {
            return Err(ApiError::validation("Missing required fields"));
        };

        let start_date = parse_date(&start)?;
        let end_date = parse_date(&end)?;

        if end_date <= start_date {
            return Err(ApiError::validation("End date must be after start date"));
        }
        if (end_date - start_date).num_days() > MAX_TRIP_DAYS {
            return Err(ApiError::validation(format!(
                "Trip duration cannot exceed {} days",
                MAX_TRIP_DAYS
            )));
        }

        let stops = self
            .stops
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(TripPlan {
            origin,
            destination,
            stops,
            start_date,
            end_date,
            travelers: self.travelers.unwrap_or(1).max(1),
            budget: self.budget.as_deref().and_then(BudgetTier::parse),
            trip_type: self
                .trip_type
                .as_deref()
                .map(TripType::parse)
                .unwrap_or(TripType::Leisure),
        })
    }
}

impl TripPlan {
    /// Nights between start and end.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Calendar days, counting both the start and end date.
    pub fn total_days(&self) -> i64 {
        self.nights() + 1
    }

    /// Origin, stops and destination in travel order.
    pub fn cities(&self) -> Vec<String> {
        let mut cities = Vec::with_capacity(self.stops.len() + 2);
        cities.push(self.origin.clone());
        cities.extend(self.stops.iter().cloned());
        cities.push(self.destination.clone());
        cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: &str, end: &str) -> TripRequest {
        TripRequest {
            start_place: Some("Mumbai".into()),
            end_place: Some("Delhi".into()),
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_counts_days() {
        let plan = request("2024-02-15", "2024-02-20").validate().unwrap();
        assert_eq!(plan.nights(), 5);
        assert_eq!(plan.total_days(), 6);
        assert_eq!(plan.travelers, 1);
        assert_eq!(plan.trip_type, TripType::Leisure);
        assert_eq!(plan.cities(), vec!["Mumbai", "Delhi"]);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        assert!(request("2024-02-20", "2024-02-15").validate().is_err());
        assert!(request("2024-02-15", "2024-02-15").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_long_trips() {
        assert!(request("2024-01-01", "2024-01-31").validate().is_ok());
        assert!(request("2024-01-01", "2024-02-01").validate().is_err());
    }

    #[test]
    fn test_validate_requires_places() {
        let mut req = request("2024-02-15", "2024-02-20");
        req.end_place = Some("   ".into());
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn test_blank_stops_are_dropped() {
        let mut req = request("2024-02-15", "2024-02-20");
        req.stops = vec!["".into(), " Jaipur ".into()];
        let plan = req.validate().unwrap();
        assert_eq!(plan.cities(), vec!["Mumbai", "Jaipur", "Delhi"]);
    }

    #[test]
    fn test_budget_aliases() {
        assert_eq!(BudgetTier::parse("mid"), Some(BudgetTier::Comfort));
        assert_eq!(BudgetTier::parse("LUXURY"), Some(BudgetTier::Luxury));
        assert_eq!(BudgetTier::parse("anything"), None);
    }

    #[test]
    fn test_iso_timestamps_are_accepted() {
        let plan = request("2024-02-15T00:00:00.000Z", "2024-02-16").validate().unwrap();
        assert_eq!(plan.nights(), 1);
    }
}
