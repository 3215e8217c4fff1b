//! Offline place search over the built-in city table.

use std::collections::HashSet;

use crate::data::cities::INDIAN_CITIES;
use crate::models::place::{city_key, Place, PlaceSource, PlaceSuggestion};

pub const MAX_SUGGESTIONS: usize = 25;
const COUNTRY: &str = "India";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GazetteerCity {
    pub city: &'static str,
    pub state: &'static str,
}

impl GazetteerCity {
    pub fn full_name(&self) -> String {
        format!("{}, {}, {}", self.city, self.state, COUNTRY)
    }

    /// Local place id: the full name, lowercased, spaces replaced by `_`.
    pub fn place_id(&self) -> String {
        self.full_name().to_lowercase().replace(' ', "_")
    }

    pub fn to_suggestion(&self) -> PlaceSuggestion {
        PlaceSuggestion {
            place_id: self.place_id(),
            description: self.full_name(),
            main_text: self.city.to_string(),
            secondary_text: format!("{}, {}", self.state, COUNTRY),
            types: vec!["locality".to_string(), "political".to_string()],
        }
    }

    pub fn to_place(&self) -> Place {
        Place {
            name: self.city.to_string(),
            region: Some(self.state.to_string()),
            country: COUNTRY.to_string(),
            coordinates: None,
            formatted_address: Some(self.full_name()),
            source: PlaceSource::Gazetteer,
        }
    }
}

/// Every distinct `(city, state)` pair in table order.
pub fn all_cities() -> Vec<GazetteerCity> {
    let mut seen = HashSet::new();
    INDIAN_CITIES
        .iter()
        .flat_map(|(state, cities)| {
            cities.iter().map(move |city| GazetteerCity {
                city: *city,
                state: *state,
            })
        })
        .filter(|c| seen.insert((c.city, c.state)))
        .collect()
}

/// Cities whose name contains `query`, case-insensitively.
///
/// Names starting with the query come first; each group is alphabetical.
/// A blank query matches nothing.
pub fn search(query: &str) -> Vec<GazetteerCity> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(bool, String, GazetteerCity)> = all_cities()
        .into_iter()
        .filter_map(|c| {
            let name = c.city.to_lowercase();
            if name.contains(&needle) {
                Some((!name.starts_with(&needle), name, c))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.state.cmp(b.2.state))
    });
    matches.into_iter().map(|(_, _, c)| c).collect()
}

pub fn suggest(query: &str) -> Vec<PlaceSuggestion> {
    search(query)
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(GazetteerCity::to_suggestion)
        .collect()
}

/// Exact city-name match on the first comma segment of `text`.
pub fn resolve(text: &str) -> Option<GazetteerCity> {
    let key = city_key(text);
    if key.is_empty() {
        return None;
    }
    all_cities()
        .into_iter()
        .find(|c| c.city.eq_ignore_ascii_case(key))
}

pub fn find_by_place_id(place_id: &str) -> Option<GazetteerCity> {
    let id = place_id.to_lowercase();
    all_cities().into_iter().find(|c| c.place_id() == id)
}

/// Local ids contain `_`; provider ids start with `ChI`.
pub fn is_local_place_id(place_id: &str) -> bool {
    place_id.contains('_') && !place_id.contains("ChI")
}
