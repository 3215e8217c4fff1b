//! City-pair tables used by the offline price and route estimates.

pub const DEFAULT_PRICE_MULTIPLIER: f64 = 2.0;

/// Price multiplier per ordered city pair.
pub const PRICE_MULTIPLIERS: &[(&str, &[(&str, f64)])] = &[
    (
        "Mumbai",
        &[("Delhi", 2.5), ("Bangalore", 1.8), ("Chennai", 2.0), ("Kolkata", 2.2)],
    ),
    (
        "Delhi",
        &[("Mumbai", 2.5), ("Bangalore", 2.8), ("Chennai", 2.6), ("Kolkata", 1.8)],
    ),
    (
        "Bangalore",
        &[("Mumbai", 1.8), ("Delhi", 2.8), ("Chennai", 1.2), ("Kolkata", 2.5)],
    ),
    (
        "Chennai",
        &[("Mumbai", 2.0), ("Delhi", 2.6), ("Bangalore", 1.2), ("Kolkata", 2.3)],
    ),
];

pub const DEFAULT_ROAD_DISTANCE_KM: u64 = 1000;

/// Approximate road distance in kilometers. Symmetric.
pub const ROAD_DISTANCES_KM: &[(&str, &str, u64)] = &[
    ("Mumbai", "Delhi", 1400),
    ("Mumbai", "Bangalore", 1000),
    ("Mumbai", "Chennai", 1300),
    ("Mumbai", "Kolkata", 2000),
    ("Delhi", "Bangalore", 1800),
    ("Delhi", "Chennai", 1700),
    ("Delhi", "Kolkata", 1300),
    ("Bangalore", "Chennai", 350),
    ("Bangalore", "Kolkata", 1800),
    ("Chennai", "Kolkata", 1600),
];

/// Airport codes for cities the flight search understands by name.
pub const CITY_IATA_CODES: &[(&str, &str)] = &[
    ("Mumbai", "BOM"),
    ("Delhi", "DEL"),
    ("New Delhi", "DEL"),
    ("Bangalore", "BLR"),
    ("Bengaluru", "BLR"),
    ("Chennai", "MAA"),
    ("Kolkata", "CCU"),
    ("Hyderabad", "HYD"),
    ("Ahmedabad", "AMD"),
    ("Pune", "PNQ"),
    ("Goa", "GOI"),
    ("Jaipur", "JAI"),
    ("Kochi", "COK"),
    ("Lucknow", "LKO"),
    ("Varanasi", "VNS"),
    ("Amritsar", "ATQ"),
    ("Srinagar", "SXR"),
    ("Guwahati", "GAU"),
];

pub fn price_multiplier(origin: &str, destination: &str) -> Option<f64> {
    PRICE_MULTIPLIERS
        .iter()
        .find(|(city, _)| *city == origin)
        .and_then(|(_, peers)| peers.iter().find(|(peer, _)| *peer == destination))
        .map(|(_, multiplier)| *multiplier)
}

pub fn road_distance_km(origin: &str, destination: &str) -> Option<u64> {
    ROAD_DISTANCES_KM
        .iter()
        .find(|(a, b, _)| (*a == origin && *b == destination) || (*a == destination && *b == origin))
        .map(|(_, _, km)| *km)
}

/// IATA code for a city name; three-letter uppercase input is passed through.
pub fn iata_code(city: &str) -> Option<String> {
    if city.len() == 3 && city.chars().all(|c| c.is_ascii_uppercase()) {
        return Some(city.to_string());
    }
    CITY_IATA_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city))
        .map(|(_, code)| code.to_string())
}
