//! Offline attraction lists used when the places provider is unavailable.

pub struct FallbackAttraction {
    pub name: &'static str,
    pub rating: f64,
    pub category: &'static str,
    pub price_level: u8,
}

const fn attraction(
    name: &'static str,
    rating: f64,
    category: &'static str,
    price_level: u8,
) -> FallbackAttraction {
    FallbackAttraction {
        name,
        rating,
        category,
        price_level,
    }
}

/// City served for any location missing from [`FALLBACK_ATTRACTIONS`].
pub const DEFAULT_CITY: &str = "Mumbai";

pub const FALLBACK_ATTRACTIONS: &[(&str, &[FallbackAttraction])] = &[
    (
        "Ahmedabad",
        &[
            attraction("Sabarmati Ashram", 4.5, "museum", 1),
            attraction("Adalaj Stepwell", 4.3, "historic", 1),
            attraction("Sidi Saiyyed Mosque", 4.2, "mosque", 1),
            attraction("Kankaria Lake", 4.1, "park", 2),
            attraction("Calico Museum of Textiles", 4.4, "museum", 2),
        ],
    ),
    (
        "Hyderabad",
        &[
            attraction("Charminar", 4.4, "historic", 1),
            attraction("Golconda Fort", 4.3, "fort", 2),
            attraction("Hussain Sagar Lake", 4.2, "lake", 1),
            attraction("Salar Jung Museum", 4.5, "museum", 2),
            attraction("Qutb Shahi Tombs", 4.1, "historic", 1),
        ],
    ),
    (
        "Mumbai",
        &[
            attraction("Gateway of India", 4.5, "monument", 1),
            attraction("Marine Drive", 4.3, "scenic", 1),
            attraction("Juhu Beach", 4.2, "beach", 1),
            attraction("Colaba Causeway", 4.0, "shopping", 2),
            attraction("Elephanta Caves", 4.4, "historic", 2),
        ],
    ),
    (
        "Delhi",
        &[
            attraction("Red Fort", 4.4, "fort", 2),
            attraction("Qutub Minar", 4.3, "monument", 2),
            attraction("India Gate", 4.2, "monument", 1),
            attraction("Chandni Chowk", 4.1, "market", 2),
            attraction("Humayun's Tomb", 4.5, "historic", 2),
        ],
    ),
    (
        "Manali",
        &[
            attraction("Hadimba Temple", 4.4, "temple", 1),
            attraction("Solang Valley", 4.3, "valley", 2),
            attraction("Rohtang Pass", 4.2, "mountain", 2),
            attraction("Mall Road", 4.1, "shopping", 2),
            attraction("Manu Temple", 4.0, "temple", 1),
        ],
    ),
];

/// Fallback list for `city`, matched case-insensitively, else the Mumbai list.
pub fn for_city(city: &str) -> &'static [FallbackAttraction] {
    FALLBACK_ATTRACTIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city))
        .or_else(|| FALLBACK_ATTRACTIONS.iter().find(|(name, _)| *name == DEFAULT_CITY))
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_city_has_five() {
        for (city, list) in FALLBACK_ATTRACTIONS {
            assert_eq!(list.len(), 5, "{}", city);
        }
    }

    #[test]
    fn test_unknown_city_uses_mumbai() {
        assert_eq!(for_city("Atlantis")[0].name, "Gateway of India");
        assert_eq!(for_city("delhi")[0].name, "Red Fort");
    }
}
