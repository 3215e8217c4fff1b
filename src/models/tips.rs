use serde::{Deserialize, Serialize};

use crate::data::tips;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelTips {
    pub destination: String,
    pub general: Vec<String>,
    pub accommodation: Vec<String>,
    pub transportation: Vec<String>,
    pub food: Vec<String>,
    pub activities: Vec<String>,
}

impl TravelTips {
    pub fn for_destination(destination: &str) -> Self {
        let owned = |tips: &[&str]| -> Vec<String> { tips.iter().map(|t| t.to_string()).collect() };
        Self {
            destination: destination.to_string(),
            general: owned(tips::GENERAL),
            accommodation: owned(tips::ACCOMMODATION),
            transportation: owned(tips::TRANSPORTATION),
            food: owned(tips::FOOD),
            activities: owned(tips::ACTIVITIES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tips_echo_destination() {
        let tips = TravelTips::for_destination("Goa");
        assert_eq!(tips.destination, "Goa");
        assert_eq!(tips.general.len(), 4);
        assert!(tips.transportation.iter().any(|t| t.contains("IRCTC")));
    }
}
