use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
}

/// Airport endpoint of a flight leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    pub iata_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}

/// Departure/arrival of a transport option: an airport for flights, a
/// clock time for trains and buses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Airport(FlightEndpoint),
    Time(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportOption {
    pub id: String,
    pub mode: TransportMode,
    /// Airline code for flights, service name otherwise.
    pub name: String,
    pub departure: Endpoint,
    pub arrival: Endpoint,
    pub price: f64,
    pub currency: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Seat class for trains, coach type for buses.
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationOption {
    pub id: String,
    pub name: String,
    /// Price for the whole stay.
    pub price: f64,
    pub currency: String,
    pub rating: f64,
    pub image: Option<String>,
    pub amenities: Vec<String>,
}

/// Transport lists for one origin/destination pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportOptions {
    pub flights: Vec<TransportOption>,
    pub trains: Vec<TransportOption>,
    pub buses: Vec<TransportOption>,
}

/// Lowest price among `options`, `None` when empty.
pub fn cheapest(options: &[TransportOption]) -> Option<f64> {
    options.iter().map(|o| o.price).reduce(f64::min)
}

impl TransportOptions {
    pub fn cheapest_flight(&self) -> Option<f64> {
        cheapest(&self.flights)
    }

    pub fn cheapest_train(&self) -> Option<f64> {
        cheapest(&self.trains)
    }

    pub fn cheapest_bus(&self) -> Option<f64> {
        cheapest(&self.buses)
    }
}
