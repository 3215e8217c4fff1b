//! Amadeus flight-offers client.
//!
//! Access tokens come from the OAuth2 client-credentials grant and are kept
//! until shortly before they expire.

use oauth2::{
    basic::BasicClient, reqwest::async_http_client, AuthType, AuthUrl, ClientId, ClientSecret,
    TokenResponse, TokenUrl,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::config::AmadeusCredentials;
use crate::error::ProviderError;
use crate::models::transport::{Endpoint, FlightEndpoint, TransportMode, TransportOption};
use crate::services::http::send_json;

const PROVIDER: &str = "amadeus";
const TOKEN_URL: &str = "https://test.api.amadeus.com/v1/security/oauth2/token";
const FLIGHT_OFFERS_URL: &str = "https://test.api.amadeus.com/v2/shopping/flight-offers";
const MAX_OFFERS: &str = "5";
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(1799);
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct FlightOffersResponse {
    #[serde(default)]
    data: Vec<FlightOffer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlightOffer {
    id: String,
    #[serde(default)]
    validating_airline_codes: Vec<String>,
    #[serde(default)]
    itineraries: Vec<OfferItinerary>,
    price: OfferPrice,
}

#[derive(Debug, Deserialize)]
struct OfferItinerary {
    duration: Option<String>,
    #[serde(default)]
    segments: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
struct Segment {
    departure: FlightEndpoint,
    arrival: FlightEndpoint,
}

#[derive(Debug, Deserialize)]
struct OfferPrice {
    total: String,
    currency: String,
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Search parameters for one flight-offers request.
#[derive(Debug, Clone)]
pub struct FlightQuery<'a> {
    pub origin_code: &'a str,
    pub destination_code: &'a str,
    pub departure_date: &'a str,
    pub return_date: Option<&'a str>,
    pub adults: u32,
}

#[derive(Clone)]
pub struct AmadeusClient {
    http: reqwest::Client,
    oauth: Option<BasicClient>,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl AmadeusClient {
    pub fn new(http: reqwest::Client, credentials: Option<&AmadeusCredentials>) -> Self {
        let oauth = credentials.and_then(|c| match create_oauth_client(c) {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("Amadeus client disabled: {}", e);
                None
            }
        });
        Self {
            http,
            oauth,
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.oauth.is_some()
    }

    async fn access_token(&self) -> Result<String, ProviderError> {
        let oauth = self
            .oauth
            .as_ref()
            .ok_or(ProviderError::NotConfigured(PROVIDER))?;

        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        let response = oauth
            .exchange_client_credentials()
            .request_async(async_http_client)
            .await
            .map_err(|e| ProviderError::Auth {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        let lifetime = response.expires_in().unwrap_or(DEFAULT_TOKEN_LIFETIME);
        let access_token = response.access_token().secret().clone();
        *cached = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at: Instant::now() + lifetime.saturating_sub(TOKEN_EXPIRY_MARGIN),
        });
        log::info!("Obtained Amadeus access token valid for {}s", lifetime.as_secs());
        Ok(access_token)
    }

    pub async fn flight_offers(
        &self,
        query: &FlightQuery<'_>,
    ) -> Result<Vec<TransportOption>, ProviderError> {
        let token = self.access_token().await?;

        let adults = query.adults.max(1).to_string();
        let mut params = vec![
            ("originLocationCode", query.origin_code),
            ("destinationLocationCode", query.destination_code),
            ("departureDate", query.departure_date),
            ("adults", adults.as_str()),
            ("max", MAX_OFFERS),
            ("currencyCode", "INR"),
        ];
        if let Some(return_date) = query.return_date {
            params.push(("returnDate", return_date));
        }

        let request = self
            .http
            .get(FLIGHT_OFFERS_URL)
            .bearer_auth(token)
            .query(&params);
        let body: FlightOffersResponse = send_json(request, PROVIDER).await?;

        body.data.into_iter().map(offer_to_option).collect()
    }
}

fn create_oauth_client(credentials: &AmadeusCredentials) -> Result<BasicClient, ProviderError> {
    let invalid = |e: url::ParseError| ProviderError::unexpected(PROVIDER, e.to_string());
    Ok(BasicClient::new(
        ClientId::new(credentials.client_id.clone()),
        Some(ClientSecret::new(credentials.client_secret.clone())),
        AuthUrl::new(TOKEN_URL.to_string()).map_err(invalid)?,
        Some(TokenUrl::new(TOKEN_URL.to_string()).map_err(invalid)?),
    )
    .set_auth_type(AuthType::RequestBody))
}

fn offer_to_option(offer: FlightOffer) -> Result<TransportOption, ProviderError> {
    let price = offer
        .price
        .total
        .parse::<f64>()
        .map_err(|_| ProviderError::unexpected(PROVIDER, format!("bad price {}", offer.price.total)))?;

    let mut itineraries = offer.itineraries.into_iter();
    let itinerary = itineraries
        .next()
        .ok_or_else(|| ProviderError::unexpected(PROVIDER, "offer without itinerary"))?;
    let stops = itinerary.segments.len().saturating_sub(1) as u32;
    let mut segments = itinerary.segments.into_iter();
    let first = segments
        .next()
        .ok_or_else(|| ProviderError::unexpected(PROVIDER, "itinerary without segments"))?;

    Ok(TransportOption {
        id: offer.id,
        mode: TransportMode::Flight,
        name: offer
            .validating_airline_codes
            .into_iter()
            .next()
            .unwrap_or_default(),
        departure: Endpoint::Airport(first.departure),
        arrival: Endpoint::Airport(first.arrival),
        price,
        currency: offer.price.currency,
        duration: itinerary.duration.unwrap_or_default(),
        stops: Some(stops),
        number: None,
        class: None,
    })
}
