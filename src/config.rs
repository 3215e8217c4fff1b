use std::env;

pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 5000;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "GlobeTrotter";
const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
const DEFAULT_EMAIL_FROM: &str = "noreply@globetrotter.app";
const DEFAULT_RAPIDAPI_HOST: &str = "hotels4.p.rapidapi.com";

/// Credentials for the Amadeus client-credentials flow.
#[derive(Debug, Clone)]
pub struct AmadeusCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Runtime configuration read once at startup.
///
/// Provider keys are optional. A missing, empty, or placeholder key
/// (`your_..._here`) disables that provider and its fallback is used instead.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database: String,
    pub jwt_secret: String,
    pub client_url: String,
    pub email_from: String,
    pub google_maps_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub foursquare_api_key: Option<String>,
    pub amadeus: Option<AmadeusCredentials>,
    pub rapidapi_key: Option<String>,
    pub rapidapi_host: String,
    pub sendgrid_api_key: Option<String>,
    /// Open-Meteo needs no key; it is on unless `OPEN_METEO_ENABLED` is false.
    pub open_meteo_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let key = |name: &str| lookup(name).and_then(configured);

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(PORT);

        let amadeus = match (key("AMADEUS_CLIENT_ID"), key("AMADEUS_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(AmadeusCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        Self {
            host: text("HOST", HOST),
            port,
            mongodb_uri: text("MONGODB_URI", DEFAULT_MONGODB_URI),
            database: text("MONGODB_DATABASE", DEFAULT_DATABASE),
            jwt_secret: text("JWT_SECRET", "default_secret"),
            client_url: text("CLIENT_URL", DEFAULT_CLIENT_URL),
            email_from: text("EMAIL_FROM", DEFAULT_EMAIL_FROM),
            google_maps_api_key: key("GOOGLE_MAPS_API_KEY"),
            gemini_api_key: key("GEMINI_API_KEY"),
            foursquare_api_key: key("FOURSQUARE_API_KEY"),
            amadeus,
            rapidapi_key: key("RAPIDAPI_KEY"),
            rapidapi_host: text("RAPIDAPI_HOST", DEFAULT_RAPIDAPI_HOST),
            sendgrid_api_key: key("SENDGRID_API_KEY"),
            open_meteo_enabled: lookup("OPEN_METEO_ENABLED")
                .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        }
    }

    /// Configuration with every provider disabled.
    pub fn offline() -> Self {
        Self {
            open_meteo_enabled: false,
            ..Self::from_lookup(|_| None)
        }
    }

    /// Names of the providers that have usable credentials.
    pub fn configured_providers(&self) -> Vec<&'static str> {
        let mut providers = Vec::new();
        if self.google_maps_api_key.is_some() {
            providers.push("google_maps");
        }
        if self.gemini_api_key.is_some() {
            providers.push("gemini");
        }
        if self.foursquare_api_key.is_some() {
            providers.push("foursquare");
        }
        if self.amadeus.is_some() {
            providers.push("amadeus");
        }
        if self.rapidapi_key.is_some() {
            providers.push("rapidapi_hotels");
        }
        if self.sendgrid_api_key.is_some() {
            providers.push("sendgrid");
        }
        if self.open_meteo_enabled {
            providers.push("open_meteo");
        }
        providers
    }
}

/// Returns the key unless it is blank or still a `your_..._here` placeholder.
fn configured(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.starts_with("your_") {
        None
    } else {
        Some(trimmed.to_string())
    }
}
