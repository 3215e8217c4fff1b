use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use url::Url;

use crate::error::ProviderError;
use crate::models::weather::{CurrentWeather, ForecastDay, WeatherReport};
use crate::services::http::send_json;

const PROVIDER: &str = "open_meteo";
const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const FORECAST_DAYS: usize = 5;

const FALLBACK_CONDITIONS: [&str; 4] = ["Sunny", "Partly Cloudy", "Cloudy", "Rainy"];

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    weather_code: u8,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weather_code: Vec<u8>,
}

/// Current conditions and a five day outlook for a named place.
#[derive(Clone)]
pub struct WeatherService {
    http: reqwest::Client,
    enabled: bool,
}

impl WeatherService {
    pub fn new(http: reqwest::Client, enabled: bool) -> Self {
        Self { http, enabled }
    }

    /// Live report when the provider answers, otherwise a stable estimate.
    pub async fn report(&self, location: &str) -> WeatherReport {
        if self.enabled {
            match self.fetch(location).await {
                Ok(report) => return report,
                Err(e) => log::warn!("Weather for {} unavailable, estimating: {}", location, e),
            }
        }
        fallback_report(location, chrono::Local::now().date_naive())
    }

    async fn fetch(&self, location: &str) -> Result<WeatherReport, ProviderError> {
        let place = self.geocode(location).await?;

        let url = Url::parse_with_params(
            FORECAST_URL,
            &[
                ("latitude", place.latitude.to_string()),
                ("longitude", place.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code".to_string(),
                ),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,weather_code".to_string(),
                ),
                ("forecast_days", FORECAST_DAYS.to_string()),
                ("timezone", "auto".to_string()),
            ],
        )
        .map_err(|e| ProviderError::unexpected(PROVIDER, e.to_string()))?;

        let body: ForecastResponse = send_json(self.http.get(url), PROVIDER).await?;
        let name = match place.country {
            Some(country) => format!("{}, {}", place.name, country),
            None => place.name,
        };
        Ok(to_report(name, body))
    }

    async fn geocode(&self, location: &str) -> Result<GeocodingResult, ProviderError> {
        let url = Url::parse_with_params(
            GEOCODING_URL,
            &[
                ("name", location),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ],
        )
        .map_err(|e| ProviderError::unexpected(PROVIDER, e.to_string()))?;

        let body: GeocodingResponse = send_json(self.http.get(url), PROVIDER).await?;
        body.results
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::unexpected(PROVIDER, format!("no match for {}", location)))
    }
}

fn to_report(location: String, body: ForecastResponse) -> WeatherReport {
    let daily = body.daily;
    let forecast = daily
        .time
        .into_iter()
        .zip(daily.temperature_2m_max)
        .zip(daily.temperature_2m_min)
        .zip(daily.weather_code)
        .take(FORECAST_DAYS)
        .map(|(((date, high), low), code)| ForecastDay {
            date,
            high: high.round(),
            low: low.round(),
            condition: weather_code_to_description(code).to_string(),
        })
        .collect();

    WeatherReport {
        location,
        current: CurrentWeather {
            temperature: body.current.temperature_2m.round(),
            condition: weather_code_to_description(body.current.weather_code).to_string(),
            humidity: body.current.relative_humidity_2m.round(),
            wind_speed: body.current.wind_speed_10m.round(),
        },
        forecast,
        estimated: false,
    }
}

/// WMO weather interpretation codes.
pub fn weather_code_to_description(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

/// FNV-1a over the lowercased name; stable across runs and platforms.
fn seed(location: &str) -> u64 {
    location
        .trim()
        .to_lowercase()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325, |hash, b| {
            (hash ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
        })
}

/// Picks a value in `[low, high]` from a slice of the seed.
fn pick(seed: u64, shift: u32, low: u64, high: u64) -> f64 {
    (low + (seed >> shift) % (high - low + 1)) as f64
}

/// Plausible weather derived from the location name. The same name and day
/// always produce the same report.
pub fn fallback_report(location: &str, today: NaiveDate) -> WeatherReport {
    let seed = seed(location);
    let condition = |shift: u32| FALLBACK_CONDITIONS[((seed >> shift) % 4) as usize].to_string();

    let forecast = (0..FORECAST_DAYS as u32)
        .map(|i| {
            let day_seed = seed.rotate_left(i * 7 + 3);
            ForecastDay {
                date: (today + Duration::days(i as i64)).format("%Y-%m-%d").to_string(),
                high: pick(day_seed, 0, 25, 40),
                low: pick(day_seed, 8, 15, 25),
                condition: FALLBACK_CONDITIONS[((day_seed >> 16) % 4) as usize].to_string(),
            }
        })
        .collect();

    WeatherReport {
        location: location.to_string(),
        current: CurrentWeather {
            temperature: pick(seed, 0, 15, 45),
            condition: condition(12),
            humidity: pick(seed, 20, 40, 80),
            wind_speed: pick(seed, 32, 5, 25),
        },
        forecast,
        estimated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[test]
    fn test_code_descriptions() {
        assert_eq!(weather_code_to_description(0), "Clear sky");
        assert_eq!(weather_code_to_description(63), "Moderate rain");
        assert_eq!(weather_code_to_description(99), "Thunderstorm with hail");
        assert_eq!(weather_code_to_description(42), "Unknown");
    }

    #[test]
    fn test_fallback_is_stable_and_in_range() {
        let a = fallback_report("Jaipur", day());
        let b = fallback_report("  jaipur ", day());
        assert_eq!(a.current.temperature, b.current.temperature);
        assert_eq!(a.current.condition, b.current.condition);
        assert!(a.estimated);

        assert!((15.0..=45.0).contains(&a.current.temperature));
        assert!((40.0..=80.0).contains(&a.current.humidity));
        assert!((5.0..=25.0).contains(&a.current.wind_speed));
        assert!(FALLBACK_CONDITIONS.contains(&a.current.condition.as_str()));
    }

    #[test]
    fn test_fallback_forecast_days() {
        let report = fallback_report("Goa", day());
        assert_eq!(report.forecast.len(), 5);
        assert_eq!(report.forecast[0].date, "2025-01-10");
        assert_eq!(report.forecast[4].date, "2025-01-14");
        for f in &report.forecast {
            assert!((25.0..=40.0).contains(&f.high));
            assert!((15.0..=25.0).contains(&f.low));
        }
    }

    #[test]
    fn test_forecast_response_mapping() {
        let body: ForecastResponse = serde_json::from_value(serde_json::json!({
            "current": {
                "temperature_2m": 31.4,
                "relative_humidity_2m": 62.0,
                "wind_speed_10m": 11.6,
                "weather_code": 2
            },
            "daily": {
                "time": ["2025-01-10", "2025-01-11"],
                "temperature_2m_max": [33.2, 32.8],
                "temperature_2m_min": [22.1, 21.5],
                "weather_code": [1, 61]
            }
        }))
        .unwrap();
        let report = to_report("Chennai, India".to_string(), body);
        assert_eq!(report.current.temperature, 31.0);
        assert_eq!(report.current.condition, "Partly cloudy");
        assert_eq!(report.forecast.len(), 2);
        assert_eq!(report.forecast[1].condition, "Slight rain");
        assert!(!report.estimated);
    }

    #[actix_rt::test]
    async fn test_disabled_service_estimates() {
        let service = WeatherService::new(reqwest::Client::new(), false);
        let report = service.report("Delhi").await;
        assert!(report.estimated);
        assert_eq!(report.location, "Delhi");
    }
}
