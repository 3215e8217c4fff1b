use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{ParseError, ProviderError};
use crate::models::itinerary::ItineraryDay;
use crate::services::http::send_json;

const PROVIDER: &str = "gemini";
const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
const TEMPERATURE: f32 = 0.2;
const MAX_OUTPUT_TOKENS: u32 = 800;

/// Anything that turns a prompt into free text.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ProviderError>>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self { http, api_key }
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = Url::parse_with_params(GEMINI_ENDPOINT, &[("key", self.api_key.as_str())])
            .map_err(|e| ProviderError::unexpected(PROVIDER, e.to_string()))?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response: GenerateResponse =
            send_json(self.http.post(url).json(&body), PROVIDER).await?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| ProviderError::unexpected(PROVIDER, "no text in response"))
    }
}

impl TextGenerator for GeminiClient {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ProviderError>> {
        Box::pin(self.complete(prompt))
    }
}

/// Prompt asking for a day-by-day plan as a bare JSON array.
pub fn itinerary_prompt(
    start: &str,
    end: &str,
    stops: &[String],
    start_date: &str,
    end_date: &str,
) -> String {
    format!(
        "You are a travel planner AI. Given a start location, end location, trip dates, \
and optional stops, create a JSON itinerary.
Return ONLY JSON (no additional text).
Format: an array of day objects.
Each day object:
- day: integer
- date: \"YYYY-MM-DD\" (optional)
- city: string
- activities: array of objects {{ name, time, description, cost }}

Start: {start}
End: {end}
Stops: {stops}
Dates: {start_date} to {end_date}
Rules:
- Provide 2 to 3 activities per day.
- Aim for realistic pacing and travel times.
- Include approximate cost strings (e.g., \"₹200\" or \"$10\").
",
        stops = stops.join(", "),
    )
}

/// Returns the first complete JSON array or object embedded in `text`.
pub fn extract_json(text: &str) -> Result<Value, ParseError> {
    let start = text.find(['[', '{']).ok_or(ParseError::NoJson)?;
    let mut values = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
    match values.next() {
        Some(value) => Ok(value?),
        None => Err(ParseError::NoJson),
    }
}

/// Parses model output into itinerary days.
pub fn parse_itinerary(text: &str) -> Result<Vec<ItineraryDay>, ParseError> {
    let Value::Array(items) = extract_json(text)? else {
        return Err(ParseError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<ItineraryDay>(item).map_err(|e| ParseError::InvalidDay {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}
