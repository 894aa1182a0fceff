//! Itinerary generation delegated to a hosted text-generation model.
//!
//! This is an alternative to [`ItineraryGenerator`](super::itinerary_generation_service::ItineraryGenerator):
//! instead of ranking the catalog, the request is rendered into a natural-language
//! prompt and the model is asked to answer with the same `{"days": [[...]]}` shape.
//!
//! ## Setup
//! Set `GEMINI_API_KEY`. `GEMINI_MODEL` and `GEMINI_API_BASE` are optional.
//!
//! Any [`TextGenerator`] can be plugged in, which is how tests avoid the network.

use async_trait::async_trait;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::config::GeminiConfig;
use crate::models::generation::{AiItineraryRequest, GeneratedItinerary};

/// Maximum number of characters of an unparseable response kept for diagnostics.
pub const RAW_EXCERPT_CHARS: usize = 500;

const DEFAULT_CATEGORY_SHARE: i64 = 25;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("AI itinerary generation is not configured; set GEMINI_API_KEY")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Upstream service returned no text")]
    EmptyResponse,

    #[error("Could not parse AI response: {message}")]
    Parse { message: String, raw_excerpt: String },
}

/// Something that turns a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, GenerationError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream(format!(
                "{} {}",
                status,
                excerpt(&text, RAW_EXCERPT_CHARS)
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Prompt, call and parse wrapped around a [`TextGenerator`].
#[derive(Clone)]
pub struct AiItineraryService {
    generator: Arc<dyn TextGenerator>,
}

impl AiItineraryService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn from_config(config: &GeminiConfig) -> Result<Self, GenerationError> {
        let client = GeminiClient::new(config)?;
        info!("Gemini itinerary generation enabled with model {}", config.model);
        Ok(Self::new(Arc::new(client)))
    }

    pub async fn generate_itinerary(
        &self,
        request: &AiItineraryRequest,
    ) -> Result<GeneratedItinerary, GenerationError> {
        let prompt = build_prompt(request);
        let response_text = self.generator.generate(&prompt).await.map_err(|e| {
            error!("Text generation call failed: {}", e);
            e
        })?;

        parse_generated_itinerary(&response_text).map_err(|e| {
            if let GenerationError::Parse { message, raw_excerpt } = &e {
                error!("Failed to parse AI response: {}; response: {}", message, raw_excerpt);
            }
            e
        })
    }
}

fn or_none(value: &str) -> &str {
    if value.trim().is_empty() {
        "none"
    } else {
        value
    }
}

/// Render an itinerary request into the instruction prompt sent to the model.
pub fn build_prompt(request: &AiItineraryRequest) -> String {
    let share = |category: &str| {
        request
            .preferences
            .get(category)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_SHARE)
    };
    let weather_line = request
        .weather
        .as_ref()
        .map(|weather| format!("- Expected weather: {}\n", weather.as_str()))
        .unwrap_or_default();

    format!(
        r##"You are a professional travel planner. Using the information below, build a detailed travel itinerary in JSON.

**Trip details:**
- Departure: {departure}
- Destination: {destination}
- Travel period: {start_date} ~ {end_date}
- Daily activity hours: {start_time} ~ {end_time}
- Transport: {transport}
- Preference shares: food {food}%, sightseeing {sight}%, shopping {shopping}%, cafe/rest {cafe}%
- Interests: {interests}
- Additional requests: {notes}
{weather_line}
**Requirements:**
1. Distribute activities according to the preference shares (more food spots when food is high, more sights when sightseeing is high).
2. Include well-known places that actually exist in {destination}.
3. Arrange activities efficiently with travel time and distance in mind.
4. Give every activity a realistic duration.
5. Take weather, fatigue and time of day (meal times and so on) into account.

**Output format (respond with valid JSON only):**
{{
  "days": [
    [
      {{
        "title": "Activity name",
        "category": "food|sight|shopping|cafe",
        "duration": 60,
        "description": "Detailed description",
        "tags": ["#tag1", "#tag2", "#tag3"],
        "indoor": true,
        "footer": "Estimated cost: 15,000 KRW per person"
      }}
    ]
  ]
}}

Respond with JSON only. Do not include any other explanation or text."##,
        departure = request.departure,
        destination = request.destination,
        start_date = request.start_date,
        end_date = request.end_date,
        start_time = request.start_time,
        end_time = request.end_time,
        transport = request.transport,
        food = share("food"),
        sight = share("sight"),
        shopping = share("shopping"),
        cafe = share("cafe"),
        interests = or_none(&request.interests),
        notes = or_none(&request.notes),
        weather_line = weather_line,
    )
}

/// Strip an optional markdown code fence (```` ```json ```` or ```` ``` ````) around a response.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    }
    if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

/// First `max_chars` characters of `text`, never splitting a character.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Parse model output into a day-partitioned itinerary.
pub fn parse_generated_itinerary(text: &str) -> Result<GeneratedItinerary, GenerationError> {
    let body = strip_code_fences(text);
    serde_json::from_str(body).map_err(|e| GenerationError::Parse {
        message: e.to_string(),
        raw_excerpt: excerpt(body, RAW_EXCERPT_CHARS),
    })
}
