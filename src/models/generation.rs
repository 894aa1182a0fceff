use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::activity::Activity;

const DEFAULT_DAYS: i64 = 3;

fn default_days() -> i64 {
    DEFAULT_DAYS
}

/// Category name -> integer weight. Missing categories fall back to the default weight.
pub type Preferences = HashMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Weather {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Other(String),
}

impl Weather {
    pub fn as_str(&self) -> &str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Cloudy => "cloudy",
            Weather::Rainy => "rainy",
            Weather::Snowy => "snowy",
            Weather::Other(name) => name,
        }
    }

    pub fn is_rainy(&self) -> bool {
        matches!(self, Weather::Rainy)
    }
}

impl From<String> for Weather {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "sunny" => Weather::Sunny,
            "cloudy" => Weather::Cloudy,
            "rainy" => Weather::Rainy,
            "snowy" => Weather::Snowy,
            _ => Weather::Other(value),
        }
    }
}

impl From<&str> for Weather {
    fn from(value: &str) -> Self {
        Weather::from(value.to_string())
    }
}

impl From<Weather> for String {
    fn from(weather: Weather) -> Self {
        weather.as_str().to_string()
    }
}

/// Body of `POST /api/generate-itinerary`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(rename = "days", default = "default_days")]
    pub days_count: i64,
    #[serde(default)]
    pub weather: Weather,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            preferences: Preferences::new(),
            days_count: DEFAULT_DAYS,
            weather: Weather::default(),
        }
    }
}

/// Day-partitioned itinerary handed back to callers. `days[0]` is day 1.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeneratedItinerary {
    pub days: Vec<Vec<Activity>>,
}

impl GeneratedItinerary {
    pub fn total_activities(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

fn default_departure() -> String {
    "Daejeon".to_string()
}

fn default_destination() -> String {
    "Seoul".to_string()
}

fn default_start_date() -> String {
    "2025-11-17".to_string()
}

fn default_end_date() -> String {
    "2025-11-19".to_string()
}

fn default_start_time() -> String {
    "09:00".to_string()
}

fn default_end_time() -> String {
    "18:00".to_string()
}

fn default_transport() -> String {
    "car".to_string()
}

/// Body of `POST /api/generate-itinerary-ai`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiItineraryRequest {
    #[serde(default = "default_departure")]
    pub departure: String,
    #[serde(default = "default_destination")]
    pub destination: String,
    #[serde(default = "default_start_date")]
    pub start_date: String,
    #[serde(default = "default_end_date")]
    pub end_date: String,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
    #[serde(default = "default_transport")]
    pub transport: String,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub weather: Option<Weather>,
}

impl Default for AiItineraryRequest {
    fn default() -> Self {
        Self {
            departure: default_departure(),
            destination: default_destination(),
            start_date: default_start_date(),
            end_date: default_end_date(),
            start_time: default_start_time(),
            end_time: default_end_time(),
            transport: default_transport(),
            preferences: Preferences::new(),
            interests: String::new(),
            notes: String::new(),
            weather: None,
        }
    }
}
