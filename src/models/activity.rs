use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Activity category. Names match exactly, so `"Food"` is its own category and is
/// scored from `preferences["Food"]`, not `preferences["food"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Sight,
    Shopping,
    Cafe,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Food => "food",
            Category::Sight => "sight",
            Category::Shopping => "shopping",
            Category::Cafe => "cafe",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "food" => Category::Food,
            "sight" => Category::Sight,
            "shopping" => Category::Shopping,
            "cafe" => Category::Cafe,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an activity takes place. Carried through allocation untouched.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Location {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

// Generated itineraries sometimes send tags as one comma separated string
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::Array(items)) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect()),
        Some(serde_json::Value::String(joined)) => Ok(joined
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Activity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub category: Category,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub indoor: bool,
    #[serde(rename = "footer", default)]
    pub cost_label: String,
    #[serde(flatten)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload accepted when adding an activity to the catalog.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewActivity {
    pub title: String,
    pub category: Category,
    pub duration: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub indoor: bool,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl NewActivity {
    pub fn into_activity(self, id: ObjectId) -> Activity {
        Activity {
            id: Some(id),
            title: self.title,
            category: self.category,
            duration_minutes: self.duration,
            description: self.description,
            tags: self.tags,
            indoor: self.indoor,
            cost_label: self.cost,
            location: Location {
                address: self.address,
                lat: self.lat,
                lng: self.lng,
            },
            created_at: Some(Utc::now()),
        }
    }
}
