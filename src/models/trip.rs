use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::activity::Activity;

const DEFAULT_START_TIME: &str = "09:00";
const DEFAULT_END_TIME: &str = "18:00";
const DEFAULT_TRANSPORT: &str = "car";

fn default_start_time() -> String {
    DEFAULT_START_TIME.to_string()
}

fn default_end_time() -> String {
    DEFAULT_END_TIME.to_string()
}

fn default_transport() -> String {
    DEFAULT_TRANSPORT.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Trip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub city: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub transport: String,
    pub preferences: String,
    pub notes: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewTrip {
    pub title: String,
    pub city: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
    #[serde(default = "default_transport")]
    pub transport: String,
    #[serde(default)]
    pub preferences: String,
    #[serde(default)]
    pub notes: String,
}

impl NewTrip {
    pub fn into_trip(self, id: ObjectId) -> Trip {
        let now = Utc::now();
        Trip {
            id: Some(id),
            title: self.title,
            city: self.city,
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            end_time: self.end_time,
            transport: self.transport,
            preferences: self.preferences,
            notes: self.notes,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Fields a caller may change on an existing trip. Unknown keys are rejected.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TripUpdate {
    pub title: Option<String>,
    pub city: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub transport: Option<String>,
    pub preferences: Option<String>,
    pub notes: Option<String>,
}

impl TripUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.city.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.transport.is_none()
            && self.preferences.is_none()
            && self.notes.is_none()
    }

    pub fn apply(self, trip: &mut Trip) {
        if let Some(title) = self.title {
            trip.title = title;
        }
        if let Some(city) = self.city {
            trip.city = city;
        }
        if let Some(start_date) = self.start_date {
            trip.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            trip.end_date = end_date;
        }
        if let Some(start_time) = self.start_time {
            trip.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            trip.end_time = end_time;
        }
        if let Some(transport) = self.transport {
            trip.transport = transport;
        }
        if let Some(preferences) = self.preferences {
            trip.preferences = preferences;
        }
        if let Some(notes) = self.notes {
            trip.notes = notes;
        }
        trip.updated_at = Some(Utc::now());
    }
}

/// One activity placed on a trip day.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub trip_id: ObjectId,
    pub activity_id: ObjectId,
    pub day_number: u32,
    pub order_number: u32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewItineraryEntry {
    /// Hex form of the activity's `_id`.
    pub activity_id: String,
    pub day_number: i64,
    pub order_number: i64,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// An activity as it appears on a stored trip itinerary.
#[derive(Debug, Serialize, Clone)]
pub struct ScheduledActivity {
    #[serde(flatten)]
    pub activity: Activity,
    pub itinerary_id: Option<ObjectId>,
    pub day_number: u32,
    pub order_number: u32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl ScheduledActivity {
    pub fn new(entry: ItineraryEntry, activity: Activity) -> Self {
        Self {
            activity,
            itinerary_id: entry.id,
            day_number: entry.day_number,
            order_number: entry.order_number,
            start_time: entry.start_time,
            end_time: entry.end_time,
        }
    }
}
