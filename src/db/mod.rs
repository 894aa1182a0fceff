use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;

use crate::models::{
    activity::{Activity, Category, NewActivity},
    trip::{ItineraryEntry, NewItineraryEntry, NewTrip, ScheduledActivity, Trip, TripUpdate},
};

pub mod memory;
pub mod mongo;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Optional pre-filter applied by the catalog before activities are returned.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    pub category: Option<Category>,
    pub indoor: Option<bool>,
}

impl ActivityFilter {
    pub fn matches(&self, activity: &Activity) -> bool {
        self.category
            .as_ref()
            .map_or(true, |category| &activity.category == category)
            && self.indoor.map_or(true, |indoor| activity.indoor == indoor)
    }
}

/// Source of candidate activities.
///
/// `list` returns activities in catalog (insertion) order; ranking ties rely on it.
#[async_trait]
pub trait ActivityCatalog: Send + Sync {
    async fn list(&self, filter: &ActivityFilter) -> Result<Vec<Activity>, CatalogError>;

    async fn get(&self, id: ObjectId) -> Result<Option<Activity>, CatalogError>;

    async fn create(&self, activity: NewActivity) -> Result<Activity, CatalogError>;

    /// Drop every activity and insert `activities`. Returns how many were inserted.
    async fn replace_all(&self, activities: Vec<NewActivity>) -> Result<usize, CatalogError>;
}

/// Persistence for trips and their hand-built itineraries.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Newest first.
    async fn list_trips(&self) -> Result<Vec<Trip>, CatalogError>;

    async fn get_trip(&self, id: ObjectId) -> Result<Option<Trip>, CatalogError>;

    async fn create_trip(&self, trip: NewTrip) -> Result<Trip, CatalogError>;

    async fn update_trip(&self, id: ObjectId, update: TripUpdate) -> Result<Trip, CatalogError>;

    /// Removes the trip together with its itinerary entries.
    async fn delete_trip(&self, id: ObjectId) -> Result<(), CatalogError>;

    async fn add_entry(
        &self,
        trip_id: ObjectId,
        entry: ItineraryEntry,
    ) -> Result<ItineraryEntry, CatalogError>;

    /// Entries for a trip sorted by `(day_number, order_number)`.
    async fn entries(&self, trip_id: ObjectId) -> Result<Vec<ItineraryEntry>, CatalogError>;

    /// Remove every trip and itinerary entry.
    async fn clear(&self) -> Result<(), CatalogError>;
}

/// Validate and attach a new itinerary entry to a trip, checking that the trip and
/// activity both exist.
pub async fn schedule_activity(
    trips: &dyn TripStore,
    catalog: &dyn ActivityCatalog,
    trip_id: ObjectId,
    new_entry: NewItineraryEntry,
) -> Result<ScheduledActivity, CatalogError> {
    if new_entry.day_number < 1 {
        return Err(CatalogError::InvalidInput(format!(
            "day_number must be at least 1, got {}",
            new_entry.day_number
        )));
    }
    if new_entry.order_number < 0 {
        return Err(CatalogError::InvalidInput(format!(
            "order_number must not be negative, got {}",
            new_entry.order_number
        )));
    }
    let activity_id = ObjectId::parse_str(new_entry.activity_id.trim()).map_err(|_| {
        CatalogError::InvalidInput(format!("Invalid activity_id: {}", new_entry.activity_id))
    })?;
    let day_number = u32::try_from(new_entry.day_number)
        .map_err(|_| CatalogError::InvalidInput("day_number is too large".to_string()))?;
    let order_number = u32::try_from(new_entry.order_number)
        .map_err(|_| CatalogError::InvalidInput("order_number is too large".to_string()))?;

    if trips.get_trip(trip_id).await?.is_none() {
        return Err(CatalogError::NotFound(format!("trip {}", trip_id)));
    }
    let activity = catalog
        .get(activity_id)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("activity {}", activity_id)))?;

    let entry = trips
        .add_entry(
            trip_id,
            ItineraryEntry {
                id: None,
                trip_id,
                activity_id,
                day_number,
                order_number,
                start_time: new_entry.start_time,
                end_time: new_entry.end_time,
            },
        )
        .await?;

    Ok(ScheduledActivity::new(entry, activity))
}

/// A trip's stored itinerary grouped by day number.
///
/// Entries whose activity has since disappeared from the catalog are skipped.
pub async fn trip_itinerary(
    trips: &dyn TripStore,
    catalog: &dyn ActivityCatalog,
    trip_id: ObjectId,
) -> Result<BTreeMap<u32, Vec<ScheduledActivity>>, CatalogError> {
    let mut days: BTreeMap<u32, Vec<ScheduledActivity>> = BTreeMap::new();

    for entry in trips.entries(trip_id).await? {
        match catalog.get(entry.activity_id).await? {
            Some(activity) => days
                .entry(entry.day_number)
                .or_default()
                .push(ScheduledActivity::new(entry, activity)),
            None => log::warn!(
                "Skipping itinerary entry {:?}: activity {} no longer exists",
                entry.id,
                entry.activity_id
            ),
        }
    }

    Ok(days)
}
