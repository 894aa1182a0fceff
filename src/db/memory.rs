use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{ActivityCatalog, ActivityFilter, CatalogError, TripStore};
use crate::models::{
    activity::{Activity, NewActivity},
    trip::{ItineraryEntry, NewTrip, Trip, TripUpdate},
};

/// Process-local catalog used when no MongoDB URI is configured, and in tests.
#[derive(Debug, Default)]
pub struct InMemoryActivityCatalog {
    activities: RwLock<Vec<Activity>>,
}

impl InMemoryActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityCatalog for InMemoryActivityCatalog {
    async fn list(&self, filter: &ActivityFilter) -> Result<Vec<Activity>, CatalogError> {
        let activities = self.activities.read().await;
        Ok(activities
            .iter()
            .filter(|activity| filter.matches(activity))
            .cloned()
            .collect())
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Activity>, CatalogError> {
        let activities = self.activities.read().await;
        Ok(activities.iter().find(|a| a.id == Some(id)).cloned())
    }

    async fn create(&self, activity: NewActivity) -> Result<Activity, CatalogError> {
        let activity = activity.into_activity(ObjectId::new());
        self.activities.write().await.push(activity.clone());
        Ok(activity)
    }

    async fn replace_all(&self, activities: Vec<NewActivity>) -> Result<usize, CatalogError> {
        let fresh: Vec<Activity> = activities
            .into_iter()
            .map(|activity| activity.into_activity(ObjectId::new()))
            .collect();
        let count = fresh.len();
        *self.activities.write().await = fresh;
        Ok(count)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTripStore {
    trips: RwLock<Vec<Trip>>,
    entries: RwLock<Vec<ItineraryEntry>>,
}

impl InMemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TripStore for InMemoryTripStore {
    async fn list_trips(&self) -> Result<Vec<Trip>, CatalogError> {
        let trips = self.trips.read().await;
        // Reverse insertion order so ties on created_at still come out newest first
        let mut listed: Vec<Trip> = trips.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn get_trip(&self, id: ObjectId) -> Result<Option<Trip>, CatalogError> {
        let trips = self.trips.read().await;
        Ok(trips.iter().find(|t| t.id == Some(id)).cloned())
    }

    async fn create_trip(&self, trip: NewTrip) -> Result<Trip, CatalogError> {
        let trip = trip.into_trip(ObjectId::new());
        self.trips.write().await.push(trip.clone());
        Ok(trip)
    }

    async fn update_trip(&self, id: ObjectId, update: TripUpdate) -> Result<Trip, CatalogError> {
        let mut trips = self.trips.write().await;
        let trip = trips
            .iter_mut()
            .find(|t| t.id == Some(id))
            .ok_or_else(|| CatalogError::NotFound(format!("trip {}", id)))?;
        update.apply(trip);
        Ok(trip.clone())
    }

    async fn delete_trip(&self, id: ObjectId) -> Result<(), CatalogError> {
        let mut trips = self.trips.write().await;
        let before = trips.len();
        trips.retain(|t| t.id != Some(id));
        if trips.len() == before {
            return Err(CatalogError::NotFound(format!("trip {}", id)));
        }
        self.entries.write().await.retain(|e| e.trip_id != id);
        Ok(())
    }

    async fn add_entry(
        &self,
        trip_id: ObjectId,
        mut entry: ItineraryEntry,
    ) -> Result<ItineraryEntry, CatalogError> {
        entry.id = Some(ObjectId::new());
        entry.trip_id = trip_id;
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn entries(&self, trip_id: ObjectId) -> Result<Vec<ItineraryEntry>, CatalogError> {
        let entries = self.entries.read().await;
        let mut found: Vec<ItineraryEntry> = entries
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .cloned()
            .collect();
        found.sort_by_key(|e| (e.day_number, e.order_number));
        Ok(found)
    }

    async fn clear(&self) -> Result<(), CatalogError> {
        self.trips.write().await.clear();
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{schedule_activity, trip_itinerary};
    use crate::models::{activity::Category, trip::NewItineraryEntry};

    fn new_activity(title: &str, category: &str, indoor: bool) -> NewActivity {
        NewActivity {
            title: title.to_string(),
            category: Category::from(category),
            duration: 60,
            description: String::new(),
            tags: vec!["#tag".to_string()],
            indoor,
            cost: String::new(),
            address: None,
            lat: None,
            lng: None,
        }
    }

    fn new_trip(title: &str) -> NewTrip {
        NewTrip {
            title: title.to_string(),
            city: "Seoul".to_string(),
            start_date: "2025-11-17".to_string(),
            end_date: "2025-11-19".to_string(),
            start_time: "09:00".to_string(),
            end_time: "18:00".to_string(),
            transport: "car".to_string(),
            preferences: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_catalog_filters_and_keeps_order() {
        tokio_test::block_on(async {
            let catalog = InMemoryActivityCatalog::new();
            catalog.create(new_activity("a", "food", true)).await.unwrap();
            catalog.create(new_activity("b", "sight", false)).await.unwrap();
            catalog.create(new_activity("c", "food", false)).await.unwrap();

            let all = catalog.list(&ActivityFilter::default()).await.unwrap();
            let titles: Vec<&str> = all.iter().map(|a| a.title.as_str()).collect();
            assert_eq!(titles, vec!["a", "b", "c"]);

            let food = ActivityFilter {
                category: Some(Category::Food),
                indoor: None,
            };
            assert_eq!(catalog.list(&food).await.unwrap().len(), 2);

            let indoor_food = ActivityFilter {
                category: Some(Category::Food),
                indoor: Some(true),
            };
            let found = catalog.list(&indoor_food).await.unwrap();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].title, "a");
        });
    }

    #[test]
    fn test_replace_all_swaps_catalog() {
        tokio_test::block_on(async {
            let catalog = InMemoryActivityCatalog::new();
            catalog.create(new_activity("old", "food", true)).await.unwrap();

            let count = catalog
                .replace_all(vec![new_activity("x", "cafe", true), new_activity("y", "cafe", false)])
                .await
                .unwrap();
            assert_eq!(count, 2);

            let all = catalog.list(&ActivityFilter::default()).await.unwrap();
            assert!(all.iter().all(|a| a.title != "old"));
            assert!(all.iter().all(|a| a.id.is_some()));
        });
    }

    #[test]
    fn test_delete_trip_removes_entries() {
        tokio_test::block_on(async {
            let catalog = InMemoryActivityCatalog::new();
            let store = InMemoryTripStore::new();
            let activity = catalog.create(new_activity("a", "food", true)).await.unwrap();
            let trip = store.create_trip(new_trip("t")).await.unwrap();
            let trip_id = trip.id.unwrap();

            schedule_activity(
                &store,
                &catalog,
                trip_id,
                NewItineraryEntry {
                    activity_id: activity.id.unwrap().to_hex(),
                    day_number: 1,
                    order_number: 0,
                    start_time: None,
                    end_time: None,
                },
            )
            .await
            .unwrap();
            assert_eq!(store.entries(trip_id).await.unwrap().len(), 1);

            store.delete_trip(trip_id).await.unwrap();
            assert!(store.get_trip(trip_id).await.unwrap().is_none());
            assert!(store.entries(trip_id).await.unwrap().is_empty());
            assert!(matches!(
                store.delete_trip(trip_id).await,
                Err(CatalogError::NotFound(_))
            ));
        });
    }

    #[test]
    fn test_itinerary_groups_by_day_in_order() {
        tokio_test::block_on(async {
            let catalog = InMemoryActivityCatalog::new();
            let store = InMemoryTripStore::new();
            let first = catalog.create(new_activity("first", "food", true)).await.unwrap();
            let second = catalog.create(new_activity("second", "sight", true)).await.unwrap();
            let trip_id = store.create_trip(new_trip("t")).await.unwrap().id.unwrap();

            for (activity, day, order) in [(&second, 2, 0), (&second, 1, 1), (&first, 1, 0)] {
                schedule_activity(
                    &store,
                    &catalog,
                    trip_id,
                    NewItineraryEntry {
                        activity_id: activity.id.unwrap().to_hex(),
                        day_number: day,
                        order_number: order,
                        start_time: None,
                        end_time: None,
                    },
                )
                .await
                .unwrap();
            }

            let days = trip_itinerary(&store, &catalog, trip_id).await.unwrap();
            assert_eq!(days.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
            let day_one: Vec<&str> = days[&1].iter().map(|s| s.activity.title.as_str()).collect();
            assert_eq!(day_one, vec!["first", "second"]);
        });
    }

    #[test]
    fn test_schedule_rejects_bad_input() {
        tokio_test::block_on(async {
            let catalog = InMemoryActivityCatalog::new();
            let store = InMemoryTripStore::new();
            let trip_id = store.create_trip(new_trip("t")).await.unwrap().id.unwrap();

            let missing_activity = NewItineraryEntry {
                activity_id: ObjectId::new().to_hex(),
                day_number: 1,
                order_number: 0,
                start_time: None,
                end_time: None,
            };
            assert!(matches!(
                schedule_activity(&store, &catalog, trip_id, missing_activity.clone()).await,
                Err(CatalogError::NotFound(_))
            ));

            let day_zero = NewItineraryEntry {
                day_number: 0,
                ..missing_activity
            };
            assert!(matches!(
                schedule_activity(&store, &catalog, trip_id, day_zero).await,
                Err(CatalogError::InvalidInput(_))
            ));
        });
    }
}
