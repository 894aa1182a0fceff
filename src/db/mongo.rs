use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use log::{error, info, warn};
use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection, Database,
};
use std::sync::Arc;
use std::time::Duration;

use super::{ActivityCatalog, ActivityFilter, CatalogError, TripStore};
use crate::models::{
    activity::{Activity, NewActivity},
    trip::{ItineraryEntry, NewTrip, Trip, TripUpdate},
};

const ACTIVITY_COLLECTION: &str = "Activity";
const TRIP_COLLECTION: &str = "Trip";
const ITINERARY_COLLECTION: &str = "Itinerary";

pub async fn create_mongo_client(uri: &str) -> Result<Arc<Client>, mongodb::error::Error> {
    info!("Connecting to MongoDB");

    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    match client.database("admin").run_command(doc! {"ping": 1}).await {
        Ok(_) => info!("Successfully connected to MongoDB and verified with ping command"),
        Err(e) => {
            warn!("Connected to MongoDB but ping test failed: {}", e);
            warn!("The API may still work, but some functionality might be impaired");
        }
    }

    Ok(Arc::new(client))
}

fn activity_filter_document(filter: &ActivityFilter) -> Document {
    let mut query = doc! {};
    if let Some(category) = &filter.category {
        query.insert("category", category.as_str());
    }
    if let Some(indoor) = filter.indoor {
        query.insert("indoor", indoor);
    }
    query
}

pub struct MongoActivityCatalog {
    collection: Collection<Activity>,
}

impl MongoActivityCatalog {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ACTIVITY_COLLECTION),
        }
    }
}

#[async_trait]
impl ActivityCatalog for MongoActivityCatalog {
    async fn list(&self, filter: &ActivityFilter) -> Result<Vec<Activity>, CatalogError> {
        // ObjectIds grow with insertion time, so this is catalog order
        let cursor = self
            .collection
            .find(activity_filter_document(filter))
            .sort(doc! { "_id": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Activity>, CatalogError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn create(&self, activity: NewActivity) -> Result<Activity, CatalogError> {
        let activity = activity.into_activity(ObjectId::new());
        self.collection.insert_one(&activity).await?;
        Ok(activity)
    }

    // New activities go in before the old ones are removed, so a failed insert
    // leaves the previous catalog in place.
    async fn replace_all(&self, activities: Vec<NewActivity>) -> Result<usize, CatalogError> {
        let fresh: Vec<Activity> = activities
            .into_iter()
            .map(|activity| activity.into_activity(ObjectId::new()))
            .collect();
        let fresh_ids: Vec<ObjectId> = fresh.iter().filter_map(|activity| activity.id).collect();

        if !fresh.is_empty() {
            if let Err(e) = self.collection.insert_many(&fresh).await {
                error!("Catalog replacement failed, keeping the existing activities: {}", e);
                if let Err(cleanup) = self
                    .collection
                    .delete_many(doc! { "_id": { "$in": fresh_ids.clone() } })
                    .await
                {
                    warn!("Could not remove partially inserted activities: {}", cleanup);
                }
                return Err(e.into());
            }
        }

        self.collection
            .delete_many(doc! { "_id": { "$nin": fresh_ids } })
            .await?;
        Ok(fresh.len())
    }
}

pub struct MongoTripStore {
    trips: Collection<Trip>,
    entries: Collection<ItineraryEntry>,
}

impl MongoTripStore {
    pub fn new(database: &Database) -> Self {
        Self {
            trips: database.collection(TRIP_COLLECTION),
            entries: database.collection(ITINERARY_COLLECTION),
        }
    }
}

#[async_trait]
impl TripStore for MongoTripStore {
    async fn list_trips(&self) -> Result<Vec<Trip>, CatalogError> {
        let cursor = self
            .trips
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get_trip(&self, id: ObjectId) -> Result<Option<Trip>, CatalogError> {
        Ok(self.trips.find_one(doc! { "_id": id }).await?)
    }

    async fn create_trip(&self, trip: NewTrip) -> Result<Trip, CatalogError> {
        let trip = trip.into_trip(ObjectId::new());
        self.trips.insert_one(&trip).await?;
        Ok(trip)
    }

    async fn update_trip(&self, id: ObjectId, update: TripUpdate) -> Result<Trip, CatalogError> {
        let mut trip = self
            .get_trip(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("trip {}", id)))?;
        update.apply(&mut trip);
        self.trips.replace_one(doc! { "_id": id }, &trip).await?;
        Ok(trip)
    }

    async fn delete_trip(&self, id: ObjectId) -> Result<(), CatalogError> {
        let result = self.trips.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(CatalogError::NotFound(format!("trip {}", id)));
        }
        self.entries.delete_many(doc! { "trip_id": id }).await?;
        Ok(())
    }

    async fn add_entry(
        &self,
        trip_id: ObjectId,
        mut entry: ItineraryEntry,
    ) -> Result<ItineraryEntry, CatalogError> {
        entry.id = Some(ObjectId::new());
        entry.trip_id = trip_id;
        self.entries.insert_one(&entry).await?;
        Ok(entry)
    }

    async fn entries(&self, trip_id: ObjectId) -> Result<Vec<ItineraryEntry>, CatalogError> {
        let cursor = self
            .entries
            .find(doc! { "trip_id": trip_id })
            .sort(doc! { "day_number": 1, "order_number": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn clear(&self) -> Result<(), CatalogError> {
        self.entries.delete_many(doc! {}).await?;
        self.trips.delete_many(doc! {}).await?;
        Ok(())
    }
}
