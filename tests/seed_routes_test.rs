mod common;

use actix_web::test;
use async_trait::async_trait;
use bson::oid::ObjectId;
use serde_json::Value;
use std::sync::Arc;

use common::{activity_payload, oid_hex, trip_payload, TestApp};
use tripforu_api::db::{memory::InMemoryActivityCatalog, ActivityCatalog, ActivityFilter, CatalogError};
use tripforu_api::models::activity::{Activity, NewActivity};

/// Catalog whose bulk replacement always fails; everything else is in memory.
struct ReadOnlyCatalog {
    inner: InMemoryActivityCatalog,
}

#[async_trait]
impl ActivityCatalog for ReadOnlyCatalog {
    async fn list(&self, filter: &ActivityFilter) -> Result<Vec<Activity>, CatalogError> {
        self.inner.list(filter).await
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Activity>, CatalogError> {
        self.inner.get(id).await
    }

    async fn create(&self, activity: NewActivity) -> Result<Activity, CatalogError> {
        self.inner.create(activity).await
    }

    async fn replace_all(&self, _activities: Vec<NewActivity>) -> Result<usize, CatalogError> {
        Err(CatalogError::InvalidInput("catalog is read-only".to_string()))
    }
}

#[actix_rt::test]
async fn test_failed_seed_keeps_trips_and_catalog() {
    let test_app = TestApp::with_catalog(Arc::new(ReadOnlyCatalog {
        inner: InMemoryActivityCatalog::new(),
    }));
    let app = test::init_service(test_app.create_app()).await;

    let activity: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/activities")
            .set_json(activity_payload("kept", "food", true))
            .to_request(),
    )
    .await;
    let trip: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/trips")
            .set_json(trip_payload("still here"))
            .to_request(),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/seed-data").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(!resp.status().is_success());

    let trips: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/trips").to_request(),
    )
    .await;
    assert_eq!(trips.as_array().unwrap().len(), 1);
    assert_eq!(oid_hex(&trips[0]), oid_hex(&trip));

    let activities: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/activities").to_request(),
    )
    .await;
    assert_eq!(activities.as_array().unwrap().len(), 1);
    assert_eq!(oid_hex(&activities[0]), oid_hex(&activity));
}

#[actix_rt::test]
async fn test_reseeding_replaces_previous_catalog() {
    let test_app = TestApp::seeded().await;
    let app = test::init_service(test_app.create_app()).await;

    let before: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/activities").to_request(),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/seed-data").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let after: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/activities").to_request(),
    )
    .await;
    assert_eq!(after.as_array().unwrap().len(), 13);
    assert_ne!(oid_hex(&after[0]), oid_hex(&before[0]));
}
