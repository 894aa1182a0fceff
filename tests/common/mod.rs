#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;
use std::sync::Arc;

use tripforu_api::db::{memory::InMemoryTripStore, ActivityCatalog};
use tripforu_api::routes;
use tripforu_api::services::ai_itinerary_service::{
    AiItineraryService, GenerationError, TextGenerator,
};
use tripforu_api::services::seed_data::sample_activities;
use tripforu_api::state::{AppState, StorageKind};

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    /// Empty in-memory catalog and trip store, AI disabled.
    pub fn new() -> Self {
        Self {
            state: AppState::in_memory(),
        }
    }

    /// In-memory stores preloaded with the sample catalog.
    pub async fn seeded() -> Self {
        let app = Self::new();
        app.state
            .catalog
            .replace_all(sample_activities())
            .await
            .expect("seeding the in-memory catalog cannot fail");
        app
    }

    /// In-memory trip store in front of the given catalog.
    pub fn with_catalog(catalog: Arc<dyn ActivityCatalog>) -> Self {
        Self {
            state: AppState::new(catalog, Arc::new(InMemoryTripStore::new()), StorageKind::Memory),
        }
    }

    pub fn with_generator(mut self, generator: StubGenerator) -> Self {
        self.state = self
            .state
            .with_ai(AiItineraryService::new(Arc::new(generator)));
        self
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    }
}

/// Text generator that answers every prompt with a fixed outcome.
pub enum StubGenerator {
    Reply(String),
    Fail(String),
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        match self {
            StubGenerator::Reply(text) => Ok(text.clone()),
            StubGenerator::Fail(message) => Err(GenerationError::Upstream(message.clone())),
        }
    }
}

pub fn activity_payload(title: &str, category: &str, indoor: bool) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "category": category,
        "duration": 60,
        "description": format!("{} description", title),
        "tags": ["#test"],
        "indoor": indoor,
        "cost": "free"
    })
}

pub fn trip_payload(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "city": "Seoul",
        "start_date": "2025-11-17",
        "end_date": "2025-11-19"
    })
}

/// Hex form of an `_id` as serialized in response bodies (`{"$oid": "..."}`).
pub fn oid_hex(value: &serde_json::Value) -> String {
    value["_id"]["$oid"]
        .as_str()
        .expect("response should carry an _id")
        .to_string()
}
