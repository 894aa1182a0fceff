use std::sync::Arc;

use crate::db::{
    memory::{InMemoryActivityCatalog, InMemoryTripStore},
    ActivityCatalog, TripStore,
};
use crate::services::{
    ai_itinerary_service::AiItineraryService, itinerary_generation_service::ItineraryGenerator,
};

/// Storage backend behind the catalog and trip store, reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    MongoDb,
    Memory,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::MongoDb => "mongodb",
            StorageKind::Memory => "memory",
        }
    }
}

/// Shared handles given to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ActivityCatalog>,
    pub trips: Arc<dyn TripStore>,
    pub generator: ItineraryGenerator,
    pub ai: Option<AiItineraryService>,
    pub storage: StorageKind,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn ActivityCatalog>,
        trips: Arc<dyn TripStore>,
        storage: StorageKind,
    ) -> Self {
        Self {
            catalog,
            trips,
            generator: ItineraryGenerator::new(),
            ai: None,
            storage,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryActivityCatalog::new()),
            Arc::new(InMemoryTripStore::new()),
            StorageKind::Memory,
        )
    }

    pub fn with_ai(mut self, ai: AiItineraryService) -> Self {
        self.ai = Some(ai);
        self
    }
}
