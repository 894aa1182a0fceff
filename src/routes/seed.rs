use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde_json::json;

use crate::error::AppError;
use crate::services::seed_data::sample_activities;
use crate::state::AppState;

/*
    POST /api/seed-data

    Resets the service: the catalog is replaced with the sample activities, then
    trips and itineraries are dropped. A failed catalog replacement leaves both
    untouched.
*/
pub async fn seed_data(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let count = state.catalog.replace_all(sample_activities()).await?;
    info!("Seeded catalog with {} sample activities", count);

    if let Err(e) = state.trips.clear().await {
        warn!("Catalog was seeded but existing trips could not be cleared: {}", e);
        return Err(e.into());
    }

    Ok(HttpResponse::Created().json(json!({
        "message": format!("{} activities created successfully", count)
    })))
}
