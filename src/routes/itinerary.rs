use actix_web::{web, HttpResponse};

use super::parse_object_id;
use crate::db::{schedule_activity, trip_itinerary};
use crate::error::AppError;
use crate::models::trip::NewItineraryEntry;
use crate::state::AppState;

/*
    GET /api/trips/{id}/itinerary
*/
pub async fn get_itinerary(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let trip_id = parse_object_id(&path)?;
    let days = trip_itinerary(state.trips.as_ref(), state.catalog.as_ref(), trip_id).await?;
    Ok(HttpResponse::Ok().json(days))
}

/*
    POST /api/trips/{id}/itinerary
*/
pub async fn add_activity(
    state: web::Data<AppState>,
    path: web::Path<String>,
    input: web::Json<NewItineraryEntry>,
) -> Result<HttpResponse, AppError> {
    let trip_id = parse_object_id(&path)?;
    let scheduled = schedule_activity(
        state.trips.as_ref(),
        state.catalog.as_ref(),
        trip_id,
        input.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Created().json(scheduled))
}
