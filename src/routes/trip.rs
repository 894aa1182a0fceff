use actix_web::{web, HttpResponse};
use serde_json::json;

use super::parse_object_id;
use crate::error::AppError;
use crate::models::trip::{NewTrip, TripUpdate};
use crate::state::AppState;

/*
    GET /api/trips
*/
pub async fn get_trips(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let trips = state.trips.list_trips().await?;
    Ok(HttpResponse::Ok().json(trips))
}

/*
    POST /api/trips
*/
pub async fn create_trip(
    state: web::Data<AppState>,
    input: web::Json<NewTrip>,
) -> Result<HttpResponse, AppError> {
    let trip = state.trips.create_trip(input.into_inner()).await?;
    Ok(HttpResponse::Created().json(trip))
}

/*
    GET /api/trips/{id}
*/
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    match state.trips.get_trip(id).await? {
        Some(trip) => Ok(HttpResponse::Ok().json(trip)),
        None => Err(AppError::NotFound(format!("trip {}", id))),
    }
}

/*
    PUT /api/trips/{id}
*/
pub async fn update_trip(
    state: web::Data<AppState>,
    path: web::Path<String>,
    input: web::Json<TripUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    let update = input.into_inner();
    if update.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }
    let trip = state.trips.update_trip(id, update).await?;
    Ok(HttpResponse::Ok().json(trip))
}

/*
    DELETE /api/trips/{id}
*/
pub async fn delete_trip(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&path)?;
    state.trips.delete_trip(id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Trip deleted successfully" })))
}
