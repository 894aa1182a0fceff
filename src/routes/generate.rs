use actix_web::{web, HttpResponse};
use log::info;

use crate::db::ActivityFilter;
use crate::error::AppError;
use crate::models::generation::{AiItineraryRequest, GenerationRequest};
use crate::services::ai_itinerary_service::GenerationError;
use crate::services::itinerary_generation_service::validate_days_count;
use crate::state::AppState;

/*
    POST /api/generate-itinerary
*/
pub async fn generate_itinerary(
    state: web::Data<AppState>,
    input: web::Json<GenerationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = input.into_inner();
    validate_days_count(request.days_count)?;

    // Rainy runs only ever keep indoor activities, so let the catalog drop the rest
    let filter = ActivityFilter {
        category: None,
        indoor: request.weather.is_rainy().then_some(true),
    };
    let snapshot = state.catalog.list(&filter).await?;

    let itinerary = state.generator.generate_itinerary(&snapshot, &request)?;
    info!(
        "Generated {}-day itinerary with {} activities ({} weather)",
        itinerary.days.len(),
        itinerary.total_activities(),
        request.weather.as_str()
    );

    Ok(HttpResponse::Ok().json(itinerary))
}

/*
    POST /api/generate-itinerary-ai
*/
pub async fn generate_itinerary_ai(
    state: web::Data<AppState>,
    input: web::Json<AiItineraryRequest>,
) -> Result<HttpResponse, AppError> {
    let ai = state.ai.as_ref().ok_or(GenerationError::NotConfigured)?;
    let itinerary = ai.generate_itinerary(&input).await?;
    Ok(HttpResponse::Ok().json(itinerary))
}
