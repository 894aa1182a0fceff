use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::ActivityFilter;
use crate::error::AppError;
use crate::models::activity::{Category, NewActivity};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ActivityQuery {
    pub category: Option<String>,
    pub indoor: Option<String>,
}

impl ActivityQuery {
    /// Blank values are ignored; `indoor` is true only for a case-insensitive "true".
    pub fn to_filter(&self) -> ActivityFilter {
        ActivityFilter {
            category: self
                .category
                .as_deref()
                .filter(|category| !category.trim().is_empty())
                .map(Category::from),
            indoor: self
                .indoor
                .as_deref()
                .map(|indoor| indoor.trim().eq_ignore_ascii_case("true")),
        }
    }
}

/*
    GET /api/activities
*/
pub async fn get_activities(
    state: web::Data<AppState>,
    query: web::Query<ActivityQuery>,
) -> Result<HttpResponse, AppError> {
    let activities = state.catalog.list(&query.to_filter()).await?;
    Ok(HttpResponse::Ok().json(activities))
}

/*
    POST /api/activities
*/
pub async fn create_activity(
    state: web::Data<AppState>,
    input: web::Json<NewActivity>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }
    if input.duration == 0 {
        return Err(AppError::BadRequest("duration must be positive".to_string()));
    }

    let activity = state.catalog.create(input).await?;
    Ok(HttpResponse::Created().json(activity))
}
