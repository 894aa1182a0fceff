use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    storage: &'static str,
    ai_enabled: bool,
    version: &'static str,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok",
        storage: state.storage.as_str(),
        ai_enabled: state.ai.is_some(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
