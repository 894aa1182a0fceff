use actix_web::web;
use bson::oid::ObjectId;

use crate::error::AppError;

pub mod activity;
pub mod generate;
pub mod health;
pub mod itinerary;
pub mod seed;
pub mod trip;

pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid ID: {}", raw)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/activities", web::get().to(activity::get_activities))
                .route("/activities", web::post().to(activity::create_activity))
                .route("/trips", web::get().to(trip::get_trips))
                .route("/trips", web::post().to(trip::create_trip))
                .route("/trips/{id}", web::get().to(trip::get_by_id))
                .route("/trips/{id}", web::put().to(trip::update_trip))
                .route("/trips/{id}", web::delete().to(trip::delete_trip))
                .route("/trips/{id}/itinerary", web::get().to(itinerary::get_itinerary))
                .route("/trips/{id}/itinerary", web::post().to(itinerary::add_activity))
                .route(
                    "/generate-itinerary",
                    web::post().to(generate::generate_itinerary),
                )
                .route(
                    "/generate-itinerary-ai",
                    web::post().to(generate::generate_itinerary_ai),
                )
                .route("/seed-data", web::post().to(seed::seed_data)),
        );
}
