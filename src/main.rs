use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use tripforu_api::config::Config;
use tripforu_api::db::mongo::{create_mongo_client, MongoActivityCatalog, MongoTripStore};
use tripforu_api::routes;
use tripforu_api::services::ai_itinerary_service::AiItineraryService;
use tripforu_api::state::{AppState, StorageKind};

async fn build_state(config: &Config) -> std::io::Result<AppState> {
    let state = match &config.mongodb_uri {
        Some(uri) => {
            let client = create_mongo_client(uri)
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            let database = client.database(&config.mongodb_database);
            info!("Using MongoDB database {}", config.mongodb_database);
            AppState::new(
                Arc::new(MongoActivityCatalog::new(&database)),
                Arc::new(MongoTripStore::new(&database)),
                StorageKind::MongoDb,
            )
        }
        None => {
            warn!("MONGODB_URI not set. Activities and trips are kept in memory only.");
            AppState::in_memory()
        }
    };

    let state = match &config.gemini {
        Some(gemini) => match AiItineraryService::from_config(gemini) {
            Ok(ai) => state.with_ai(ai),
            Err(e) => {
                warn!("Gemini client could not be created: {}. AI features are disabled.", e);
                state
            }
        },
        None => {
            warn!("GEMINI_API_KEY not found. AI features will be disabled.");
            state
        }
    };

    Ok(state)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = Config::from_env();
    let state = build_state(&config).await?;

    info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(state.clone()))
            .configure(routes::config)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
