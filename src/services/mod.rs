pub mod ai_itinerary_service;
pub mod itinerary_generation_service;
pub mod seed_data;
