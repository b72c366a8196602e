use axum::extract::DefaultBodyLimit;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::services::file_extraction::FileExtractionService;
use crate::services::workout_generation::WorkoutGenerationService;

pub mod files;
pub mod presets;
pub mod workouts;

// Gemini rejects inline payloads above 20 MB.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub workout_generation_service: WorkoutGenerationService,
    pub file_extraction_service: FileExtractionService,
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static(workouts::USER_ID_HEADER),
        ])
        .expose_headers([
            HeaderName::from_static(workouts::GENERATION_ID_HEADER),
            HeaderName::from_static(workouts::PLAN_SAVED_HEADER),
        ])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/generate-weekly-workouts",
            post(workouts::generate_weekly_workouts),
        )
        .route(
            "/process-file",
            post(files::process_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/presets", get(presets::list_presets))
        .route("/presets/{key}", get(presets::get_preset))
        .layer(cors_layer())
        .with_state(state)
}
