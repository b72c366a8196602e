use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::presets::{self, WorkoutPreset};

pub async fn list_presets() -> Json<Vec<WorkoutPreset>> {
    Json(presets::all_presets())
}

pub async fn get_preset(Path(key): Path<String>) -> Response {
    match presets::find_preset(&key) {
        Some(preset) => Json(preset).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("Unknown preset: {}", key) })),
        )
            .into_response(),
    }
}
