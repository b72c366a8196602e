use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use uuid::Uuid;

use crate::api::AppState;
use crate::clients::models::requests::GenerationRequest;
use crate::clients::models::responses::GenerationErrorBody;
use crate::error::GenerationError;
use crate::services::workout_generation::PLACEHOLDER_USER_ID;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const GENERATION_ID_HEADER: &str = "x-generation-id";
pub const PLAN_SAVED_HEADER: &str = "x-plan-saved";

/// The caller's user id, or the placeholder identity for anonymous callers.
fn caller_identity(headers: &HeaderMap) -> Uuid {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .unwrap_or(PLACEHOLDER_USER_ID)
}

fn generation_error_response(error: &GenerationError) -> Response {
    let body = GenerationErrorBody {
        error: error.to_string(),
        details: error.details(),
        timestamp: Utc::now().to_rfc3339(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

pub async fn generate_weekly_workouts(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = GenerationError::InvalidRequest(rejection.body_text());
            tracing::warn!(error = %error, "workout.request_rejected");
            return generation_error_response(&error);
        }
    };

    let user_id = caller_identity(&headers);

    match state
        .workout_generation_service
        .generate(request, user_id)
        .await
    {
        Ok(generated) => (
            [
                (GENERATION_ID_HEADER, generated.session_id.to_string()),
                (PLAN_SAVED_HEADER, generated.saved.to_string()),
            ],
            Json(generated.plan),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "failed to generate workouts");
            generation_error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_caller_identity_from_header() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());
        assert_eq!(caller_identity(&headers), id);
    }

    #[test]
    fn test_caller_identity_falls_back_to_placeholder() {
        assert_eq!(caller_identity(&HeaderMap::new()), PLACEHOLDER_USER_ID);

        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        assert_eq!(caller_identity(&headers), PLACEHOLDER_USER_ID);
    }
}
