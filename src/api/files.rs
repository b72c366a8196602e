use axum::Json;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::AppState;
use crate::clients::models::responses::{ExtractedText, ExtractionErrorBody};
use crate::error::GenerationError;
use crate::services::file_extraction::DEFAULT_MIME_TYPE;

const FILE_FIELD: &str = "file";

struct UploadedFile {
    name: String,
    mime_type: String,
    data: Vec<u8>,
}

fn extraction_error_response(error: &GenerationError) -> Response {
    let body = ExtractionErrorBody {
        error: error.to_string(),
        details: error.details(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        let data = field.bytes().await?.to_vec();

        return Ok(Some(UploadedFile {
            name,
            mime_type,
            data,
        }));
    }
    Ok(None)
}

pub async fn process_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            let error = GenerationError::InvalidRequest(rejection.body_text());
            tracing::error!(error = %error, "file.request_rejected");
            return extraction_error_response(&error);
        }
    };

    let upload = match read_file_field(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            let error = GenerationError::InvalidRequest("No file uploaded".to_string());
            tracing::error!(error = %error, "file.missing");
            return extraction_error_response(&error);
        }
        Err(e) => {
            let error = GenerationError::InvalidRequest(e.body_text());
            tracing::error!(error = %error, "file.read_failed");
            return extraction_error_response(&error);
        }
    };

    match state
        .file_extraction_service
        .extract_text(&upload.name, &upload.data, &upload.mime_type)
        .await
    {
        Ok(text) => Json(ExtractedText { text }).into_response(),
        Err(e) => {
            tracing::error!(error = %e, file_name = %upload.name, "failed to process file");
            extraction_error_response(&e)
        }
    }
}
