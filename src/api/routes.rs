use crate::AppState;
use axum::extract::{Extension, Multipart};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Multipart field name the upload is expected under.
pub const AUDIO_FIELD: &str = "audio";

#[derive(Serialize, Deserialize)]
pub struct PredictResponse {
    pub emotion: String,
    pub file_received: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

fn bad_request(error: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
}

#[axum::debug_handler]
pub async fn predict(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Response {
    // Scan the form for the audio field, consuming each field before the
    // next one is requested; other fields are ignored.
    let mut audio: Option<(String, Bytes)> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(AUDIO_FIELD) {
                    continue;
                }

                let filename = field.file_name().unwrap_or_default().to_string();
                if filename.is_empty() {
                    return bad_request("No file selected");
                }

                match field.bytes().await {
                    Ok(bytes) => {
                        audio = Some((filename, bytes));
                        break;
                    }
                    Err(err) => {
                        warn!(%filename, %err, "Failed to read audio field");
                        return bad_request(format!("Failed to read audio field: {err}"));
                    }
                }
            }
            Ok(None) => break,
            Err(err) => {
                warn!(%err, "Failed to parse multipart body");
                return bad_request(format!("Failed to parse multipart data: {err}"));
            }
        }
    }

    let Some((filename, audio)) = audio else {
        return bad_request("No audio file provided");
    };

    // The client-supplied name is used verbatim; a repeated name silently
    // overwrites the previous upload.
    let upload_path = state.uploads_dir().join(&filename);
    if let Err(err) = tokio::fs::write(&upload_path, &audio).await {
        error!(%filename, %err, "Failed to save upload");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save upload".into(),
            }),
        )
            .into_response();
    }

    let emotion = state.classifier.classify(&audio);
    info!(%filename, emotion, size = audio.len(), "Predicted emotion");

    (
        StatusCode::OK,
        Json(PredictResponse {
            emotion: emotion.into(),
            file_received: filename,
        }),
    )
        .into_response()
}
