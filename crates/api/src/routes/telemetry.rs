//! Telemetry Routes

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::synthetic;
use crate::AppState;
use storage::StorageRecord;

/// Confirmation message envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope returned by `/delete`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Insert one batch of synthetic records.
pub async fn populate(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let readings = synthetic::random_batch();

    for reading in readings {
        state
            .repository
            .insert(reading.company, reading.capacity_used, reading.error_status)
            .await
            .map_err(|e| {
                error!("Populate insert failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
    }

    Ok(Json(MessageResponse {
        message: "Database populated with random records.".to_string(),
    }))
}

/// List every record as JSON.
pub async fn data(
    State(state): State<AppState>,
) -> Result<Json<Vec<StorageRecord>>, StatusCode> {
    match state.repository.list_all().await {
        Ok(records) => Ok(Json(records)),
        Err(e) => {
            error!("Listing records failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Delete every record, reporting how many were removed.
pub async fn delete_all(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.repository.delete_all().await {
        Ok(deleted) => Ok(Json(MessageResponse {
            message: format!("Deleted {deleted} records."),
        })),
        Err(e) => {
            error!("Delete failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
