use axum::Json;
use serde_json::json;

use crate::shared::logger::repository;
use contracts::shared::logger::{CreateLogRequest, LogEntry};

/// GET /api/logs
pub async fn get_all() -> Result<Json<Vec<LogEntry>>, axum::http::StatusCode> {
    match repository::get_all_logs().await {
        Ok(logs) => Ok(Json(logs)),
        Err(e) => {
            tracing::error!("Failed to fetch logs: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/logs
pub async fn create(
    Json(req): Json<CreateLogRequest>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match repository::log_event(&req.source, &req.category, &req.message).await {
        Ok(()) => Ok(Json(json!({"status": "ok"}))),
        Err(e) => {
            tracing::error!("Failed to store log entry: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/logs
pub async fn clear() -> Result<(), axum::http::StatusCode> {
    match repository::clear_all_logs().await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Failed to clear logs: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
