use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a003_service;
use contracts::domain::a002_category::CategoryNode;
use contracts::domain::a003_service::{Service, ServiceDto, ServiceId};
use contracts::domain::common::AggregateId;

#[derive(Debug, Default, Deserialize)]
pub struct ServiceListQuery {
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
}

/// GET /api/services
pub async fn list(
    Query(query): Query<ServiceListQuery>,
) -> Result<Json<Vec<Service>>, axum::http::StatusCode> {
    match a003_service::service::list(query.category_id.as_deref()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list services: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/services/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Service>, axum::http::StatusCode> {
    let id = match ServiceId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a003_service::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/services
pub async fn create(
    Json(dto): Json<ServiceDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a003_service::service::create(dto).await {
        Ok(id) => Ok(Json(json!({"id": id.as_string()}))),
        Err(e) => {
            tracing::error!("Failed to create service: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/services/categories
pub async fn list_categories() -> Result<Json<Vec<CategoryNode>>, axum::http::StatusCode> {
    match a003_service::service::list_categories().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list service categories: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
