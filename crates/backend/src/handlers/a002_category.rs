use axum::Json;

use crate::domain::a002_category;
use contracts::domain::a002_category::CategoryNode;

/// GET /api/inventory/categories
pub async fn list_all() -> Result<Json<Vec<CategoryNode>>, axum::http::StatusCode> {
    match a002_category::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list categories: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
