use axum::Json;

use crate::shared::data::store;
use contracts::dashboards::d400_inventory_summary::DashboardStats;
use contracts::dashboards::d401_service_summary::ServiceStats;

/// GET /api/dashboard/stats
pub async fn inventory_stats() -> Result<Json<DashboardStats>, axum::http::StatusCode> {
    let store = store::read().map_err(|e| {
        tracing::error!("Failed to read dashboard stats: {:?}", e);
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    })?;
    match store.dashboard_stats.clone() {
        Some(stats) => Ok(Json(stats)),
        None => {
            tracing::error!("Dashboard stats not seeded");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/services/stats
pub async fn service_stats() -> Result<Json<ServiceStats>, axum::http::StatusCode> {
    let store = store::read().map_err(|e| {
        tracing::error!("Failed to read service stats: {:?}", e);
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    })?;
    match store.service_stats.clone() {
        Some(stats) => Ok(Json(stats)),
        None => {
            tracing::error!("Service stats not seeded");
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
