use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::{handlers, system};

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // System users management (admin only)
        .route(
            "/api/system/users",
            get(system::handlers::users::list)
                .post(system::handlers::users::create)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/system/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/system/users/:id/change-password",
            post(system::handlers::users::change_password)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // INVENTORY ROUTES
        // ========================================
        .route(
            "/api/inventory/products",
            get(handlers::a001_product::list).post(handlers::a001_product::upsert),
        )
        .route(
            "/api/inventory/products/:id",
            get(handlers::a001_product::get_by_id).delete(handlers::a001_product::delete),
        )
        .route(
            "/api/inventory/products/:id/stock",
            patch(handlers::a001_product::set_stock),
        )
        .route(
            "/api/inventory/categories",
            get(handlers::a002_category::list_all),
        )
        // ========================================
        // SERVICE ROUTES
        // ========================================
        .route(
            "/api/services",
            get(handlers::a003_service::list).post(handlers::a003_service::create),
        )
        .route(
            "/api/services/categories",
            get(handlers::a003_service::list_categories),
        )
        .route(
            "/api/services/stats",
            get(handlers::d400_dashboard::service_stats),
        )
        .route("/api/services/:id", get(handlers::a003_service::get_by_id))
        // ========================================
        // APPOINTMENT ROUTES
        // ========================================
        .route(
            "/api/appointments",
            get(handlers::a004_appointment::list).post(handlers::a004_appointment::create),
        )
        .route(
            "/api/appointments/calendar",
            get(handlers::a004_appointment::calendar),
        )
        .route(
            "/api/appointments/:id",
            get(handlers::a004_appointment::get_by_id)
                .put(handlers::a004_appointment::update)
                .delete(handlers::a004_appointment::delete),
        )
        .route(
            "/api/appointments/:id/cancel",
            post(handlers::a004_appointment::cancel),
        )
        // ========================================
        // DASHBOARDS
        // ========================================
        .route(
            "/api/dashboard/stats",
            get(handlers::d400_dashboard::inventory_stats),
        )
        // ========================================
        // UTILITIES
        // ========================================
        .route(
            "/api/logs",
            get(handlers::logs::get_all)
                .post(handlers::logs::create)
                .delete(handlers::logs::clear),
        )
}
