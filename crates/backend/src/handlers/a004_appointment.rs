use axum::extract::{Path, Query};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a004_appointment;
use contracts::domain::a004_appointment::{Appointment, AppointmentDto, AppointmentId};
use contracts::domain::common::AggregateId;
use contracts::projections::p901_appointment_list::AppointmentListParams;
use contracts::projections::p902_appointment_calendar::{CalendarDayCell, MonthRef};

/// Flat query-string form of the appointment list parameters
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentListQuery {
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub search: String,
    #[serde(rename = "dateFrom")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "dateTo")]
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

/// GET /api/appointments
pub async fn list(
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Vec<Appointment>>, axum::http::StatusCode> {
    let params = AppointmentListParams {
        category_id: query.category_id,
        subcategory: query.subcategory,
        search: query.search,
    };
    match a004_appointment::service::list(&params, query.date_from, query.date_to).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list appointments: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/appointments/calendar
pub async fn calendar(
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Vec<CalendarDayCell>>, axum::http::StatusCode> {
    let month = MonthRef::new(query.year, query.month);
    match a004_appointment::service::calendar(month).await {
        Ok(grid) => Ok(Json(grid)),
        Err(e) => {
            tracing::error!("Failed to build calendar grid: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/appointments/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<Appointment>, axum::http::StatusCode> {
    let id = match AppointmentId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_appointment::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/appointments
pub async fn create(
    Json(dto): Json<AppointmentDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a004_appointment::service::create(dto).await {
        Ok(id) => Ok(Json(json!({"id": id.as_string()}))),
        Err(e) => {
            tracing::error!("Failed to create appointment: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PUT /api/appointments/:id
pub async fn update(
    Path(id): Path<String>,
    Json(mut dto): Json<AppointmentDto>,
) -> Result<(), axum::http::StatusCode> {
    dto.id = Some(id);
    match a004_appointment::service::update(dto).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Failed to update appointment: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/appointments/:id/cancel
pub async fn cancel(Path(id): Path<String>) -> Result<Json<Appointment>, axum::http::StatusCode> {
    let id = match AppointmentId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_appointment::service::cancel(id).await {
        Ok(appointment) => Ok(Json(appointment)),
        Err(e) => {
            tracing::error!("Failed to cancel appointment: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/appointments/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let id = match AppointmentId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_appointment::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
