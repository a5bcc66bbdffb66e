use super::repository;
use chrono::NaiveDate;
use contracts::domain::a004_appointment::{Appointment, AppointmentDto, AppointmentId};
use contracts::domain::common::AggregateId;
use contracts::projections::p901_appointment_list::{self, AppointmentListParams, ServiceNameMap};
use contracts::projections::p902_appointment_calendar::{self, CalendarDayCell, MonthRef};

/// Derived appointment list, optionally narrowed to an inclusive date range
pub async fn list(
    params: &AppointmentListParams,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) -> anyhow::Result<Vec<Appointment>> {
    let items = repository::list_all().await?;
    let items: Vec<Appointment> = items
        .into_iter()
        .filter(|a| date_from.map_or(true, |from| a.date >= from))
        .filter(|a| date_to.map_or(true, |to| a.date <= to))
        .collect();
    Ok(p901_appointment_list::derive(
        &items,
        params,
        &ServiceNameMap::default(),
    ))
}

/// Month view: the 42-cell grid with appointments bucketed by date
pub async fn calendar(month: MonthRef) -> anyhow::Result<Vec<CalendarDayCell>> {
    let items = repository::list_all().await?;
    Ok(p902_appointment_calendar::build_grid(month, &items))
}

pub async fn get_by_id(id: AppointmentId) -> anyhow::Result<Option<Appointment>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn create(dto: AppointmentDto) -> anyhow::Result<AppointmentId> {
    let mut aggregate = Appointment::new_for_insert(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: AppointmentDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| AppointmentId::from_string(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    Ok(repository::update(&aggregate).await?)
}

/// Mark an appointment cancelled, keeping it on the books
pub async fn cancel(id: AppointmentId) -> anyhow::Result<Appointment> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.cancel();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: AppointmentId) -> anyhow::Result<bool> {
    Ok(repository::soft_delete(id).await?)
}
