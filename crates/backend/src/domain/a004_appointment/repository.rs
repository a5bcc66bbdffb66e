use crate::shared::data::store::{self, StoreError};
use contracts::domain::a004_appointment::{Appointment, AppointmentId};

/// All appointments that are not soft-deleted, in booking order
pub async fn list_all() -> Result<Vec<Appointment>, StoreError> {
    let store = store::read()?;
    Ok(store
        .appointments
        .iter()
        .filter(|a| !a.metadata.is_deleted)
        .cloned()
        .collect())
}

pub async fn get_by_id(id: AppointmentId) -> Result<Option<Appointment>, StoreError> {
    let store = store::read()?;
    Ok(store
        .appointments
        .iter()
        .find(|a| a.id == id && !a.metadata.is_deleted)
        .cloned())
}

pub async fn insert(aggregate: &Appointment) -> Result<AppointmentId, StoreError> {
    let mut store = store::write()?;
    if store.appointments.iter().any(|a| a.id == aggregate.id) {
        return Err(StoreError::Conflict(format!(
            "appointment {} already exists",
            aggregate.to_string_id()
        )));
    }
    store.appointments.push(aggregate.clone());
    Ok(aggregate.id)
}

pub async fn update(aggregate: &Appointment) -> Result<(), StoreError> {
    let mut store = store::write()?;
    let slot = store
        .appointments
        .iter_mut()
        .find(|a| a.id == aggregate.id && !a.metadata.is_deleted)
        .ok_or(StoreError::NotFound("appointment"))?;
    *slot = aggregate.clone();
    Ok(())
}

/// Soft delete; returns false if the appointment was not present
pub async fn soft_delete(id: AppointmentId) -> Result<bool, StoreError> {
    let mut store = store::write()?;
    match store
        .appointments
        .iter_mut()
        .find(|a| a.id == id && !a.metadata.is_deleted)
    {
        Some(appointment) => {
            appointment.metadata.is_deleted = true;
            appointment.before_write();
            Ok(true)
        }
        None => Ok(false),
    }
}
