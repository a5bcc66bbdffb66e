use crate::shared::data::store::{self, StoreError};
use contracts::domain::a002_category::CategoryNode;
use contracts::domain::a003_service::{Service, ServiceId};

pub async fn list_all() -> Result<Vec<Service>, StoreError> {
    let store = store::read()?;
    Ok(store
        .services
        .iter()
        .filter(|s| !s.metadata.is_deleted)
        .cloned()
        .collect())
}

pub async fn get_by_id(id: ServiceId) -> Result<Option<Service>, StoreError> {
    let store = store::read()?;
    Ok(store
        .services
        .iter()
        .find(|s| s.id == id && !s.metadata.is_deleted)
        .cloned())
}

pub async fn insert(aggregate: &Service) -> Result<ServiceId, StoreError> {
    let mut store = store::write()?;
    if store.services.iter().any(|s| s.id == aggregate.id) {
        return Err(StoreError::Conflict(format!(
            "service {} already exists",
            aggregate.to_string_id()
        )));
    }
    store.services.push(aggregate.clone());
    Ok(aggregate.id)
}

/// Service category tree (separate from the product categories)
pub async fn list_categories() -> Result<Vec<CategoryNode>, StoreError> {
    let store = store::read()?;
    Ok(store.service_categories.clone())
}
