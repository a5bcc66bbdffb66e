use crate::shared::data::store::{self, StoreError};
use contracts::domain::a001_product::{Product, ProductId};

/// All products that are not soft-deleted, in insertion order
pub async fn list_all() -> Result<Vec<Product>, StoreError> {
    let store = store::read()?;
    Ok(store
        .products
        .iter()
        .filter(|p| !p.metadata.is_deleted)
        .cloned()
        .collect())
}

pub async fn get_by_id(id: ProductId) -> Result<Option<Product>, StoreError> {
    let store = store::read()?;
    Ok(store
        .products
        .iter()
        .find(|p| p.id == id && !p.metadata.is_deleted)
        .cloned())
}

pub async fn insert(aggregate: &Product) -> Result<ProductId, StoreError> {
    let mut store = store::write()?;
    if store.products.iter().any(|p| p.id == aggregate.id) {
        return Err(StoreError::Conflict(format!(
            "product {} already exists",
            aggregate.to_string_id()
        )));
    }
    store.products.push(aggregate.clone());
    Ok(aggregate.id)
}

pub async fn update(aggregate: &Product) -> Result<(), StoreError> {
    let mut store = store::write()?;
    let slot = store
        .products
        .iter_mut()
        .find(|p| p.id == aggregate.id && !p.metadata.is_deleted)
        .ok_or(StoreError::NotFound("product"))?;
    *slot = aggregate.clone();
    Ok(())
}

/// Soft delete; returns false if the product was not present
pub async fn soft_delete(id: ProductId) -> Result<bool, StoreError> {
    let mut store = store::write()?;
    match store
        .products
        .iter_mut()
        .find(|p| p.id == id && !p.metadata.is_deleted)
    {
        Some(product) => {
            product.metadata.is_deleted = true;
            product.before_write();
            Ok(true)
        }
        None => Ok(false),
    }
}
