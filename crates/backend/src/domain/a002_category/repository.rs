use crate::shared::data::store::{self, StoreError};
use contracts::domain::a002_category::CategoryNode;

/// Product category tree, in display order
pub async fn list_all() -> Result<Vec<CategoryNode>, StoreError> {
    let store = store::read()?;
    Ok(store.categories.clone())
}

pub async fn get_by_id(id: &str) -> Result<Option<CategoryNode>, StoreError> {
    let store = store::read()?;
    Ok(store.categories.iter().find(|c| c.id == id).cloned())
}
