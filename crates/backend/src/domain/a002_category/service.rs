use super::repository;
use contracts::domain::a002_category::CategoryNode;

pub async fn list_all() -> anyhow::Result<Vec<CategoryNode>> {
    Ok(repository::list_all().await?)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<CategoryNode>> {
    Ok(repository::get_by_id(id).await?)
}
