use super::repository;
use contracts::domain::a002_category::CategoryNode;
use contracts::domain::a003_service::{Service, ServiceDto, ServiceId};

/// List services, optionally narrowed to a service category
pub async fn list(category_id: Option<&str>) -> anyhow::Result<Vec<Service>> {
    let services = repository::list_all().await?;
    Ok(match category_id {
        Some(category_id) => services
            .into_iter()
            .filter(|s| s.category_id == category_id)
            .collect(),
        None => services,
    })
}

pub async fn get_by_id(id: ServiceId) -> anyhow::Result<Option<Service>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn create(dto: ServiceDto) -> anyhow::Result<ServiceId> {
    let mut aggregate = Service::new_for_insert(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn list_categories() -> anyhow::Result<Vec<CategoryNode>> {
    Ok(repository::list_categories().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn category_filter_narrows_the_list() {
        create(ServiceDto {
            name: "Test Facial".to_string(),
            category_id: "test-spa".to_string(),
            description: "Relaxing facial".to_string(),
            duration_minutes: 30,
            base_price: 9_000,
            ..Default::default()
        })
        .await
        .unwrap();

        let scoped = list(Some("test-spa")).await.unwrap();
        assert!(!scoped.is_empty());
        assert!(scoped.iter().all(|s| s.category_id == "test-spa"));

        let all = list(None).await.unwrap();
        assert!(all.len() >= scoped.len());
    }
}
