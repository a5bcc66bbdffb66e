use super::repository;
use contracts::domain::a001_product::{Product, ProductDto, ProductId};
use contracts::domain::common::AggregateId;
use contracts::projections::p900_catalog_list::{self, CatalogListParams};

/// Derived catalog view for the given scope/search/filter/sort parameters
pub async fn list(params: &CatalogListParams) -> anyhow::Result<Vec<Product>> {
    let items = repository::list_all().await?;
    Ok(p900_catalog_list::derive(&items, params))
}

pub async fn get_by_id(id: ProductId) -> anyhow::Result<Option<Product>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn create(dto: ProductDto) -> anyhow::Result<ProductId> {
    let mut aggregate = Product::new_for_insert(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: ProductDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| ProductId::from_string(s).ok())
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

/// Replace the stock counter, e.g. after a manual recount
pub async fn set_stock(id: ProductId, stock_quantity: u32) -> anyhow::Result<Product> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.stock_quantity = stock_quantity;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: ProductId) -> anyhow::Result<bool> {
    Ok(repository::soft_delete(id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::SortOption;

    fn dto(name: &str) -> ProductDto {
        ProductDto {
            name: name.to_string(),
            sku: "TST-1".to_string(),
            category_id: "test-products".to_string(),
            base_price: 10_000,
            stock_quantity: 5,
            reorder_level: 1,
            unit: "piece".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_fetch_roundtrip() {
        let id = create(dto("Service Test Serum")).await.unwrap();
        let fetched = get_by_id(id).await.unwrap().expect("created product");
        assert_eq!(fetched.name, "Service Test Serum");
        assert!(fetched.is_active);
    }

    #[tokio::test]
    async fn create_rejects_invalid_dto() {
        let mut bad = dto("");
        bad.sku = String::new();
        assert!(create(bad).await.is_err());
    }

    #[tokio::test]
    async fn list_scopes_to_category() {
        create(dto("Scoped Product A")).await.unwrap();
        create(dto("Scoped Product B")).await.unwrap();

        let params = CatalogListParams {
            category_id: Some("test-products".to_string()),
            sort: SortOption::NameAsc,
            ..Default::default()
        };
        let result = list(&params).await.unwrap();
        assert!(result.len() >= 2);
        assert!(result.iter().all(|p| p.category_id == "test-products"));
    }

    #[tokio::test]
    async fn set_stock_bumps_version() {
        let id = create(dto("Stock Counter Test")).await.unwrap();
        let before = get_by_id(id).await.unwrap().unwrap();
        let updated = set_stock(id, 42).await.unwrap();
        assert_eq!(updated.stock_quantity, 42);
        assert!(updated.metadata.version > before.metadata.version);
    }

    #[tokio::test]
    async fn deleted_products_disappear_from_lists() {
        let id = create(dto("Soon Deleted")).await.unwrap();
        assert!(delete(id).await.unwrap());
        assert!(get_by_id(id).await.unwrap().is_none());
        // Second delete is a no-op
        assert!(!delete(id).await.unwrap());
    }
}
