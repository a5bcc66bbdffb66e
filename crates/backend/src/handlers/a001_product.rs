use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a001_product;
use contracts::domain::a001_product::{Product, ProductDto, ProductId};
use contracts::domain::common::AggregateId;
use contracts::enums::{SortOption, StockStatus};
use contracts::projections::p900_catalog_list::{CatalogListParams, FilterSpec};

/// Flat query-string form of the catalog list parameters
#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub search: String,
    #[serde(rename = "minPrice")]
    pub min_price: Option<i64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<i64>,
    #[serde(rename = "minStock")]
    pub min_stock: Option<u32>,
    #[serde(rename = "stockStatus", default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub sort: SortOption,
}

impl From<ProductListQuery> for CatalogListParams {
    fn from(q: ProductListQuery) -> Self {
        CatalogListParams {
            category_id: q.category_id,
            subcategory: q.subcategory,
            search: q.search,
            filters: FilterSpec {
                min_price: q.min_price,
                max_price: q.max_price,
                min_stock: q.min_stock,
                stock_status: q.stock_status,
            },
            sort: q.sort,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StockUpdateRequest {
    #[serde(rename = "stockQuantity")]
    pub stock_quantity: u32,
}

/// GET /api/inventory/products
pub async fn list(
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>, axum::http::StatusCode> {
    let params: CatalogListParams = query.into();
    match a001_product::service::list(&params).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list products: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/inventory/products/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, axum::http::StatusCode> {
    let id = match ProductId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_product::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/inventory/products
pub async fn upsert(
    Json(dto): Json<ProductDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if let Some(id) = dto.id.clone() {
        a001_product::service::update(dto).await.map(|_| id)
    } else {
        a001_product::service::create(dto)
            .await
            .map(|id| id.as_string())
    };

    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => {
            tracing::error!("Failed to upsert product: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PATCH /api/inventory/products/:id/stock
pub async fn set_stock(
    Path(id): Path<String>,
    Json(req): Json<StockUpdateRequest>,
) -> Result<Json<Product>, axum::http::StatusCode> {
    let id = match ProductId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_product::service::set_stock(id, req.stock_quantity).await {
        Ok(product) => Ok(Json(product)),
        Err(e) => {
            tracing::error!("Failed to update stock: {:?}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/inventory/products/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let id = match ProductId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_product::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
