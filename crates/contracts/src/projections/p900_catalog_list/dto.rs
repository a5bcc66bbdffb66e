use crate::enums::{SortOption, StockStatus};
use serde::{Deserialize, Serialize};

/// Attribute filters of the catalog list, as set in the filter dialog.
///
/// Price and stock bounds are inclusive; `stock_status` selects one of the
/// fixed mutually exclusive buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(rename = "minPrice")]
    pub min_price: Option<i64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<i64>,
    #[serde(rename = "minStock")]
    pub min_stock: Option<u32>,
    #[serde(rename = "stockStatus", default)]
    pub stock_status: StockStatus,
}

/// Full parameter set of one catalog list derivation.
///
/// Rebuilt by the caller on every render pass; the engine holds no state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogListParams {
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: FilterSpec,
    #[serde(default)]
    pub sort: SortOption,
}
