use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata, Origin};
use crate::shared::search::Searchable;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Sellable catalog item with pricing and stock attributes.
///
/// Prices are integer amounts in the smallest currency unit; stock values are
/// unsigned, so the "non-negative" invariants hold by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    pub description: Option<String>,

    pub sku: String,

    #[serde(rename = "categoryId")]
    pub category_id: String,

    /// Scoping within the category; only meaningful together with `category_id`
    pub subcategory: Option<String>,

    #[serde(rename = "brandId")]
    pub brand_id: Option<String>,

    #[serde(rename = "basePrice")]
    pub base_price: i64,

    #[serde(rename = "costPrice")]
    pub cost_price: Option<i64>,

    #[serde(rename = "stockQuantity")]
    pub stock_quantity: u32,

    #[serde(rename = "reorderLevel")]
    pub reorder_level: u32,

    pub unit: String,

    pub weight: Option<f64>,

    #[serde(rename = "weightUnit")]
    pub weight_unit: Option<String>,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    pub metadata: EntityMetadata,
}

impl Product {
    pub fn new_for_insert(dto: &ProductDto) -> Self {
        Self::new_with_id(ProductId::new_v4(), dto)
    }

    pub fn new_with_id(id: ProductId, dto: &ProductDto) -> Self {
        Self {
            id,
            name: dto.name.clone(),
            description: dto.description.clone(),
            sku: dto.sku.clone(),
            category_id: dto.category_id.clone(),
            subcategory: dto.subcategory.clone(),
            brand_id: dto.brand_id.clone(),
            base_price: dto.base_price,
            cost_price: dto.cost_price,
            stock_quantity: dto.stock_quantity,
            reorder_level: dto.reorder_level,
            unit: dto.unit.clone(),
            weight: dto.weight,
            weight_unit: dto.weight_unit.clone(),
            image_url: dto.image_url.clone(),
            is_active: true,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &ProductDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.sku = dto.sku.clone();
        self.category_id = dto.category_id.clone();
        self.subcategory = dto.subcategory.clone();
        self.brand_id = dto.brand_id.clone();
        self.base_price = dto.base_price;
        self.cost_price = dto.cost_price;
        self.stock_quantity = dto.stock_quantity;
        self.reorder_level = dto.reorder_level;
        self.unit = dto.unit.clone();
        self.weight = dto.weight;
        self.weight_unit = dto.weight_unit.clone();
        self.image_url = dto.image_url.clone();
        if let Some(is_active) = dto.is_active {
            self.is_active = is_active;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name cannot be empty".into());
        }
        if self.sku.trim().is_empty() {
            return Err("SKU cannot be empty".into());
        }
        if self.category_id.trim().is_empty() {
            return Err("Category is required".into());
        }
        if let Some(sub) = &self.subcategory {
            if sub.trim().is_empty() {
                return Err("Subcategory, when present, cannot be blank".into());
            }
        }
        if self.base_price < 0 {
            return Err("Base price cannot be negative".into());
        }
        if let Some(cost) = self.cost_price {
            if cost < 0 {
                return Err("Cost price cannot be negative".into());
            }
        }
        Ok(())
    }

    pub fn touch_updated(&mut self) {
        self.metadata.touch();
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
        self.metadata.increment_version();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn origin() -> Origin {
        Origin::Mock
    }
}

impl Searchable for Product {
    /// Case-insensitive substring match on name or SKU
    fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q) || self.sku.to_lowercase().contains(&q)
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub subcategory: Option<String>,
    #[serde(rename = "brandId")]
    pub brand_id: Option<String>,
    #[serde(rename = "basePrice")]
    pub base_price: i64,
    #[serde(rename = "costPrice")]
    pub cost_price: Option<i64>,
    #[serde(rename = "stockQuantity", default)]
    pub stock_quantity: u32,
    #[serde(rename = "reorderLevel", default)]
    pub reorder_level: u32,
    #[serde(default)]
    pub unit: String,
    pub weight: Option<f64>,
    #[serde(rename = "weightUnit")]
    pub weight_unit: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, sku: &str) -> ProductDto {
        ProductDto {
            name: name.to_string(),
            sku: sku.to_string(),
            category_id: "makeup".to_string(),
            base_price: 50_000,
            stock_quantity: 150,
            reorder_level: 30,
            unit: "piece".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn new_product_is_active_and_valid() {
        let product = Product::new_for_insert(&dto("HD Foundation", "34/9492/0"));
        assert!(product.is_active);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name_and_sku() {
        let product = Product::new_for_insert(&dto("  ", "34/9492/0"));
        assert!(product.validate().is_err());

        let product = Product::new_for_insert(&dto("HD Foundation", ""));
        assert!(product.validate().is_err());
    }

    #[test]
    fn search_matches_name_or_sku_case_insensitive() {
        let mut d = dto("Sterling Bottle", "SB-100");
        let by_name = Product::new_for_insert(&d);
        assert!(by_name.matches_query("bottle"));
        assert!(by_name.matches_query("  BOTTLE "));

        d = dto("Lipstick", "glass-bottle-12");
        let by_sku = Product::new_for_insert(&d);
        assert!(by_sku.matches_query("bottle"));

        d = dto("Lipstick", "LP-1");
        let neither = Product::new_for_insert(&d);
        assert!(!neither.matches_query("bottle"));
    }

    #[test]
    fn update_keeps_activity_unless_dto_sets_it() {
        let mut product = Product::new_for_insert(&dto("HD Foundation", "34/9492/0"));
        let mut changed = dto("HD Foundation Pro", "34/9492/1");
        product.update(&changed);
        assert!(product.is_active);
        assert_eq!(product.name, "HD Foundation Pro");

        changed.is_active = Some(false);
        product.update(&changed);
        assert!(!product.is_active);
    }
}
