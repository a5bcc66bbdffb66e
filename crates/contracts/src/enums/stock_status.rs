use serde::{Deserialize, Serialize};

/// Upper bound of the "low stock" bucket. Units above this count as in
/// stock. Fixed product rule, not configurable.
pub const LOW_STOCK_MAX: u32 = 50;

/// Coarse stock-level classification used for filtering.
///
/// The buckets are mutually exclusive: a quantity belongs to exactly one of
/// `in-stock` (> 50), `low-stock` (1..=50) or `out-of-stock` (0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StockStatus {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "in-stock")]
    InStock,
    #[serde(rename = "low-stock")]
    LowStock,
    #[serde(rename = "out-of-stock")]
    OutOfStock,
}

impl StockStatus {
    /// Wire code of the bucket
    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::All => "all",
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::All => "All Products",
            StockStatus::InStock => "In Stock (>50 units)",
            StockStatus::LowStock => "Low Stock (1-50 units)",
            StockStatus::OutOfStock => "Out of Stock (0 units)",
        }
    }

    pub fn all_variants() -> Vec<StockStatus> {
        vec![
            StockStatus::All,
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(StockStatus::All),
            "in-stock" => Some(StockStatus::InStock),
            "low-stock" => Some(StockStatus::LowStock),
            "out-of-stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    /// Whether a stock quantity falls into this bucket.
    ///
    /// `All` accepts every quantity.
    pub fn matches(&self, stock_quantity: u32) -> bool {
        match self {
            StockStatus::All => true,
            StockStatus::InStock => stock_quantity > LOW_STOCK_MAX,
            StockStatus::LowStock => stock_quantity > 0 && stock_quantity <= LOW_STOCK_MAX,
            StockStatus::OutOfStock => stock_quantity == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_are_mutually_exclusive() {
        for qty in [0u32, 1, 49, 50, 51, 300] {
            let hits = [
                StockStatus::InStock,
                StockStatus::LowStock,
                StockStatus::OutOfStock,
            ]
            .iter()
            .filter(|b| b.matches(qty))
            .count();
            assert_eq!(hits, 1, "quantity {} must land in exactly one bucket", qty);
            assert!(StockStatus::All.matches(qty));
        }
    }

    #[test]
    fn boundary_values() {
        assert!(StockStatus::LowStock.matches(50));
        assert!(!StockStatus::InStock.matches(50));
        assert!(StockStatus::InStock.matches(51));
        assert!(StockStatus::OutOfStock.matches(0));
        assert!(!StockStatus::LowStock.matches(0));
    }

    #[test]
    fn codes_round_trip() {
        for status in StockStatus::all_variants() {
            assert_eq!(StockStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(StockStatus::from_code("backordered"), None);
    }
}
