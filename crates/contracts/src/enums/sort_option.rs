use serde::{Deserialize, Serialize};

/// Attribute a catalog list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Price,
    Stock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One of the six enumerated sort choices of the catalog list
/// (`{name, price, stock} × {asc, desc}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "stock-asc")]
    StockAsc,
    #[serde(rename = "stock-desc")]
    StockDesc,
}

impl SortOption {
    pub fn code(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::StockAsc => "stock-asc",
            SortOption::StockDesc => "stock-desc",
        }
    }

    /// Menu label as shown in the sort dropdown
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::NameDesc => "Name (Z-A)",
            SortOption::PriceAsc => "Price (Low to High)",
            SortOption::PriceDesc => "Price (High to Low)",
            SortOption::StockAsc => "Stock (Low to High)",
            SortOption::StockDesc => "Stock (High to Low)",
        }
    }

    pub fn all_variants() -> Vec<SortOption> {
        vec![
            SortOption::NameAsc,
            SortOption::NameDesc,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
            SortOption::StockAsc,
            SortOption::StockDesc,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "name-asc" => Some(SortOption::NameAsc),
            "name-desc" => Some(SortOption::NameDesc),
            "price-asc" => Some(SortOption::PriceAsc),
            "price-desc" => Some(SortOption::PriceDesc),
            "stock-asc" => Some(SortOption::StockAsc),
            "stock-desc" => Some(SortOption::StockDesc),
            _ => None,
        }
    }

    pub fn key(&self) -> SortKey {
        match self {
            SortOption::NameAsc | SortOption::NameDesc => SortKey::Name,
            SortOption::PriceAsc | SortOption::PriceDesc => SortKey::Price,
            SortOption::StockAsc | SortOption::StockDesc => SortKey::Stock,
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortOption::NameAsc | SortOption::PriceAsc | SortOption::StockAsc => SortDirection::Asc,
            SortOption::NameDesc | SortOption::PriceDesc | SortOption::StockDesc => {
                SortDirection::Desc
            }
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction() == SortDirection::Asc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for option in SortOption::all_variants() {
            assert_eq!(SortOption::from_code(option.code()), Some(option));
        }
        assert_eq!(SortOption::from_code("sku-asc"), None);
    }

    #[test]
    fn key_and_direction_split() {
        assert_eq!(SortOption::PriceDesc.key(), SortKey::Price);
        assert!(!SortOption::PriceDesc.is_ascending());
        assert!(SortOption::NameAsc.is_ascending());
    }
}
