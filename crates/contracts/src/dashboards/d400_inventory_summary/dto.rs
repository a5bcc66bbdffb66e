use serde::{Deserialize, Serialize};

/// Headline figures of the inventory dashboard.
///
/// `change` fields are period-over-period percentages supplied by the data
/// source together with the figure itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "bestSellingProduct")]
    pub best_selling_product: BestSellingProduct,
    #[serde(rename = "inventoryAmount")]
    pub inventory_amount: InventoryAmount,
    #[serde(rename = "mostPurchasedDay")]
    pub most_purchased_day: MostPurchasedDay,
    #[serde(rename = "productsOutOfStock")]
    pub products_out_of_stock: OutOfStockHighlight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestSellingProduct {
    pub name: String,
    #[serde(rename = "unitsSold")]
    pub units_sold: u64,
    pub change: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryAmount {
    pub count: u64,
    pub change: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MostPurchasedDay {
    /// Weekday label, e.g. "Friday"
    pub day: String,
    #[serde(rename = "unitsSold")]
    pub units_sold: u64,
    pub change: i32,
}

/// Out-of-stock product highlighted on the dashboard card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutOfStockHighlight {
    pub name: String,
    pub stock: u32,
    pub change: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let stats = DashboardStats {
            best_selling_product: BestSellingProduct {
                name: "Sterling Bottle".to_string(),
                units_sold: 300,
                change: 36,
            },
            inventory_amount: InventoryAmount {
                count: 500,
                change: 36,
            },
            most_purchased_day: MostPurchasedDay {
                day: "Friday".to_string(),
                units_sold: 300,
                change: 36,
            },
            products_out_of_stock: OutOfStockHighlight {
                name: "Toothpaste".to_string(),
                stock: 0,
                change: 36,
            },
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["bestSellingProduct"]["unitsSold"], 300);
        assert_eq!(json["inventoryAmount"]["count"], 500);
        assert_eq!(json["mostPurchasedDay"]["day"], "Friday");
        assert_eq!(json["productsOutOfStock"]["stock"], 0);
    }
}
