//! Inventory dashboard summary (d400).

pub mod dto;

pub use dto::{
    BestSellingProduct, DashboardStats, InventoryAmount, MostPurchasedDay, OutOfStockHighlight,
};
