//! Service dashboard summary (d401).

pub mod dto;

pub use dto::{MostBookedDay, ServiceCount, ServiceStats, TotalOrders};
