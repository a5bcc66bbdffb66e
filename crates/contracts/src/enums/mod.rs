pub mod appointment_status;
pub mod sort_option;
pub mod stock_status;

pub use appointment_status::AppointmentStatus;
pub use sort_option::{SortDirection, SortKey, SortOption};
pub use stock_status::StockStatus;
