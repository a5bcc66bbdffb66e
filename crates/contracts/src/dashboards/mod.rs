//! Dashboard contracts: aggregated headline figures of the admin start pages.

pub mod d400_inventory_summary;
pub mod d401_service_summary;
