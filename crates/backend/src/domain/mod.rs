pub mod a001_product;
pub mod a002_category;
pub mod a003_service;
pub mod a004_appointment;
