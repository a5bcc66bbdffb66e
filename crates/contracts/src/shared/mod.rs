pub mod date_utils;
pub mod logger;
pub mod search;
