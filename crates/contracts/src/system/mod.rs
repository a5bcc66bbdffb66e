//! System-level contracts shared between the API and its clients.

pub mod auth;
pub mod users;
