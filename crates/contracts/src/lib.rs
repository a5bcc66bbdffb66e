//! Shared contracts for the beauty-business admin system.
//!
//! Pure data structures and derivation logic shared between the API server
//! and its clients: domain aggregates, wire DTOs, and the list/calendar
//! projections the UI renders from. No I/O happens in this crate.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
