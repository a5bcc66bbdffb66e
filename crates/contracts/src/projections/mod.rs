//! Derived, read-only views over the domain data.
//!
//! Projections are pure functions: they never mutate their inputs and
//! allocate fresh output on every call, so callers may re-run them on every
//! state change.

pub mod p900_catalog_list;
pub mod p901_appointment_list;
pub mod p902_appointment_calendar;
