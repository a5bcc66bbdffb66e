pub mod aggregate;

pub use aggregate::{Service, ServiceDto, ServiceId};
