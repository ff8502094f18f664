//! Infrastructure Layer
//!
//! Driving adapters (the HTTP surface) and driven adapters (configuration and
//! the in-memory reference data repositories).

pub mod driven_adapters;
pub mod driving_adapters;
