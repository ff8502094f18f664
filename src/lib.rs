//! FluxNext API
//!
//! HTTP backend of the FluxNext currency exchange. A single application is
//! assembled from two route groups, `exchange` and `blockchain`, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
