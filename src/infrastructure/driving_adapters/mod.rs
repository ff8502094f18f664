//! Driving Adapters
//!
//! The REST API: route groups, DTOs, middleware and the application assembler.

pub mod api_rest;
