//! Application Layer
//!
//! Exchange and blockchain use cases. Each one talks to a domain gateway,
//! never to a concrete repository.

pub mod use_cases;
