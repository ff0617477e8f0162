//! service-core: Shared infrastructure for the flower shop microservices.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod shutdown;
pub mod store;
pub mod utils;

