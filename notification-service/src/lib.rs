pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};

/// Display name reported by `/health`.
pub const SERVICE_NAME: &str = "Notification Service";
