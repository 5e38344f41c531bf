/// Configuration module - Load and validate installer configuration
pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{Config, ProbeConfig};
