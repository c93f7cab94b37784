pub mod analytics;
pub mod config;
pub mod error;
pub mod import;
pub mod source;
pub mod telemetry;
