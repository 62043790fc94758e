//! Minimal S3 facade for JSON documents: existence checks and uploads
//! against a single bucket.

pub mod app;
pub mod args;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod storage;
pub mod testing;
pub mod utils;

pub use app::run_app;
pub use args::Args;
pub use config::StorageConfig;
pub use errors::{AppError, ConfigError, StorageError};
pub use interfaces::ObjectStore;
pub use storage::StorageClient;
