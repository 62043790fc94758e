pub mod client;
pub mod file_ops;
pub mod models;
pub mod upload;

// Re-export types for convenient access from other modules
pub use models::{JSON_CONTENT_TYPE, ObjectHead, StorageClient};
