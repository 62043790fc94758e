use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    MissingVar(&'static str),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),
}

/// Errors returned by the storage facade.
///
/// `NotFound` is the only condition the facade recognises; provider failures
/// keep the SDK error as their source so callers can inspect it.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Object not found: s3://{bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("Head object failed for s3://{bucket}/{key}: {source}")]
    HeadObject {
        bucket: String,
        key: String,
        #[source]
        source: SdkError<HeadObjectError>,
    },

    #[error("Failed to upload to s3://{bucket}/{key}: {source}")]
    PutObject {
        bucket: String,
        key: String,
        #[source]
        source: SdkError<PutObjectError>,
    },
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
