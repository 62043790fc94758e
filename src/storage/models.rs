use aws_sdk_s3::Client;
use serde::{Deserialize, Serialize};

/// Content type attached to every uploaded object
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Metadata returned by a head-object request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectHead {
    pub content_type: Option<String>,
    pub content_length: Option<i64>,
    pub e_tag: Option<String>,
    pub last_modified: Option<String>,
}

/// Facade over an S3 client bound to a single bucket
#[derive(Debug, Clone)]
pub struct StorageClient {
    pub(crate) bucket_name: String,
    pub(crate) client: Client,
}
