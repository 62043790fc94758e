use crate::errors::{Result, StorageError};
use crate::storage::models::{JSON_CONTENT_TYPE, StorageClient};
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, info};

impl StorageClient {
    /// Upload `body` to `key` as `application/json`.
    ///
    /// An existing object at `key` is replaced. The body is sent as given;
    /// callers are responsible for it being JSON.
    pub async fn upload(&self, key: &str, body: impl Into<String>) -> Result<()> {
        let body: String = body.into();
        debug!(
            "Uploading {} bytes to '{}' in bucket '{}'",
            body.len(),
            key,
            self.bucket_name
        );

        let response = self
            .client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(ByteStream::from(body.into_bytes()))
            .content_type(JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|source| StorageError::PutObject {
                bucket: self.bucket_name.clone(),
                key: key.to_string(),
                source,
            })?;

        debug!("ETag: {:?}", response.e_tag());
        info!("Successfully uploaded to S3: {}", self.object_url(key));
        Ok(())
    }
}
