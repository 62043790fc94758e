use crate::errors::{Result, StorageError};
use crate::storage::models::{ObjectHead, StorageClient};
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::primitives::DateTimeFormat;
use tracing::debug;

impl StorageClient {
    /// Check whether an object exists at `key`.
    ///
    /// Only a not-found response maps to `false`; any other failure is
    /// returned to the caller.
    pub async fn exists(&self, key: &str) -> Result<bool> {
        match self.head(key).await {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound { .. }) => {
                debug!("{} does not exist", self.object_url(key));
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch object metadata without downloading the body
    pub async fn head(&self, key: &str) -> Result<ObjectHead> {
        debug!(
            "Head object '{}' in bucket '{}'",
            key, self.bucket_name
        );

        let resp = self
            .client
            .head_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await
            .map_err(|e| classify_head_error(e, &self.bucket_name, key))?;

        Ok(ObjectHead {
            content_type: resp.content_type().map(str::to_string),
            content_length: resp.content_length(),
            e_tag: resp.e_tag().map(|etag| etag.replace('"', "")),
            last_modified: resp
                .last_modified()
                .and_then(|ts| ts.fmt(DateTimeFormat::DateTime).ok()),
        })
    }
}

/// A modelled `NotFound` error or a bare 404 status means the object is absent
pub(crate) fn classify_head_error(
    err: SdkError<HeadObjectError>,
    bucket: &str,
    key: &str,
) -> StorageError {
    let not_found = err
        .as_service_error()
        .map(|e| e.is_not_found())
        .unwrap_or(false)
        || err.raw_response().map(|r| r.status().as_u16()) == Some(404);

    if not_found {
        StorageError::NotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    } else {
        StorageError::HeadObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source: err,
        }
    }
}
