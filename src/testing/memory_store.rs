use crate::errors::{Result, StorageError};
use crate::interfaces::ObjectStore;
use crate::storage::{JSON_CONTENT_TYPE, ObjectHead};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory bucket with the same not-found and overwrite behaviour as S3
#[derive(Debug, Default)]
pub struct MemoryStore {
    bucket_name: String,
    objects: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            objects: Mutex::new(HashMap::new()),
        }
    }

    /// Current body stored at `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still usable for test assertions
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.lock().contains_key(key))
    }

    async fn head(&self, key: &str) -> Result<ObjectHead> {
        match self.lock().get(key) {
            Some(body) => Ok(ObjectHead {
                content_type: Some(JSON_CONTENT_TYPE.to_string()),
                content_length: Some(body.len() as i64),
                ..Default::default()
            }),
            None => Err(StorageError::NotFound {
                bucket: self.bucket_name.clone(),
                key: key.to_string(),
            }),
        }
    }

    async fn upload(&self, key: &str, body: String) -> Result<()> {
        self.lock().insert(key.to_string(), body);
        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket_name, key)
    }
}
