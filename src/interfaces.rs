use crate::errors::Result;
use crate::storage::{ObjectHead, StorageClient};
use async_trait::async_trait;
use mockall::automock;

/// Interface over object storage to facilitate testing
#[automock]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn exists(&self, key: &str) -> Result<bool>;
    async fn head(&self, key: &str) -> Result<ObjectHead>;
    async fn upload(&self, key: &str, body: String) -> Result<()>;
    fn object_url(&self, key: &str) -> String;
}

#[async_trait]
impl ObjectStore for StorageClient {
    async fn exists(&self, key: &str) -> Result<bool> {
        StorageClient::exists(self, key).await
    }

    async fn head(&self, key: &str) -> Result<ObjectHead> {
        StorageClient::head(self, key).await
    }

    async fn upload(&self, key: &str, body: String) -> Result<()> {
        StorageClient::upload(self, key, body).await
    }

    fn object_url(&self, key: &str) -> String {
        StorageClient::object_url(self, key)
    }
}
