use crate::config::StorageConfig;
use crate::errors::Result;
use crate::storage::models::StorageClient;
use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use tracing::debug;

impl StorageClient {
    /// Create a client for the configured region and bucket.
    ///
    /// The config is validated before anything else happens, so a missing
    /// region or bucket fails without touching the network. Each request is
    /// sent once: the SDK's retry layer is disabled.
    pub async fn new(config: StorageConfig) -> Result<Self> {
        config.validate()?;

        debug!("Creating S3 client with these parameters:");
        debug!("Region: {}", config.region);
        debug!("Bucket: {}", config.bucket_name);
        if let Some(endpoint) = &config.endpoint_url {
            debug!("Endpoint: {}", endpoint);
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled());

        if let Some(keys) = &config.credentials {
            debug!("Key ID: {}", keys.masked_key_id());
            loader = loader.credentials_provider(Credentials::new(
                keys.access_key_id.clone(),
                keys.secret_access_key.clone(),
                None, // No session token
                None, // No expiry
                "StaticCredentials",
            ));
        }

        let sdk_config = loader.load().await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(config.force_path_style);
        if let Some(endpoint) = config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self::from_client(
            Client::from_conf(builder.build()),
            config.bucket_name,
        ))
    }

    /// Create a client from `AWS_REGION` and `S3_BUCKET_NAME`
    pub async fn from_env() -> Result<Self> {
        let config = StorageConfig::from_env()?;
        Self::new(config).await
    }

    /// Wrap an already configured SDK client
    pub fn from_client(client: Client, bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            client,
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Fully qualified location of `key`, e.g. `s3://bucket/key`
    pub fn object_url(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket_name, key)
    }
}
