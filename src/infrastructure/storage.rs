// src/infrastructure/storage.rs
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    Attribute, Attributes, ObjectStore, PutOptions, PutPayload, aws::AmazonS3Builder, path::Path,
};

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::ObjectStorage,
};

/// Connection settings for a Cloudflare R2 bucket.
#[derive(Debug, Clone)]
pub struct R2Config {
    pub account_id: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub public_url: String,
}

impl R2Config {
    pub fn endpoint(&self) -> String {
        format!("https://{}.r2.cloudflarestorage.com", self.account_id)
    }
}

/// S3-compatible object storage. Objects are served from `public_url`.
#[derive(Clone)]
pub struct R2ObjectStorage {
    store: Arc<dyn ObjectStore>,
    public_url: String,
}

impl R2ObjectStorage {
    pub fn from_config(config: &R2Config) -> ApplicationResult<Self> {
        let store = AmazonS3Builder::new()
            .with_endpoint(config.endpoint())
            .with_region("auto")
            .with_bucket_name(&config.bucket)
            .with_access_key_id(&config.access_key_id)
            .with_secret_access_key(&config.secret_access_key)
            .build()
            .map_err(|err| ApplicationError::infrastructure(format!("object store: {err}")))?;

        Ok(Self::new(Arc::new(store), &config.public_url))
    }

    pub fn new(store: Arc<dyn ObjectStore>, public_url: &str) -> Self {
        Self {
            store,
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    fn public_url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }
}

#[async_trait]
impl ObjectStorage for R2ObjectStorage {
    async fn put(&self, key: &str, content_type: &str, body: Bytes) -> ApplicationResult<String> {
        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let options = PutOptions {
            attributes,
            ..PutOptions::default()
        };

        self.store
            .put_opts(&Path::from(key), PutPayload::from(body), options)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("upload failed: {err}")))?;

        Ok(self.public_url_for(key))
    }
}

/// Stand-in used when no bucket is configured. Every upload fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStorage;

#[async_trait]
impl ObjectStorage for DisabledStorage {
    async fn put(&self, _key: &str, _content_type: &str, _body: Bytes) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure("object storage is not configured"))
    }
}
