// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `body` under `key` and returns its public URL.
    async fn put(&self, key: &str, content_type: &str, body: Bytes) -> ApplicationResult<String>;
}
