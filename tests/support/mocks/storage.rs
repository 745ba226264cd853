// tests/support/mocks/storage.rs
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use newsroom_core::application::{ApplicationResult, ports::storage::ObjectStorage};

pub const PUBLIC_BASE: &str = "https://media.example";

/// Keeps every stored object in memory.
#[derive(Default)]
pub struct RecordingStorage {
    objects: Mutex<Vec<(String, String, Bytes)>>,
}

impl RecordingStorage {
    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _, _)| key.clone())
            .collect()
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn put(&self, key: &str, content_type: &str, body: Bytes) -> ApplicationResult<String> {
        self.objects
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string(), body));
        Ok(format!("{PUBLIC_BASE}/{key}"))
    }
}
