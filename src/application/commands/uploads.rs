// src/application/commands/uploads.rs
use std::{path::Path, sync::Arc};

use bytes::Bytes;
use uuid::Uuid;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{storage::ObjectStorage, time::Clock},
};

/// A file received from a multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

pub struct UploadService {
    storage: Arc<dyn ObjectStorage>,
    clock: Arc<dyn Clock>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Stores an image and returns the public URL it is served from.
    pub async fn upload_image(&self, upload: ImageUpload) -> ApplicationResult<String> {
        ensure_image(&upload.content_type)?;
        if upload.bytes.is_empty() {
            return Err(ApplicationError::validation("uploaded file is empty"));
        }

        let key = self.object_key(&upload.filename);
        let url = self
            .storage
            .put(&key, &upload.content_type, upload.bytes)
            .await?;
        tracing::info!(%key, "stored uploaded image");
        Ok(url)
    }

    fn object_key(&self, filename: &str) -> String {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        format!(
            "{}-{}{}",
            self.clock.now().timestamp(),
            Uuid::new_v4(),
            ext
        )
    }
}

fn ensure_image(content_type: &str) -> ApplicationResult<()> {
    if content_type.trim().to_ascii_lowercase().starts_with("image/") {
        Ok(())
    } else {
        Err(ApplicationError::validation("only image files are allowed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Mutex;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_opt(1_700_000_000, 0).unwrap()
        }
    }

    #[derive(Default)]
    struct RecordingStorage {
        keys: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ObjectStorage for RecordingStorage {
        async fn put(&self, key: &str, content_type: &str, _body: Bytes) -> ApplicationResult<String> {
            self.keys
                .lock()
                .unwrap()
                .push((key.to_string(), content_type.to_string()));
            Ok(format!("https://cdn.example/{key}"))
        }
    }

    fn upload(filename: &str, content_type: &str) -> ImageUpload {
        ImageUpload {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: Bytes::from_static(b"\x89PNG"),
        }
    }

    #[tokio::test]
    async fn stores_images_under_timestamped_key() {
        let storage = Arc::new(RecordingStorage::default());
        let service = UploadService::new(storage.clone(), Arc::new(FixedClock));

        let url = service
            .upload_image(upload("photo.png", "image/png"))
            .await
            .unwrap();

        let keys = storage.keys.lock().unwrap();
        let (key, content_type) = &keys[0];
        assert!(key.starts_with("1700000000-"));
        assert!(key.ends_with(".png"));
        assert_eq!(content_type, "image/png");
        assert_eq!(url, format!("https://cdn.example/{key}"));
    }

    #[tokio::test]
    async fn rejects_non_images() {
        let storage = Arc::new(RecordingStorage::default());
        let service = UploadService::new(storage.clone(), Arc::new(FixedClock));

        let err = service
            .upload_image(upload("notes.pdf", "application/pdf"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Validation(_)));
        assert!(storage.keys.lock().unwrap().is_empty());
    }
}
