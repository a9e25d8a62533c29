use crate::error::AppError;
use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), AppError>;
}

pub struct S3BlobStore {
    client: S3Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| AppError::StorageError(anyhow::anyhow!("S3 upload failed: {}", e)))?;
        Ok(())
    }
}

/// In-memory store for testing. Records every successful write.
#[derive(Default)]
pub struct MemoryBlobStore {
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
    fail_puts: bool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising the best-effort path.
    pub fn failing() -> Self {
        Self {
            objects: Mutex::new(BTreeMap::new()),
            fail_puts: true,
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .expect("blob store lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .expect("blob store lock poisoned")
            .get(key)
            .cloned()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), AppError> {
        if self.fail_puts {
            return Err(AppError::StorageError(anyhow::anyhow!(
                "Simulated storage failure"
            )));
        }

        self.objects
            .lock()
            .expect("blob store lock poisoned")
            .insert(key.to_string(), data);
        Ok(())
    }
}
