pub mod keys;
pub mod providers;
pub mod storage;

pub use keys::storage_key;
pub use providers::{BedrockTextGenerator, GeneratorError, TextGenerator};
pub use storage::{BlobStore, MemoryBlobStore, S3BlobStore};
