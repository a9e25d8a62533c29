use blog_service::config::BlogConfig;
use blog_service::services::providers::mock::{MockOutcome, MockTextGenerator};
use blog_service::services::storage::MemoryBlobStore;
use blog_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub generator: Arc<MockTextGenerator>,
    pub store: Arc<MemoryBlobStore>,
}

impl TestApp {
    pub async fn spawn(outcome: MockOutcome) -> Self {
        Self::spawn_with_store(outcome, Arc::new(MemoryBlobStore::new())).await
    }

    pub async fn spawn_with_store(outcome: MockOutcome, store: Arc<MemoryBlobStore>) -> Self {
        let mut config = BlogConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing

        let generator = Arc::new(MockTextGenerator::new(outcome));

        let app = Application::build_with(config, generator.clone(), store.clone())
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            generator,
            store,
        }
    }
}
