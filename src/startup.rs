use crate::config::BlogConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{BedrockTextGenerator, BlobStore, S3BlobStore, TextGenerator};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use axum::{
    Router,
    routing::{get, post},
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: BlogConfig,
    pub generator: Arc<dyn TextGenerator>,
    pub store: Arc<dyn BlobStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build with the real AWS collaborators.
    pub async fn build(config: BlogConfig) -> Result<Self, AppError> {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws.region.clone()))
            .timeout_config(
                TimeoutConfig::builder()
                    .connect_timeout(Duration::from_secs(
                        config.generation.connect_timeout_secs,
                    ))
                    .read_timeout(Duration::from_secs(config.generation.read_timeout_secs))
                    .build(),
            )
            .retry_config(
                RetryConfig::standard().with_max_attempts(config.generation.max_attempts),
            )
            .load()
            .await;

        let generator: Arc<dyn TextGenerator> = Arc::new(BedrockTextGenerator::new(
            aws_sdk_bedrockruntime::Client::new(&shared),
            &config.generation,
        ));
        tracing::info!(
            model_id = %config.generation.model_id,
            "Initialized Bedrock text generator"
        );

        let store: Arc<dyn BlobStore> = Arc::new(S3BlobStore::new(
            aws_sdk_s3::Client::new(&shared),
            config.storage.bucket.clone(),
        ));
        tracing::info!(bucket = %config.storage.bucket, "Initialized S3 blob store");

        Self::build_with(config, generator, store).await
    }

    /// Build with injected collaborators; tests pass the mock generator and
    /// the in-memory store here.
    pub async fn build_with(
        config: BlogConfig,
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn BlobStore>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            generator,
            store,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/blogs", post(handlers::generate_blog))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
