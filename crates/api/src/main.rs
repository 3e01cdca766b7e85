mod config;
mod handlers;
mod storage;

use std::sync::Arc;

use lambda_http::{run, service_fn, Error, Request};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users_core::storage::UserRepository;

use crate::config::{Config, LogFormat};
use crate::handlers::function_handler;
use crate::storage::DynamoDbRepository;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();

    init_tracing(config.log_format);

    let dynamodb = DynamoDbRepository::from_config(&config).await;

    tracing::info!(
        table = %dynamodb.table_name(),
        target = %config.target_display(),
        "Starting users API"
    );

    // Built once per cold start and shared by every invocation.
    let repo: Arc<dyn UserRepository> = Arc::new(dynamodb);

    run(service_fn(move |event: Request| {
        let repo = Arc::clone(&repo);
        async move { function_handler(repo.as_ref(), event).await }
    }))
    .await
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let (json, text) = match format {
        LogFormat::Json => (
            Some(tracing_subscriber::fmt::layer().json().without_time()),
            None,
        ),
        LogFormat::Text => (None, Some(tracing_subscriber::fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_api=info".into()),
        )
        .with(json)
        .with(text)
        .init();
}
