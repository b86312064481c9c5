use catalog_service::{app, config::Config, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Aggregating {} subjects from {} (limit {})",
        config.subjects.len(),
        config.catalog_base_url,
        config.subject_limit
    );

    let state = AppState::from_config(&config);
    let addr = format!("0.0.0.0:{}", config.port);

    info!("Catalog service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
