// Main entry point for the article generator API server

use anyhow::{Context, Result};
use blog_core::{kernel::ServerDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_core=debug,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting restaurant article generator");

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Configuration loaded:");
    tracing::info!("  APIFY_TOKEN: {}", mask(&config.apify_token));
    tracing::info!("  APIFY_ACTOR_ID: {}", config.apify_actor_id);
    tracing::info!("  OPENAI_API_KEY: {}", mask(&config.openai_api_key));
    tracing::info!("  OPENAI_MODEL: {}", config.openai_model);
    tracing::info!(
        "  ARTICLE_COUNT: {}, ARTICLE_LANGUAGE: {}, MAX_REVIEWS: {}",
        config.article_count,
        config.article_language,
        config.max_reviews
    );

    let deps = ServerDeps::from_config(&config);
    let app = build_app(deps, config.app_options());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Show only the first 4 characters of a secret.
fn mask(secret: &str) -> String {
    let shown: String = secret.chars().take(4).collect();
    let hidden = secret.chars().count().saturating_sub(4);
    format!("{}{} ({} chars)", shown, "*".repeat(hidden), shown.chars().count() + hidden)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
