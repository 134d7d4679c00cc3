//! Server binary: probe the database, sync the schema, then listen.

use rest_api::{authenticate, build_router, connect_lazy, sync_schema, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rest_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect_lazy(&config)?;

    match authenticate(&pool).await {
        Ok(()) => tracing::info!("Connection has been established successfully."),
        Err(e) => tracing::error!(error = %e, "Unable to connect to the database"),
    }

    if let Err(e) = sync_schema(&pool, config.sync_mode).await {
        tracing::error!(error = %e, "schema synchronization failed");
        return Err(e.into());
    }

    let state = AppState::new(pool, config.environment);
    let app = build_router(state, config.body_limit);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        environment = ?config.environment,
        "server is listening on port {}",
        listener.local_addr()?.port()
    );
    axum::serve(listener, app).await?;
    Ok(())
}
