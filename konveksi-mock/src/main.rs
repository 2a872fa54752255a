use anyhow::Context;
use konveksi_mock::{Config, MockState, build_router, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    logger::init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    if config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set, admin routes are open");
    }

    let state = MockState::new(config.admin_token.clone());
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(addr = %addr, "Konveksi mock backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
