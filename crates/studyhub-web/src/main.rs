//! StudyHub Web Server
//!
//! Run with: cargo run -p studyhub-web

use studyhub_config::Config;
use tracing::{info, warn};
use studyhub_web::telemetry::Logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let logging = Logging::init()?;
    let config = Config::load()?;
    if config.server.debug {
        logging.enable_debug()?;
    }

    info!("Starting StudyHub Web Server v{}", env!("CARGO_PKG_VERSION"));
    if config.server.debug {
        info!("Debug mode: templates reload on every request");
    }
    if !config.paths.templates.is_dir() {
        warn!("Templates directory {} does not exist", config.paths.templates.display());
    }
    info!("{} tests registered: {}", config.tests.len(),
        config.tests.ids().collect::<Vec<_>>().join(", "));

    let state = studyhub_web::state::AppState::from_config(&config);
    let app = studyhub_web::router::build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
