use ninebot_helper::{router, AppConfig, AppState};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    if config.accounts.is_empty() {
        warn!("no accounts configured; /api/sign will report a configuration error");
    } else {
        info!("resolved {} account(s)", config.accounts.len());
    }
    if config.bark.is_none() {
        info!("bark relay not configured; notifications disabled");
    }

    let port = config.port;
    let state = AppState::new(config)?;
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
