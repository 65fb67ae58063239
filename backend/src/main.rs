mod catalog;
mod midwares;
mod route_handlers;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use midwares::app_state::{AppConfig, AppError, PostgresDBPool};
use route_handlers::catalog::catalog_router;

const DEFAULT_LOG_FILTER: &str = "catalog_backend=debug,tower_http=debug";

#[tokio::main]
async fn main() {
  // a missing .env is fine, everything can come from the environment
  let _ = dotenvy::dotenv();

  tracing_subscriber::registry()
    .with(EnvFilter::new(
      std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    ))
    .with(tracing_subscriber::fmt::layer())
    .init();

  if let Err(e) = run().await {
    error!("catalog service stopped: {}", e);
    std::process::exit(1);
  }
}

async fn run() -> Result<(), AppError> {
  let config = AppConfig::from_env()?;

  let postgres = PostgresDBPool::new(&config.database_url).await?;

  let app = catalog_router(postgres).layer(TraceLayer::new_for_http());

  let listener = TcpListener::bind(config.bind_addr)
    .await
    .map_err(|e| AppError::InternalError(format!("failed to bind {}: {}", config.bind_addr, e)))?;

  info!("catalog service listening on {}", config.bind_addr);

  axum::serve(listener, app)
    .await
    .map_err(|e| AppError::InternalError(format!("server error: {}", e)))
}
