use std::{future::Future, time::Duration};
use axum::{
  extract::State,
  http::{header, Method, StatusCode},
  routing::get,
  Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::{
  catalog::models::CatalogPayload,
  midwares::app_state::{AppError, PostgresDBPool},
};

/// Anything that can produce the current catalog.
pub trait CatalogStore: Clone + Send + Sync + 'static {
  fn load_catalog(&self) -> impl Future<Output = Result<CatalogPayload, AppError>> + Send;
}

impl CatalogStore for PostgresDBPool {
  async fn load_catalog(&self) -> Result<CatalogPayload, AppError> {
    self.fetch_catalog().await
  }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
  pub status: String,
  pub version: String,
}

pub async fn catalog_handler<S: CatalogStore>(State(store): State<S>) -> Result<Json<CatalogPayload>, AppError> {
  let payload = store.load_catalog().await?;
  info!(categories = payload.categories.len(), price_rows = payload.price_list.len(), "catalog served");
  Ok(Json(payload))
}

// OPTIONS is normally answered by the cors layer before it reaches the route
pub async fn preflight_handler() -> StatusCode {
  StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
  AppError::MethodNotAllowed
}

pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse {
    status: "ok".to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
  })
}

pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE])
    .max_age(Duration::from_secs(86_400))
}

pub fn catalog_router<S: CatalogStore>(store: S) -> Router {
  Router::new()
    .route(
      "/catalog",
      get(catalog_handler::<S>)
        .options(preflight_handler)
        .fallback(method_not_allowed),
    )
    .route("/health", get(health_check))
    .layer(cors_layer())
    .with_state(store)
}
