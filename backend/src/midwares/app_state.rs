use std::{fmt, net::SocketAddr};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{error, info};

use crate::catalog::models::{CatalogPayload, Category, PriceItem};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7575";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub enum AppError {
  MethodNotAllowed,
  ConfigError(String),
  DatabaseError(String),
  InternalError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MethodNotAllowed => write!(f, "Method not allowed"),
      Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
      Self::DatabaseError(msg) => write!(f, "Database error: {}", msg),
      Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> axum::response::Response {
    let (status, message) = match self {
      Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string()),
      // details stay in the log, clients get a generic message
      other => {
        error!("request failed: {}", other);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
      }
    };

    let body = Json(json!({"error": message, "code": status.as_u16()}));

    (status, body).into_response()
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub database_url: String,
  pub bind_addr: SocketAddr,
}

impl AppConfig {
  pub fn from_env() -> Result<Self, AppError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
    let database_url = lookup("DATABASE_URL")
      .filter(|url| !url.trim().is_empty())
      .ok_or(AppError::ConfigError("DATABASE_URL must be set".to_string()))?;

    let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let bind_addr = bind_addr
      .parse::<SocketAddr>()
      .map_err(|e| AppError::ConfigError(format!("invalid BIND_ADDR {:?}: {}", bind_addr, e)))?;

    Ok(Self { database_url, bind_addr })
  }
}

#[derive(Clone)]
pub struct PostgresDBPool {
  pool: PgPool
}

impl PostgresDBPool {
  pub async fn new(db_url: &str) -> Result<Self, AppError> {
    info!("Postgres db pool initializing..");

    let pool = PgPoolOptions::new()
      .max_connections(8)
      .connect(db_url)
      .await
      .map_err(|e| AppError::DatabaseError(format!("Postgres connection error: {}", e)))?;

    info!("created db pool");
    Self::init_tables(&pool).await?;

    Ok(Self { pool })
  }

  async fn init_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::raw_sql(
      "
      CREATE TABLE IF NOT EXISTS categories (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        icon TEXT NOT NULL DEFAULT 'Package',
        description TEXT NOT NULL DEFAULT '',
        sort_order INT NOT NULL DEFAULT 0,
        is_active BOOLEAN NOT NULL DEFAULT true
      );
      CREATE TABLE IF NOT EXISTS price_list (
        id SERIAL PRIMARY KEY,
        category_id INT REFERENCES categories(id) ON DELETE SET NULL,
        name TEXT NOT NULL,
        specs TEXT NOT NULL DEFAULT '',
        price NUMERIC(12, 2) NOT NULL CHECK (price >= 0),
        unit TEXT NOT NULL DEFAULT 'т',
        sort_order INT NOT NULL DEFAULT 0,
        is_active BOOLEAN NOT NULL DEFAULT true
      );
      "
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create catalog tables: {}", e)))?;

    Ok(())
  }

  /// Active categories and price rows, each ordered by `sort_order`.
  pub async fn fetch_catalog(&self) -> Result<CatalogPayload, AppError> {
    let categories = sqlx::query_as::<_, Category>(
      "
      SELECT id, name, icon, description, sort_order
      FROM categories
      WHERE is_active = true
      ORDER BY sort_order, id
      "
    )
    .fetch_all(&self.pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("categories query failed: {}", e)))?;

    let price_list = sqlx::query_as::<_, PriceItem>(
      "
      SELECT id, category_id, name, specs, price, unit, sort_order
      FROM price_list
      WHERE is_active = true
      ORDER BY sort_order, id
      "
    )
    .fetch_all(&self.pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("price list query failed: {}", e)))?;

    Ok(CatalogPayload { categories, price_list })
  }
}
