use std::fmt;
use serde::{Deserialize, Deserializer};

/* Server Responses */
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Category {
  pub id: i64,
  pub name: String,
  // a missing icon resolves to the fallback glyph
  #[serde(default, deserialize_with = "null_as_default")]
  pub icon: String,
  #[serde(default)]
  pub description: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PriceItem {
  pub id: i64,
  pub name: String,
  #[serde(default)]
  pub specs: String,
  #[serde(default, deserialize_with = "price_text")]
  pub price: String,
  #[serde(default)]
  pub unit: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CatalogResponse {
  #[serde(default, deserialize_with = "null_as_default")]
  pub categories: Vec<Category>,
  #[serde(default, rename = "priceList", deserialize_with = "null_as_default")]
  pub price_list: Vec<PriceItem>,
}

impl CatalogResponse {
  pub fn from_json(body: &str) -> Result<Self, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::DeserializeError(e.to_string()))
  }
}

// `null` is treated the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
  Text(String),
  Number(serde_json::Number),
}

// the service sends prices as decimal strings, but a bare JSON number is accepted as well.
// `null` becomes an empty string so the row survives and renders as unparseable.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<PriceRepr>::deserialize(deserializer)? {
    Some(PriceRepr::Text(s)) => s,
    Some(PriceRepr::Number(n)) => n.to_string(),
    None => String::new(),
  })
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  ReqwestError(String),
  StatusError(u16),
  DeserializeError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::ReqwestError(msg) => write!(f, "Reqwest error: {}", msg),
      AppError::StatusError(code) => write!(f, "Unexpected status code: {}", code),
      AppError::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
    }
  }
}
