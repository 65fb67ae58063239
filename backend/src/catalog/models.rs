use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Category {
  pub id: i32,
  pub name: String,
  pub icon: String,
  pub description: String,
  pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct PriceItem {
  pub id: i32,
  pub category_id: Option<i32>,
  pub name: String,
  pub specs: String,
  // serialized as a decimal string, e.g. "52300.00"
  pub price: Decimal,
  pub unit: String,
  pub sort_order: i32,
}

/// Body of `GET /catalog`.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CatalogPayload {
  pub categories: Vec<Category>,
  #[serde(rename = "priceList")]
  pub price_list: Vec<PriceItem>,
}
