use std::str::FromStr;
use rust_decimal::{Decimal, RoundingStrategy};

// ru-RU number formatting: no-break space between thousands, comma before the fraction
pub const GROUP_SEPARATOR: char = '\u{a0}';
pub const DECIMAL_SEPARATOR: char = ',';
pub const MAX_FRACTION_DIGITS: u32 = 3;
pub const UNPARSEABLE_PRICE: &str = "—";

/// Parses a price literal from the catalog. Negative and non-numeric values are rejected.
pub fn parse_price(raw: &str) -> Option<Decimal> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }

  let value = Decimal::from_str(trimmed)
    .or_else(|_| Decimal::from_scientific(trimmed))
    .ok()?;

  if value.is_sign_negative() && !value.is_zero() {
    return None;
  }
  Some(value)
}

/// Formats a price the way the table shows it: `"1234.5"` becomes `"1 234,5"` (no-break space).
/// Anything [`parse_price`] rejects is shown as a dash and the row stays in place.
pub fn format_price(raw: &str) -> String {
  match parse_price(raw) {
    Some(value) => group_thousands(value),
    None => UNPARSEABLE_PRICE.to_string(),
  }
}

fn group_thousands(value: Decimal) -> String {
  let rounded = value
    .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
    .normalize();
  // abs() so that "-0" prints as "0"
  let text = rounded.abs().to_string();

  let (int_part, frac_part) = match text.split_once('.') {
    Some((int_part, frac_part)) => (int_part, Some(frac_part)),
    None => (text.as_str(), None),
  };

  let digits = int_part.len();
  let mut formatted = String::with_capacity(text.len() + digits / 3 * GROUP_SEPARATOR.len_utf8());
  for (idx, ch) in int_part.chars().enumerate() {
    if idx > 0 && (digits - idx) % 3 == 0 {
      formatted.push(GROUP_SEPARATOR);
    }
    formatted.push(ch);
  }

  if let Some(frac) = frac_part {
    formatted.push(DECIMAL_SEPARATOR);
    formatted.push_str(frac);
  }
  formatted
}
