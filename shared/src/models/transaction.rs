//! Transaction Model

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient_datetime, null_as_default};

/// A single e-commerce sale record, as published by the seed source.
///
/// Every field is optional on the way in: the store keeps whatever the
/// loader is handed, so missing or `null` values fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// External identifier (not unique)
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sold: bool,
    #[serde(default, with = "lenient_datetime")]
    pub date_of_sale: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

impl Transaction {
    /// Calendar month (1-12, UTC) of the sale date
    pub fn sale_month(&self) -> Option<u8> {
        self.date_of_sale.map(|dt| dt.month() as u8)
    }
}
