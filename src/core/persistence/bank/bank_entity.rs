use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `bank` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BankEntity {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// ISO 4217 currency code.
    pub currency: String,
    pub url: String,
    pub create_at: DateTime<Utc>,
    pub create_by: String,
    /// Pagination key. Assumed not to decrease across updates of a record.
    pub update_at: DateTime<Utc>,
    pub update_by: String,
}
