use outlay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `expenses` table.
///
/// Serializes to the wire shape the API returns: camelCase keys
/// (`createdAt`), RFC 3339 timestamps, `note` as JSON null when absent.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: DbId,
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    /// Calendar day of the expense, normalized to midnight UTC.
    pub date: Timestamp,
    pub created_at: Timestamp,
}
