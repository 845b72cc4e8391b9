//! Repository for the `expenses` table.

use chrono::Utc;
use outlay_core::expense::NewExpense;
use sqlx::SqlitePool;

use crate::models::expense::Expense;

/// Column list for expenses queries.
const COLUMNS: &str = "id, amount, category, note, date, created_at";

/// Provides the two store operations: create-one and list-all.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Insert a validated expense, returning the persisted row with its
    /// assigned `id` and `created_at`.
    pub async fn create(pool: &SqlitePool, input: &NewExpense) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses (amount, category, note, date, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(input.amount)
            .bind(&input.category)
            .bind(&input.note)
            .bind(input.date)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all expenses, most recent calendar day first. Same-day rows
    /// tie-break on `id` descending so the order is stable.
    ///
    /// No pagination: volume is personal-scale by design.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Expense>(&query).fetch_all(pool).await
    }
}
