//! Handlers for the expenses endpoint, the one wire contract of the
//! service: list all records, create one record, 405 everything else.

use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use outlay_core::expense::{validate_create, CreateExpense};
use outlay_db::repositories::ExpenseRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/expenses
///
/// Returns every expense as a bare JSON array, most recent calendar day
/// first. No pagination; the data set is personal-scale.
pub async fn list_expenses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let expenses = ExpenseRepo::list(&state.pool).await?;

    Ok(Json(expenses))
}

/// POST /api/expenses
///
/// Validates and normalizes the body, persists one row, and returns the
/// created expense with 201. Validation failures surface as 400 with the
/// fixed `{"error": "amount, category and date are required"}` body (or a
/// specific message for malformed amount/date); store failures as 500.
pub async fn create_expense(
    State(state): State<AppState>,
    Json(input): Json<CreateExpense>,
) -> AppResult<impl IntoResponse> {
    let new_expense = validate_create(&input)?;

    let expense = ExpenseRepo::create(&state.pool, &new_expense).await?;

    tracing::info!(
        expense_id = expense.id,
        category = %expense.category,
        "Expense recorded"
    );

    Ok((StatusCode::CREATED, Json(expense)))
}

/// Fallback for any other HTTP method on /api/expenses.
///
/// 405 with an `Allow: GET, POST` header and a plain-text body naming the
/// rejected method.
pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, POST")],
        format!("Method {method} Not Allowed"),
    )
}
