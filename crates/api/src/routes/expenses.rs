//! Route definitions for the expenses endpoint.
//!
//! ```text
//! GET    /expenses   -> list_expenses
//! POST   /expenses   -> create_expense
//! other  /expenses   -> 405 with Allow: GET, POST
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::expenses;
use crate::state::AppState;

/// Expense routes, intended to be nested under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/expenses",
        get(expenses::list_expenses)
            .post(expenses::create_expense)
            .fallback(expenses::method_not_allowed),
    )
}
