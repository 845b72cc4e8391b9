//! HTTP client for the outlay API.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use outlay_core::types::{DbId, Timestamp};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// An expense as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: DbId,
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    pub date: Timestamp,
    pub created_at: Timestamp,
}

/// Create request body. Every field is sent as the raw form text, the way
/// the entry form captured it; the server owns validation and coercion.
#[derive(Debug, Clone, Serialize)]
pub struct CreateExpenseRequest {
    pub amount: String,
    pub note: String,
    pub category: String,
    pub date: String,
}

/// Error body the server returns on 4xx/5xx.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Blocking client for the two expense operations.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `OUTLAY_API_URL` env var
    /// (default: `http://localhost:3000`).
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("OUTLAY_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// GET /api/expenses
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        let response = self
            .http
            .get(format!("{}/api/expenses", self.base_url))
            .send()
            .context("Failed to fetch expenses")?;

        Self::parse(response)
    }

    /// POST /api/expenses
    pub fn create_expense(&self, request: &CreateExpenseRequest) -> Result<Expense> {
        let response = self
            .http
            .post(format!("{}/api/expenses", self.base_url))
            .json(request)
            .send()
            .context("Failed to submit expense")?;

        Self::parse(response)
    }

    /// Decode a success body, or surface the server's `{"error": ...}`
    /// message as a readable error.
    fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return response.json().context("Failed to decode response body");
        }

        match response.json::<ErrorBody>() {
            Ok(body) => bail!("{} ({status})", body.error),
            Err(_) => bail!("Request failed with status {status}"),
        }
    }
}
