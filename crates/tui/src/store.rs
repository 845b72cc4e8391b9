//! Cached access to the expense list.

use anyhow::Result;

use crate::cache::Cache;
use crate::client::{ApiClient, CreateExpenseRequest, Expense};

/// Combines the API client with the list cache.
///
/// Reads serve from cache and fetch on miss; every successful create
/// invalidates the cache and refetches (revalidate-on-write).
pub struct ExpenseStore {
    client: ApiClient,
    cache: Cache<Vec<Expense>>,
}

impl ExpenseStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: Cache::new(),
        }
    }

    /// The expense list in server order (date descending), fetched on
    /// cache miss.
    pub fn expenses(&mut self) -> Result<&[Expense]> {
        if self.cache.get().is_none() {
            let fresh = self.client.list_expenses()?;
            self.cache.set(fresh);
        }

        Ok(self.cache.get().map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Create one expense, then invalidate and refetch the list.
    pub fn create(&mut self, request: &CreateExpenseRequest) -> Result<Expense> {
        let created = self.client.create_expense(request)?;

        self.cache.invalidate();
        let fresh = self.client.list_expenses()?;
        self.cache.set(fresh);

        Ok(created)
    }
}
