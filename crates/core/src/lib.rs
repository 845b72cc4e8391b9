//! Domain logic for the outlay expense tracker.
//!
//! Everything here is pure (no IO): the create-expense validation
//! contract, date normalization, suggested categories, and the
//! day-bucketed aggregation that feeds the daily-totals chart. The db and
//! api crates depend on this one, never the other way around.

pub mod aggregate;
pub mod categories;
pub mod error;
pub mod expense;
pub mod types;
