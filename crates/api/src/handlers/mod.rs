//! HTTP request handlers.

pub mod expenses;
