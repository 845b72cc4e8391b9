//! Row structs for the expense store.

pub mod expense;
