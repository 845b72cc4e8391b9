//! Suggested expense categories.
//!
//! These seed the client's category picker. The store does not enforce
//! them: a record may carry any non-empty category label.

pub const CATEGORY_FOOD: &str = "Food";
pub const CATEGORY_TRANSPORT: &str = "Transport";
pub const CATEGORY_BILLS: &str = "Bills";
pub const CATEGORY_ENTERTAINMENT: &str = "Entertainment";
pub const CATEGORY_SHOPPING: &str = "Shopping";
pub const CATEGORY_OTHER: &str = "Other";

/// All suggested categories, in picker order.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    CATEGORY_FOOD,
    CATEGORY_TRANSPORT,
    CATEGORY_BILLS,
    CATEGORY_ENTERTAINMENT,
    CATEGORY_SHOPPING,
    CATEGORY_OTHER,
];

/// Category pre-selected in a fresh entry form.
pub const DEFAULT_CATEGORY: &str = CATEGORY_FOOD;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggested_list_complete() {
        assert_eq!(SUGGESTED_CATEGORIES.len(), 6);
    }

    #[test]
    fn default_category_is_suggested() {
        assert!(SUGGESTED_CATEGORIES.contains(&DEFAULT_CATEGORY));
    }
}
