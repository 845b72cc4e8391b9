//! Expense creation contract: raw input shape, required-field checks,
//! amount coercion, and date normalization.
//!
//! The required-field rule is a truthiness check on the raw values, kept
//! bug-for-bug from the API's documented behaviour: a numeric `0` amount
//! is rejected as "missing", while the string `"0"` passes the check and
//! coerces to `0.0`. Coercion itself is stricter than the original:
//! non-numeric and non-finite amounts fail validation instead of
//! persisting garbage.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Message returned when `amount`, `category`, or `date` is missing or falsy.
pub const REQUIRED_FIELDS_MESSAGE: &str = "amount, category and date are required";

/// Message returned when `amount` is present but does not coerce to a
/// finite number.
pub const INVALID_AMOUNT_MESSAGE: &str = "amount must be a valid number";

/// Message returned when `date` is present but cannot be parsed.
pub const INVALID_DATE_MESSAGE: &str = "date must be an ISO date (YYYY-MM-DD)";

/// Maximum number of records shown in the recent-expenses view.
pub const RECENT_EXPENSES_LIMIT: usize = 20;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Raw `amount` as it arrives on the wire: a JSON number or a numeric
/// string (the entry form submits text).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Truthiness of the raw value: numeric `0` and the empty string are
    /// falsy; everything else, including `"0"`, is truthy.
    fn is_falsy(&self) -> bool {
        match self {
            RawAmount::Number(n) => *n == 0.0,
            RawAmount::Text(s) => s.is_empty(),
        }
    }

    /// Coerce the raw value to `f64`, rejecting non-numeric strings and
    /// non-finite numbers.
    fn coerce(&self) -> Result<f64, CoreError> {
        let value = match self {
            RawAmount::Number(n) => *n,
            RawAmount::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CoreError::Validation(INVALID_AMOUNT_MESSAGE.to_string()))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CoreError::Validation(INVALID_AMOUNT_MESSAGE.to_string()))
        }
    }
}

/// Create request body as received by the API.
///
/// Every field is optional so that missing values reach the validation
/// contract (and its fixed 400 message) instead of being rejected by the
/// deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateExpense {
    pub amount: Option<RawAmount>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub note: Option<String>,
}

/// A validated, normalized expense ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    pub date: Timestamp,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a create request and normalize it into a [`NewExpense`].
///
/// Fails with the fixed required-fields message when `amount`,
/// `category`, or `date` is missing or falsy; with a specific message
/// when `amount` or `date` is present but malformed. An empty `note`
/// collapses to `None` so the store holds NULL, never `""`.
pub fn validate_create(input: &CreateExpense) -> Result<NewExpense, CoreError> {
    let amount_raw = input.amount.as_ref().filter(|a| !a.is_falsy());
    let category = input.category.as_deref().filter(|c| !c.is_empty());
    let date_raw = input.date.as_deref().filter(|d| !d.is_empty());

    let (Some(amount_raw), Some(category), Some(date_raw)) = (amount_raw, category, date_raw)
    else {
        return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    };

    let amount = amount_raw.coerce()?;
    let date = parse_expense_date(date_raw)?;
    let note = input
        .note
        .as_deref()
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(NewExpense {
        amount,
        category: category.to_string(),
        note,
        date,
    })
}

// ---------------------------------------------------------------------------
// Date normalization
// ---------------------------------------------------------------------------

/// Parse an expense date and normalize it to the start of its calendar
/// day.
///
/// Accepts a plain ISO date (`2024-03-15`), an RFC 3339 timestamp, or a
/// naive `YYYY-MM-DDTHH:MM:SS` timestamp; in every case only the
/// calendar-day portion survives. All date math is UTC: "start of day"
/// means midnight UTC, so day bucketing does not depend on where the
/// server runs.
pub fn parse_expense_date(raw: &str) -> Result<Timestamp, CoreError> {
    parse_day(raw)
        .map(start_of_day)
        .ok_or_else(|| CoreError::Validation(INVALID_DATE_MESSAGE.to_string()))
}

/// Midnight UTC for the given calendar day.
pub fn start_of_day(day: NaiveDate) -> Timestamp {
    // and_hms_opt(0, 0, 0) cannot fail.
    Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).expect("midnight is a valid time"))
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Timelike;

    fn input(amount: Option<RawAmount>, category: &str, date: &str) -> CreateExpense {
        CreateExpense {
            amount,
            category: Some(category.to_string()),
            date: Some(date.to_string()),
            note: None,
        }
    }

    // -- required / falsy contract ---------------------------------------

    #[test]
    fn valid_input_accepted() {
        let result = validate_create(&input(
            Some(RawAmount::Number(12.5)),
            "Food",
            "2024-03-15",
        ))
        .unwrap();

        assert_eq!(result.amount, 12.5);
        assert_eq!(result.category, "Food");
        assert_eq!(result.note, None);
    }

    #[test]
    fn missing_amount_rejected_with_fixed_message() {
        let result = validate_create(&input(None, "Food", "2024-03-15"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn numeric_zero_amount_rejected_as_missing() {
        // Truthiness check on the raw value: 0 is falsy.
        let result = validate_create(&input(Some(RawAmount::Number(0.0)), "Food", "2024-03-15"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn string_zero_amount_passes_required_check() {
        // "0" is a non-empty string, so it survives the truthiness check
        // and coerces to 0.0. Documented quirk, preserved deliberately.
        let result = validate_create(&input(
            Some(RawAmount::Text("0".to_string())),
            "Food",
            "2024-03-15",
        ))
        .unwrap();
        assert_eq!(result.amount, 0.0);
    }

    #[test]
    fn negative_amount_passes_validation() {
        // The contract is a truthiness check, not a range check.
        let result = validate_create(&input(
            Some(RawAmount::Number(-3.0)),
            "Food",
            "2024-03-15",
        ))
        .unwrap();
        assert_eq!(result.amount, -3.0);
    }

    #[test]
    fn empty_string_amount_rejected_as_missing() {
        let result = validate_create(&input(
            Some(RawAmount::Text(String::new())),
            "Food",
            "2024-03-15",
        ));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn missing_category_rejected() {
        let req = CreateExpense {
            amount: Some(RawAmount::Number(5.0)),
            category: None,
            date: Some("2024-03-15".to_string()),
            note: None,
        };
        let result = validate_create(&req);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn empty_category_rejected() {
        let result = validate_create(&input(Some(RawAmount::Number(5.0)), "", "2024-03-15"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn missing_date_rejected() {
        let req = CreateExpense {
            amount: Some(RawAmount::Number(5.0)),
            category: Some("Food".to_string()),
            date: None,
            note: None,
        };
        let result = validate_create(&req);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn empty_date_rejected() {
        let result = validate_create(&input(Some(RawAmount::Number(5.0)), "Food", ""));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE);
    }

    // -- amount coercion ---------------------------------------------------

    #[test]
    fn string_amount_coerced_to_f64() {
        let result = validate_create(&input(
            Some(RawAmount::Text("42.50".to_string())),
            "Food",
            "2024-03-15",
        ))
        .unwrap();
        assert_eq!(result.amount, 42.5);
    }

    #[test]
    fn string_amount_with_whitespace_coerced() {
        let result = validate_create(&input(
            Some(RawAmount::Text("  7.25 ".to_string())),
            "Food",
            "2024-03-15",
        ))
        .unwrap();
        assert_eq!(result.amount, 7.25);
    }

    #[test]
    fn non_numeric_amount_rejected_explicitly() {
        let result = validate_create(&input(
            Some(RawAmount::Text("lunch".to_string())),
            "Food",
            "2024-03-15",
        ));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == INVALID_AMOUNT_MESSAGE);
    }

    #[test]
    fn non_finite_amount_rejected_explicitly() {
        let result = validate_create(&input(
            Some(RawAmount::Text("inf".to_string())),
            "Food",
            "2024-03-15",
        ));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == INVALID_AMOUNT_MESSAGE);
    }

    // -- date normalization --------------------------------------------------

    #[test]
    fn date_normalized_to_midnight() {
        let result = validate_create(&input(
            Some(RawAmount::Number(1.0)),
            "Food",
            "2024-03-15",
        ))
        .unwrap();

        assert_eq!(result.date.date_naive().to_string(), "2024-03-15");
        assert_eq!(result.date.hour(), 0);
        assert_eq!(result.date.minute(), 0);
        assert_eq!(result.date.second(), 0);
        assert_eq!(result.date.nanosecond(), 0);
    }

    #[test]
    fn rfc3339_date_keeps_only_the_day() {
        let date = parse_expense_date("2024-03-15T18:45:11Z").unwrap();
        assert_eq!(date, start_of_day(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    }

    #[test]
    fn naive_datetime_keeps_only_the_day() {
        let date = parse_expense_date("2024-03-15T08:00:00").unwrap();
        assert_eq!(date, start_of_day(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    }

    #[test]
    fn offset_datetime_buckets_by_utc_day() {
        // 23:30 UTC-2 is 01:30 UTC the next day; the UTC day wins.
        let date = parse_expense_date("2024-03-15T23:30:00-02:00").unwrap();
        assert_eq!(date, start_of_day(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()));
    }

    #[test]
    fn unparseable_date_rejected_explicitly() {
        let result = validate_create(&input(Some(RawAmount::Number(1.0)), "Food", "yesterday"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == INVALID_DATE_MESSAGE);
    }

    // -- note handling --------------------------------------------------------

    #[test]
    fn empty_note_collapses_to_none() {
        let mut req = input(Some(RawAmount::Number(1.0)), "Food", "2024-03-15");
        req.note = Some(String::new());
        assert_eq!(validate_create(&req).unwrap().note, None);
    }

    #[test]
    fn non_empty_note_preserved() {
        let mut req = input(Some(RawAmount::Number(1.0)), "Food", "2024-03-15");
        req.note = Some("team lunch".to_string());
        assert_eq!(
            validate_create(&req).unwrap().note,
            Some("team lunch".to_string())
        );
    }

    // -- wire shape ------------------------------------------------------------

    #[test]
    fn amount_deserializes_from_number_or_string() {
        let from_number: CreateExpense =
            serde_json::from_str(r#"{"amount": 42.5, "category": "Food", "date": "2024-03-15"}"#)
                .unwrap();
        assert_matches!(from_number.amount, Some(RawAmount::Number(n)) if n == 42.5);

        let from_string: CreateExpense = serde_json::from_str(
            r#"{"amount": "42.50", "category": "Food", "date": "2024-03-15"}"#,
        )
        .unwrap();
        assert_matches!(from_string.amount, Some(RawAmount::Text(ref s)) if s == "42.50");
    }

    #[test]
    fn absent_fields_deserialize_to_none() {
        let req: CreateExpense = serde_json::from_str(r#"{"category": "Food"}"#).unwrap();
        assert!(req.amount.is_none());
        assert!(req.date.is_none());
        assert!(req.note.is_none());
    }
}
