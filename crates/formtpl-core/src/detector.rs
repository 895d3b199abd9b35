//! Detector — infers the [`FieldType`] of a raw submitted value.
//!
//! Checks run in a fixed order: date → phone → email → text. The first
//! predicate that accepts the value decides its type; `text` accepts
//! everything, so detection never fails.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::types::FieldType;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// `DD.MM.YYYY`
static DATE_DOTTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").unwrap());

/// `YYYY-MM-DD`
static DATE_ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// `+7 XXX XXX XX XX`
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+7 [0-9]{3} [0-9]{3} [0-9]{2} [0-9]{2}$").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

type Predicate = fn(&str) -> bool;

/// Typed checks in precedence order. `Text` is not listed; it is the
/// fallback when none of these accept the value.
const CHECKS: [(FieldType, Predicate); 3] = [
    (FieldType::Date, is_date),
    (FieldType::Phone, is_phone),
    (FieldType::Email, is_email),
];

/// Infer the type of a submitted value.
pub fn detect(value: &str) -> FieldType {
    CHECKS
        .iter()
        .find(|(_, check)| check(value))
        .map(|(ty, _)| *ty)
        .unwrap_or(FieldType::Text)
}

/// `DD.MM.YYYY` or `YYYY-MM-DD` naming a real calendar day.
pub fn is_date(value: &str) -> bool {
    let format = if DATE_DOTTED_RE.is_match(value) {
        "%d.%m.%Y"
    } else if DATE_ISO_RE.is_match(value) {
        "%Y-%m-%d"
    } else {
        return false;
    };

    // The shape check guarantees four year digits; year 0 has no calendar day.
    NaiveDate::parse_from_str(value, format).is_ok_and(|d| d.year() >= 1)
}

/// Exactly `+7 XXX XXX XX XX`.
pub fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// `local@domain.tld` with no consecutive dots and no dot at either end of
/// the local part.
pub fn is_email(value: &str) -> bool {
    if value.contains("..") {
        return false;
    }
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.ends_with('.') {
        return false;
    }
    EMAIL_RE.is_match(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
