//! Currency selection and display formatting.
//!
//! `select_amount` picks the baseline figure in the location's currency,
//! deriving missing figures from USD via fixed approximate factors — a
//! deliberately crude conversion, not a live FX rate. `format_salary`
//! renders whole-unit amounts with per-currency grouping conventions
//! (zero decimal places for every supported code).

use crate::estimator::tables::BaselineSalary;

/// Fixed approximate USD conversion factors for baselines that lack a
/// figure in the requested currency.
const USD_TO_INR: f64 = 75.0;
const USD_TO_EUR: f64 = 0.85;
const USD_TO_GBP: f64 = 0.75;

/// Selects the baseline amount in the given currency, falling back to a
/// USD-derived approximation when the record has no figure for it. Any
/// unrecognized code resolves to the USD figure.
pub fn select_amount(baseline: &BaselineSalary, currency: &str) -> f64 {
    match currency {
        "INR" => baseline.inr.unwrap_or(baseline.usd * USD_TO_INR),
        "EUR" => baseline.eur.unwrap_or(baseline.usd * USD_TO_EUR),
        "GBP" => baseline.gbp.unwrap_or(baseline.usd * USD_TO_GBP),
        _ => baseline.usd,
    }
}

/// Formats a whole-unit amount for display in the given currency.
///
/// INR uses the Indian 2,2,3 digit grouping; USD and GBP use comma
/// thousands; EUR uses dot thousands. Unknown codes render as
/// `CODE 1,234,567`.
pub fn format_salary(amount: i64, currency: &str) -> String {
    match currency {
        "INR" => format!("₹{}", group_indian(amount)),
        "USD" => format!("${}", group_thousands(amount, ',')),
        "GBP" => format!("£{}", group_thousands(amount, ',')),
        "EUR" => format!("€{}", group_thousands(amount, '.')),
        other => format!("{other} {}", group_thousands(amount, ',')),
    }
}

/// Groups digits in threes from the right: 1234567 → "1,234,567".
fn group_thousands(amount: i64, separator: char) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    let first_group = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    out.push_str(&digits[..first_group]);
    let mut rest = &digits[first_group..];
    while !rest.is_empty() {
        out.push(separator);
        out.push_str(&rest[..3]);
        rest = &rest[3..];
    }
    out
}

/// Indian grouping: the last three digits form one group, every group
/// before it has two digits. 1500000 → "15,00,000".
fn group_indian(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 1);
    if amount < 0 {
        out.push('-');
    }
    if digits.len() <= 3 {
        out.push_str(&digits);
        return out;
    }
    let head = &digits[..digits.len() - 3];
    let tail = &digits[digits.len() - 3..];
    let first_group = match head.len() % 2 {
        0 => 2,
        n => n,
    };
    out.push_str(&head[..first_group]);
    let mut rest = &head[first_group..];
    while !rest.is_empty() {
        out.push(',');
        out.push_str(&rest[..2]);
        rest = &rest[2..];
    }
    out.push(',');
    out.push_str(tail);
    out
}
