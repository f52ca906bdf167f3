//! Adapters for callers that ingest tabular invoice data.
//!
//! Nothing in here is part of the calculation core: the engine assumes
//! clean numeric and temporal inputs. These helpers exist so an ingestion
//! collaborator can resolve loosely-named spreadsheet columns, normalize
//! RUT lookup keys and coerce messy cells *before* the engine sees them.
//! Unparseable amounts become zero and unparseable dates become absent,
//! by policy; coercion failures never surface inside the core.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::decimal::Money;

/// preferred open-amount column names, highest priority first
pub const AMOUNT_CANDIDATES: &[&str] = &["m. pendiente", "monto pendiente", "monto", "saldo"];

/// preferred due-date column names, highest priority first
pub const DUE_DATE_CANDIDATES: &[&str] = &["f. vcto", "vencimiento", "fecha vcto"];

/// preferred customer-key column names
pub const RUT_CANDIDATES: &[&str] = &["rut"];

/// Resolve a semantic field against real spreadsheet headers.
///
/// Candidates are tried in priority order; a header matches when it
/// contains the candidate, case-insensitively.
pub fn resolve_field<'a>(headers: &'a [String], candidates: &[&str]) -> Option<&'a str> {
    for candidate in candidates {
        let needle = candidate.to_lowercase();
        if let Some(header) = headers.iter().find(|h| h.to_lowercase().contains(&needle)) {
            return Some(header.as_str());
        }
    }
    None
}

/// Normalize a RUT into its canonical `BODY-DV` form.
///
/// Strips everything but digits and the verifier K, drops leading zeros
/// in the body. Returns `None` when nothing usable remains.
pub fn normalize_rut(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    if cleaned.len() == 1 {
        return Some(cleaned);
    }

    let (body, dv) = cleaned.split_at(cleaned.len() - 1);
    let body: u64 = body.parse().ok()?;
    Some(format!("{}-{}", body, dv))
}

/// dot-grouped visual form of a normalized RUT (12345678-5 -> 12.345.678-5)
pub fn format_rut(rut: &str) -> String {
    let Some((body, dv)) = rut.split_once('-') else {
        return rut.to_string();
    };
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return rut.to_string();
    }

    let mut grouped = String::with_capacity(body.len() + body.len() / 3);
    for (i, c) in body.chars().enumerate() {
        if i > 0 && (body.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{}-{}", grouped, dv)
}

/// Coerce an amount cell to whole-unit money; unparseable input is zero.
///
/// Accepts plain decimals plus the latin formatting the source files use
/// (`$ 1.234.567,89`).
pub fn coerce_amount(raw: &str) -> Money {
    let trimmed: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$')
        .collect();
    if trimmed.is_empty() {
        return Money::ZERO;
    }

    if let Ok(d) = Decimal::from_str(&trimmed) {
        return Money::from_decimal(d);
    }

    // latin separators: dots group thousands, comma marks decimals
    let relaxed = trimmed.replace('.', "").replace(',', ".");
    Decimal::from_str(&relaxed)
        .map(Money::from_decimal)
        .unwrap_or(Money::ZERO)
}

/// coerce a date cell, day-first; unparseable input is absent
pub fn coerce_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    for fmt in ["%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_field_priority_order() {
        let headers: Vec<String> = ["Compañía", "Monto", "M. Pendiente", "F. Vcto."]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(resolve_field(&headers, AMOUNT_CANDIDATES), Some("M. Pendiente"));
        assert_eq!(resolve_field(&headers, DUE_DATE_CANDIDATES), Some("F. Vcto."));
        assert_eq!(resolve_field(&headers, RUT_CANDIDATES), None);
    }

    #[test]
    fn test_normalize_rut() {
        assert_eq!(normalize_rut("12.345.678-5").as_deref(), Some("12345678-5"));
        assert_eq!(normalize_rut(" 9876543k ").as_deref(), Some("9876543-K"));
        assert_eq!(normalize_rut("007-1").as_deref(), Some("7-1"));
        assert_eq!(normalize_rut("sin rut"), None);
        assert_eq!(normalize_rut("5").as_deref(), Some("5"));
    }

    #[test]
    fn test_format_rut() {
        assert_eq!(format_rut("12345678-5"), "12.345.678-5");
        assert_eq!(format_rut("7-1"), "7-1");
        assert_eq!(format_rut("no-dash-here"), "no-dash-here");
    }

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount("123456"), Money::from_major(123_456));
        assert_eq!(coerce_amount("$ 1.234.567"), Money::from_major(1_234_567));
        assert_eq!(coerce_amount("1234,6"), Money::from_major(1_235));
        assert_eq!(coerce_amount("n/a"), Money::ZERO);
        assert_eq!(coerce_amount(""), Money::ZERO);
    }

    #[test]
    fn test_coerce_date_day_first() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(coerce_date("05-03-2024"), Some(expected));
        assert_eq!(coerce_date("05/03/2024"), Some(expected));
        assert_eq!(coerce_date("2024-03-05"), Some(expected));
        assert_eq!(coerce_date("pendiente"), None);
    }
}
