// ============================================================
// FIELD NORMALIZERS
// ============================================================
// Best-effort conversions from raw cell values to display forms.
// Every function is total: unrecognised input is returned unchanged.

use crate::domain::deal::{CellValue, DATE_FORMAT};

/// Dates render as `DD/MM/YYYY`; anything else passes through.
pub fn format_date(value: CellValue) -> CellValue {
    match value {
        CellValue::Date(dt) => CellValue::Text(dt.format(DATE_FORMAT).to_string()),
        other => other,
    }
}

/// Numbers render as `$` + thousands separators + two decimals.
pub fn format_currency(value: CellValue) -> CellValue {
    match value {
        CellValue::Number(n) => CellValue::Text(currency_text(n)),
        other => other,
    }
}

/// Keeps the first whitespace-delimited word of a text value ("Net Rate" -> "Net").
pub fn extract_rate(value: CellValue) -> CellValue {
    match value {
        CellValue::Text(s) => match s.split_whitespace().next() {
            Some(first) => CellValue::Text(first.to_string()),
            None => CellValue::Text(s),
        },
        other => other,
    }
}

/// Converts a term in months to years. Zero and empty become empty.
pub fn months_to_years(value: CellValue) -> CellValue {
    match value {
        CellValue::Number(n) if n != 0.0 => CellValue::Number(n / 12.0),
        CellValue::Number(_) | CellValue::Empty => CellValue::Empty,
        other => other,
    }
}

/// Substitutes `default` for a falsy value (empty, "" or 0).
pub fn or_default(value: CellValue, default: &str) -> CellValue {
    if value.is_truthy() {
        value
    } else {
        CellValue::text(default)
    }
}

/// Renders a term in months as "<N> months"; fractional months are truncated.
pub fn months_label(value: CellValue) -> CellValue {
    match value {
        CellValue::Number(n) => CellValue::Text(format!("{} months", n.trunc() as i64)),
        other => other,
    }
}

pub(crate) fn currency_text(n: f64) -> String {
    if n.is_nan() {
        return "$nan".to_string();
    }
    if n.is_infinite() {
        return format!("${}", n);
    }
    let fixed = format!("{:.2}", n.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if n < 0.0 { "-" } else { "" };
    format!("${}{}.{}", sign, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
