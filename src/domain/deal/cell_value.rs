// ============================================================
// CELL VALUE
// ============================================================
// A scalar read from a worksheet or submitted through a form

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// Rendering used for every date that leaves the pipeline
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Raw or normalized value of a single field
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    #[default]
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Build a value from an optional form submission; blank input is empty
    pub fn from_form(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => CellValue::Text(v.to_string()),
            _ => CellValue::Empty,
        }
    }

    /// True for missing cells and empty strings
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Spreadsheet truthiness: empty, "" and 0 are false
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Number(n) => *n != 0.0,
            CellValue::Date(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Display form used when joining values into text or writing text cells
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => render_number(*n),
            CellValue::Date(dt) => dt.format(DATE_FORMAT).to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Date(_) => serializer.serialize_str(&self.render()),
            CellValue::Empty => serializer.serialize_none(),
        }
    }
}

/// Whole numbers print without a fractional part
fn render_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_from_form_blank_is_empty() {
        assert_eq!(CellValue::from_form(None), CellValue::Empty);
        assert_eq!(CellValue::from_form(Some("   ")), CellValue::Empty);
        assert_eq!(CellValue::from_form(Some("Calgary")), CellValue::text("Calgary"));
    }

    #[test]
    fn test_truthiness_matches_spreadsheet_semantics() {
        assert!(!CellValue::Number(0.0).is_truthy());
        assert!(CellValue::Number(36.0).is_truthy());
        assert!(!CellValue::text("").is_truthy());
        assert!(CellValue::text("").is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_render() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::Date(date).render(), "01/03/2024");
        assert_eq!(CellValue::Number(1990.0).render(), "1990");
        assert_eq!(CellValue::Number(12.75).render(), "12.75");
        assert_eq!(CellValue::Empty.render(), "");
    }

    #[test]
    fn test_serialize() {
        let values = vec![
            CellValue::text("Net"),
            CellValue::Number(2.5),
            CellValue::Empty,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["Net",2.5,null]"#);
    }
}
