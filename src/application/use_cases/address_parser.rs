use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::deal::{Address, CellValue};

// Optional "Unit N -" prefix, street number, greedy street name, trailing route word.
static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:Unit\s*(\d+)\s*-\s*)?(\d+)\s+(.+)\s+(\w+)$").unwrap()
});

/// Splits a free-text street address into its parts.
///
/// A route-type word embedded mid-address ends up inside `street_name`
/// because the name segment is greedy; only the final word is the route type.
pub fn split_address(address: Option<&str>) -> Address {
    let Some(address) = address.filter(|a| !a.is_empty()) else {
        return Address::empty();
    };

    match ADDRESS_PATTERN.captures(address) {
        Some(caps) => Address {
            unit_number: caps.get(1).map(|m| m.as_str().to_string()),
            street_number: caps.get(2).map(|m| m.as_str().to_string()),
            street_name: caps.get(3).map(|m| m.as_str().to_string()),
            route_type: caps.get(4).map(|m| m.as_str().to_string()),
        },
        None => Address::empty(),
    }
}

/// Address decomposition for a raw cell; non-text cells have no address.
pub fn split_address_cell(value: &CellValue) -> Address {
    split_address(value.as_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(address: &Address) -> (Option<&str>, Option<&str>, Option<&str>, Option<&str>) {
        (
            address.unit_number.as_deref(),
            address.street_number.as_deref(),
            address.street_name.as_deref(),
            address.route_type.as_deref(),
        )
    }

    #[test]
    fn test_split_with_unit() {
        let address = split_address(Some("Unit 4 - 123 Main St"));
        assert_eq!(parts(&address), (Some("4"), Some("123"), Some("Main"), Some("St")));
    }

    #[test]
    fn test_split_without_unit() {
        let address = split_address(Some("8820 Blackfoot Trail Ave"));
        assert_eq!(
            parts(&address),
            (None, Some("8820"), Some("Blackfoot Trail"), Some("Ave"))
        );
    }

    #[test]
    fn test_split_compact_unit_prefix() {
        let address = split_address(Some("Unit12-450 Centre Rd"));
        assert_eq!(parts(&address), (Some("12"), Some("450"), Some("Centre"), Some("Rd")));
    }

    #[test]
    fn test_greedy_name_keeps_embedded_route_word() {
        let address = split_address(Some("77 Macleod Trail SE"));
        assert_eq!(address.street_name.as_deref(), Some("Macleod Trail"));
        assert_eq!(address.route_type.as_deref(), Some("SE"));
    }

    #[test]
    fn test_non_matching_is_all_absent() {
        assert!(split_address(None).is_empty());
        assert!(split_address(Some("")).is_empty());
        assert!(split_address(Some("Main Street")).is_empty());
        assert!(split_address(Some("123 Main")).is_empty());
    }

    #[test]
    fn test_non_text_cell_has_no_address() {
        assert!(split_address_cell(&CellValue::Number(123.0)).is_empty());
        assert!(split_address_cell(&CellValue::Empty).is_empty());
        assert!(!split_address_cell(&CellValue::text("1 King St")).is_empty());
    }
}
