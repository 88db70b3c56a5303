use serde::{Deserialize, Serialize};

/// Street address decomposed from a single free-text cell.
///
/// Either every part that the pattern captures is present, or all four are
/// absent. `unit_number` is the only part that may be missing on a match,
/// since the `Unit N -` prefix is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub unit_number: Option<String>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub route_type: Option<String>,
}

impl Address {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.street_number.is_none()
            && self.street_name.is_none()
            && self.route_type.is_none()
            && self.unit_number.is_none()
    }
}
