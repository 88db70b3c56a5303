use std::collections::HashMap;

use crate::domain::deal::{CellValue, DocumentType, FieldMap};

/// (submitted form key, column name)
pub type FormFieldSpec = (&'static str, &'static str);

pub const LEASE_FORM_FIELDS: &[FormFieldSpec] = &[
    ("lease_province", "Province"),
    ("lease_city", "City"),
    ("lease_quadrant", "Quadrant"),
    ("lease_submarket", "Submarket"),
    ("lease_land_actual_sf", "Land Actual sf"),
    ("lease_zoning", "Zoning"),
    ("lease_parcel_use_code", "Parcel Use Code"),
    ("lease_gross_lease_rate", "Gross Lease Rate (PSF)"),
    ("lease_data_comments", "Data Comments"),
    ("lease_cam", "CAM"),
    ("lease_property_taxes", "Property Taxes"),
    ("lease_roll_no", "Roll Number"),
];

pub const RETAIL_FORM_FIELDS: &[FormFieldSpec] = &[
    ("retail_city", "City"),
    ("retail_quadrant", "Quadrant"),
    ("retail_submarket", "Submarket"),
    ("retail_land_actual_sf", "Land Actual sf"),
    ("retail_zoning", "Zoning"),
    ("retail_parcel_use_code", "Parcel Use Code"),
    ("retail_year_built", "Year Built"),
    ("retail_data_comments", "Data Comments"),
    ("retail_gross_upper_area", "Gross Upper Area"),
    ("retail_plan_area", "Plan Area"),
    ("retail_roll_no", "Roll Number"),
    ("retail_single_multi_tenant", "Single/Multi-Tenant"),
    ("retail_instrument_number", "Instrument Number"),
    ("retail_source", "Source"),
];

pub fn form_fields_for(document_type: DocumentType) -> &'static [FormFieldSpec] {
    match document_type {
        DocumentType::Lease => LEASE_FORM_FIELDS,
        DocumentType::Retail => RETAIL_FORM_FIELDS,
    }
}

/// Build the form mapping from raw submitted fields.
///
/// Every declared column is present; fields that were not submitted, or were
/// blank, are empty. Keys that the document type does not declare are ignored.
pub fn build_form_mapping(
    document_type: DocumentType,
    submitted: &HashMap<String, String>,
) -> FieldMap {
    form_fields_for(document_type)
        .iter()
        .map(|(key, column)| {
            let value = CellValue::from_form(submitted.get(*key).map(String::as_str));
            (*column, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_lease_form_mapping() {
        let form = build_form_mapping(
            DocumentType::Lease,
            &submitted(&[
                ("lease_city", "Springfield"),
                ("lease_roll_no", "  "),
                ("retail_city", "Shelbyville"),
            ]),
        );

        assert_eq!(form.len(), LEASE_FORM_FIELDS.len());
        assert_eq!(form.get("City"), Some(&CellValue::text("Springfield")));
        assert_eq!(form.get("Roll Number"), Some(&CellValue::Empty));
        assert_eq!(form.get("Province"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_retail_declares_data_comments_once() {
        let columns: Vec<&str> = RETAIL_FORM_FIELDS.iter().map(|(_, c)| *c).collect();
        assert_eq!(columns.iter().filter(|c| **c == "Data Comments").count(), 1);

        let form = build_form_mapping(
            DocumentType::Retail,
            &submitted(&[("retail_data_comments", "Verified with vendor")]),
        );
        assert_eq!(
            form.get("Data Comments"),
            Some(&CellValue::text("Verified with vendor"))
        );
    }
}
