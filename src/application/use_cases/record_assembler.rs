// ============================================================
// RECORD ASSEMBLER
// ============================================================
// Merge extracted and form mappings, then project onto the
// document type's fixed column order

use tracing::debug;

use crate::domain::deal::{CellValue, DocumentType, FieldMap, FinalRecord};

pub const LEASE_COLUMNS: &[&str] = &[
    "File Number",
    "Unit Number",
    "Street Number",
    "Street Name",
    "Route Type",
    "City",
    "Province",
    "Quadrant",
    "Submarket",
    "Land Actual sf",
    "Zoning",
    "Year Built",
    "Building Size (sf)",
    "Single/Multi-Tenant",
    "Parcel Use Code",
    "Lease Start Date",
    "Lease End Date",
    "Term Length (Years)",
    "Unit Size (SF)",
    "Initial Net Rate (PSF)",
    "Gross Lease Rate (PSF)",
    "Tenant Name",
    "Property Type",
    "Source/ Agent",
    "Comments",
    "Leasehold Improvements & Other Incentives (TI)",
    "Net Effective Rate",
    "Type of Lease",
    "Rate",
    "Total Operating Expenses",
    "CAM",
    "Property Taxes",
    "Data Comments",
    "Updated in MySQL DB",
    "Roll Number",
    "Client",
    "Lessor_Company",
    "Lessor_Contact_Name",
    "Lessor_Address",
    "Lessor_Phone_Number",
    "Lessor_Email",
    "Lessor_City",
    "Lessor_Province",
    "Lessor_Postal_Code",
    "Lessee_Company",
    "Lessee_Contact_Name",
    "Lessee_Address",
    "Lessee_Phone_Number",
    "Lessee_Email",
    "Lessee_City",
    "Lessee_Province",
    "Lessee_Postal_Code",
    "Sabre_Aligned",
];

pub const RETAIL_COLUMNS: &[&str] = &[
    "Index #",
    "Street Name",
    "Route Type",
    "City",
    "Land Actual sf",
    "Zoning",
    "Year Built",
    "Gross Upper Area",
    "Plan Area",
    "Sold Price",
    "Sale Date",
    "Price PSF",
    "Quadrant",
    "Submarket",
    "Single/Multi-Tenant",
    "Parcel Use Code",
    "Instrument Number",
    "Roll Number",
    "Source",
    "Comments",
    "Data Comments",
    "Updated in MySQL DB",
    "Client",
    "Vendor_Company",
    "Vendor_Contact_Name",
    "Vendor_Address",
    "Vendor_Phone_Number",
    "Vendor_Email",
    "Vendor_City",
    "Vendor_Province",
    "Vendor_Postal_Code",
    "Purchaser_Company",
    "Purchaser_Contact_Name",
    "Purchaser_Address",
    "Purchaser_Phone_Number",
    "Purchaser_Email",
    "Purchaser_City",
    "Purchaser_Province",
    "Purchaser_Postal_Code",
];

pub fn column_order(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::Lease => LEASE_COLUMNS,
        DocumentType::Retail => RETAIL_COLUMNS,
    }
}

/// Form values take precedence over extracted values on every shared key.
pub fn merge(extracted: FieldMap, form: FieldMap) -> FieldMap {
    extracted.overlay(form)
}

/// Keep exactly `columns`, in order. Unknown keys are dropped and missing
/// columns are empty.
pub fn project(
    merged: &FieldMap,
    columns: &'static [&'static str],
) -> Vec<(&'static str, CellValue)> {
    columns
        .iter()
        .map(|column| (*column, merged.get(column).cloned().unwrap_or_default()))
        .collect()
}

pub fn assemble(document_type: DocumentType, extracted: FieldMap, form: FieldMap) -> FinalRecord {
    let extracted_len = extracted.len();
    let form_len = form.len();
    let merged = merge(extracted, form);
    let columns = column_order(document_type);

    let dropped = merged
        .keys()
        .filter(|key| !columns.contains(key))
        .count();
    debug!(
        document_type = %document_type,
        extracted = extracted_len,
        form = form_len,
        merged = merged.len(),
        dropped,
        "Record assembled"
    );

    FinalRecord::new(document_type, project(&merged, columns))
}
