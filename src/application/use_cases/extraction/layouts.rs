// ============================================================
// DEAL SHEET LAYOUTS
// ============================================================
// Cell coordinates of the known lease and retail templates.
// A template change only touches the tables in this file.

use super::{FieldSpec, JoinedListSpec, Normalizer, PairedListSpec, SheetLayout};
use crate::domain::deal::DocumentType;

const fn field(name: &'static str, cell: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        cell,
        normalizer: Normalizer::Raw,
    }
}

const fn normalized(name: &'static str, cell: &'static str, normalizer: Normalizer) -> FieldSpec {
    FieldSpec {
        name,
        cell,
        normalizer,
    }
}

const LEASE_FIELDS: &[FieldSpec] = &[
    field("File Number", "H7"),
    field("Year Built", "G91"),
    field("Building Size (sf)", "G92"),
    field("Single/Multi-Tenant", "G90"),
    normalized("Lease Start Date", "G87", Normalizer::Date),
    normalized("Lease End Date", "G89", Normalizer::Date),
    normalized("Term Length (Years)", "G88", Normalizer::MonthsToYears),
    field("Unit Size (SF)", "G86"),
    normalized("Initial Net Rate (PSF)", "E38", Normalizer::Currency),
    field("Tenant Name", "B15"),
    field("Property Type", "D86"),
    normalized(
        "Leasehold Improvements & Other Incentives (TI)",
        "D90",
        Normalizer::DefaultText("$0.00"),
    ),
    field("Net Effective Rate", "D92"),
    field("Type of Lease", "B3"),
    normalized("Rate", "E3", Normalizer::Rate),
    normalized("Total Operating Expenses", "D88", Normalizer::Currency),
    field("Client", "B5"),
    field("Lessor_Company", "B7"),
    field("Lessor_Contact_Name", "B8"),
    field("Lessor_Address", "B9"),
    field("Lessor_Phone_Number", "B10"),
    field("Lessor_Email", "B11"),
    field("Lessor_City", "B12"),
    field("Lessor_Province", "B13"),
    field("Lessor_Postal_Code", "E13"),
    field("Lessee_Company", "B15"),
    field("Lessee_Contact_Name", "B16"),
    field("Lessee_Address", "B17"),
    field("Lessee_Phone_Number", "B18"),
    field("Lessee_Email", "B19"),
    field("Lessee_City", "B20"),
    field("Lessee_Province", "B21"),
    field("Lessee_Postal_Code", "E21"),
];

const LEASE_JOINED_LISTS: &[JoinedListSpec] = &[JoinedListSpec {
    name: "Source/ Agent",
    column: "D",
    first_row: 71,
    last_row: 80,
}];

const LEASE_PAIRED_LISTS: &[PairedListSpec] = &[PairedListSpec {
    name: "Comments",
    key_column: "A",
    value_column: "E",
    first_row: 38,
    last_row: 47,
}];

const RETAIL_FIELDS: &[FieldSpec] = &[
    field("Year Built", "G91"),
    field("Sold Price", "C45"),
    normalized("Sale Date", "C70", Normalizer::Date),
    normalized("Price PSF", "F72", Normalizer::Currency),
    field("Client", "B3"),
    field("Vendor_Company", "B5"),
    field("Vendor_Contact_Name", "B6"),
    field("Vendor_Address", "B7"),
    field("Vendor_Phone_Number", "B8"),
    field("Vendor_Email", "B9"),
    field("Vendor_City", "B10"),
    field("Vendor_Province", "B11"),
    field("Vendor_Postal_Code", "E11"),
    field("Purchaser_Company", "B19"),
    field("Purchaser_Contact_Name", "B20"),
    field("Purchaser_Address", "B21"),
    field("Purchaser_Phone_Number", "B22"),
    field("Purchaser_Email", "B23"),
    field("Purchaser_City", "B24"),
    field("Purchaser_Province", "B25"),
    field("Purchaser_Postal_Code", "E25"),
];

pub static LEASE_LAYOUT: SheetLayout = SheetLayout {
    document_type: DocumentType::Lease,
    address_cell: "C29",
    fields: LEASE_FIELDS,
    joined_lists: LEASE_JOINED_LISTS,
    paired_lists: LEASE_PAIRED_LISTS,
};

pub static RETAIL_LAYOUT: SheetLayout = SheetLayout {
    document_type: DocumentType::Retail,
    address_cell: "C39",
    fields: RETAIL_FIELDS,
    joined_lists: &[],
    paired_lists: &[],
};

pub fn layout_for(document_type: DocumentType) -> &'static SheetLayout {
    match document_type {
        DocumentType::Lease => &LEASE_LAYOUT,
        DocumentType::Retail => &RETAIL_LAYOUT,
    }
}
