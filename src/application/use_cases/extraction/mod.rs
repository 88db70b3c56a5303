use std::path::Path;

use tracing::{debug, warn};

use crate::application::use_cases::address_parser::split_address_cell;
use crate::application::use_cases::normalizers::{
    extract_rate, format_currency, format_date, months_label, months_to_years, or_default,
};
use crate::domain::deal::{CellRef, CellValue, DocumentType, FieldMap};
use crate::domain::error::Result;
use crate::infrastructure::workbook::WorkbookSheet;

mod layouts;

pub use layouts::{layout_for, LEASE_LAYOUT, RETAIL_LAYOUT};

pub const UNIT_NUMBER: &str = "Unit Number";
pub const STREET_NUMBER: &str = "Street Number";
pub const STREET_NAME: &str = "Street Name";
pub const ROUTE_TYPE: &str = "Route Type";

/// Read access to the cells of one worksheet
pub trait CellSource {
    /// Value at `cell`; cells outside the used range are empty
    fn cell(&self, cell: CellRef) -> CellValue;
}

/// Conversion applied to a raw cell before it enters the mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    Raw,
    Date,
    Currency,
    Rate,
    MonthsToYears,
    /// Falsy values are replaced with the given text
    DefaultText(&'static str),
}

impl Normalizer {
    pub fn apply(&self, value: CellValue) -> CellValue {
        match self {
            Normalizer::Raw => value,
            Normalizer::Date => format_date(value),
            Normalizer::Currency => format_currency(value),
            Normalizer::Rate => extract_rate(value),
            Normalizer::MonthsToYears => months_to_years(value),
            Normalizer::DefaultText(default) => or_default(value, default),
        }
    }
}

/// A single named cell
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub cell: &'static str,
    pub normalizer: Normalizer,
}

/// Non-empty cells of one column, joined with ", "
#[derive(Debug, Clone, Copy)]
pub struct JoinedListSpec {
    pub name: &'static str,
    pub column: &'static str,
    pub first_row: u32,
    pub last_row: u32,
}

/// Rows pairing a term in months with a rate, rendered "<N> months@$<rate>"
#[derive(Debug, Clone, Copy)]
pub struct PairedListSpec {
    pub name: &'static str,
    pub key_column: &'static str,
    pub value_column: &'static str,
    pub first_row: u32,
    pub last_row: u32,
}

#[derive(Debug)]
pub struct SheetLayout {
    pub document_type: DocumentType,
    pub address_cell: &'static str,
    pub fields: &'static [FieldSpec],
    pub joined_lists: &'static [JoinedListSpec],
    pub paired_lists: &'static [PairedListSpec],
}

/// Position-based extractor for one deal sheet template
pub struct DealSheetExtractor {
    layout: &'static SheetLayout,
}

impl DealSheetExtractor {
    pub fn new(layout: &'static SheetLayout) -> Self {
        Self { layout }
    }

    pub fn for_document(document_type: DocumentType) -> Self {
        Self::new(layout_for(document_type))
    }

    /// Open the workbook at `path` and extract from its first worksheet
    pub fn extract_file(&self, path: &Path) -> Result<FieldMap> {
        let sheet = WorkbookSheet::open(path)?;
        self.extract(&sheet)
    }

    /// Build the extracted mapping from a worksheet.
    ///
    /// The sheet is never checked against the template; a workbook of the
    /// other type yields whatever happens to sit in the layout's cells.
    pub fn extract<S: CellSource>(&self, sheet: &S) -> Result<FieldMap> {
        let layout = self.layout;
        let mut mapping = FieldMap::new();

        // Non-empty cells actually read from the sheet, before any defaults apply.
        let mut found = 0usize;

        let address_cell: CellRef = layout.address_cell.parse()?;
        let raw_address = sheet.cell(address_cell);
        if !raw_address.is_empty() {
            found += 1;
        }
        let address = split_address_cell(&raw_address);
        mapping.insert(UNIT_NUMBER, optional_text(address.unit_number));
        mapping.insert(STREET_NUMBER, optional_text(address.street_number));
        mapping.insert(STREET_NAME, optional_text(address.street_name));
        mapping.insert(ROUTE_TYPE, optional_text(address.route_type));

        for spec in layout.fields {
            let cell: CellRef = spec.cell.parse()?;
            let raw = sheet.cell(cell);
            if !raw.is_empty() {
                found += 1;
            }
            mapping.insert(spec.name, spec.normalizer.apply(raw));
        }

        for spec in layout.joined_lists {
            let joined = join_column(sheet, spec)?;
            if !joined.is_empty() {
                found += 1;
            }
            mapping.insert(spec.name, CellValue::Text(joined));
        }

        for spec in layout.paired_lists {
            let joined = join_pairs(sheet, spec)?;
            if !joined.is_empty() {
                found += 1;
            }
            mapping.insert(spec.name, CellValue::Text(joined));
        }

        debug!(
            document_type = %layout.document_type,
            fields = mapping.len(),
            found,
            "Deal sheet extracted"
        );
        if found == 0 {
            warn!(
                document_type = %layout.document_type,
                "No values found; the workbook may not follow the {} template",
                layout.document_type
            );
        }

        Ok(mapping)
    }
}

fn optional_text(value: Option<String>) -> CellValue {
    value.map(CellValue::Text).unwrap_or(CellValue::Empty)
}

fn join_column<S: CellSource>(sheet: &S, spec: &JoinedListSpec) -> Result<String> {
    let mut values = Vec::new();
    for row in spec.first_row..=spec.last_row {
        let value = sheet.cell(CellRef::from_parts(spec.column, row)?);
        if value.is_truthy() {
            values.push(value.render());
        }
    }
    Ok(values.join(", "))
}

fn join_pairs<S: CellSource>(sheet: &S, spec: &PairedListSpec) -> Result<String> {
    let mut pairs = Vec::new();
    for row in spec.first_row..=spec.last_row {
        let term = months_label(sheet.cell(CellRef::from_parts(spec.key_column, row)?));
        let rate = format_currency(sheet.cell(CellRef::from_parts(spec.value_column, row)?));
        if term.is_truthy() && rate.is_truthy() {
            pairs.push(format!("{}@{}", term.render(), rate.render()));
        }
    }
    Ok(pairs.join(", "))
}
