// ============================================================
// DEAL SHEET DOMAIN LAYER
// ============================================================
// Value types shared by extraction, form mapping and export
// No I/O, no workbook access

mod address;
mod cell_ref;
mod cell_value;
mod document_type;
mod field_map;
mod record;

pub use address::Address;
pub use cell_ref::CellRef;
pub use cell_value::{CellValue, DATE_FORMAT};
pub use document_type::DocumentType;
pub use field_map::FieldMap;
pub use record::FinalRecord;
