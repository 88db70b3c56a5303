// ============================================================
// RECORD EXPORT
// ============================================================
// Writes a final record as a header row plus one data row.
// The target file is replaced in full on every export.

mod csv_exporter;
mod xlsx_exporter;

use std::path::Path;

use crate::domain::deal::FinalRecord;
use crate::domain::error::Result;
use crate::infrastructure::config::OutputFormat;

pub use csv_exporter::CsvExporter;
pub use xlsx_exporter::XlsxExporter;

pub trait RecordExporter {
    fn export(&self, record: &FinalRecord, path: &Path) -> Result<()>;
}

pub fn exporter_for(format: OutputFormat) -> Box<dyn RecordExporter> {
    match format {
        OutputFormat::Xlsx => Box::new(XlsxExporter::new()),
        OutputFormat::Csv => Box::new(CsvExporter::new()),
    }
}
