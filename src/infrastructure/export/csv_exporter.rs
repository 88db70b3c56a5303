use std::path::Path;

use csv::Writer;
use tracing::info;

use super::RecordExporter;
use crate::domain::deal::FinalRecord;
use crate::domain::error::{AppError, Result};

/// Two-line CSV writer: headers, then values
pub struct CsvExporter {
    delimiter: u8,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl RecordExporter for CsvExporter {
    fn export(&self, record: &FinalRecord, path: &Path) -> Result<()> {
        let to_export_error = |e: csv::Error| {
            AppError::ExportError(format!("Failed to write CSV {}: {}", path.display(), e))
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(to_export_error)?;
        write_rows(&mut writer, record).map_err(to_export_error)?;
        writer.flush()?;

        info!(
            path = %path.display(),
            columns = record.len(),
            document_type = %record.document_type,
            "Record exported"
        );
        Ok(())
    }
}

fn write_rows<W: std::io::Write>(writer: &mut Writer<W>, record: &FinalRecord) -> csv::Result<()> {
    writer.write_record(record.headers())?;
    writer.write_record(record.values().map(|v| v.render()))?;
    Ok(())
}
