use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::info;

use super::RecordExporter;
use crate::domain::deal::{CellValue, FinalRecord};
use crate::domain::error::{AppError, Result};

const SHEET_NAME: &str = "Sheet1";

/// Single-sheet workbook writer
#[derive(Default)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }

    fn write(&self, record: &FinalRecord, path: &Path) -> std::result::Result<(), XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, (header, value)) in record.columns().iter().enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(0, col, *header, &header_format)?;
            match value {
                CellValue::Number(n) => {
                    worksheet.write_number(1, col, *n)?;
                }
                CellValue::Empty => {}
                // Dates go out as DD/MM/YYYY text, like every other normalized value.
                other => {
                    worksheet.write_string(1, col, other.render())?;
                }
            }
        }

        workbook.save(path)
    }
}

impl RecordExporter for XlsxExporter {
    fn export(&self, record: &FinalRecord, path: &Path) -> Result<()> {
        self.write(record, path).map_err(|e| {
            AppError::ExportError(format!(
                "Failed to write workbook {}: {}",
                path.display(),
                e
            ))
        })?;
        info!(
            path = %path.display(),
            columns = record.len(),
            document_type = %record.document_type,
            "Record exported"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deal::DocumentType;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use chrono::NaiveDate;

    #[test]
    fn test_writes_header_and_single_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_record.xlsx");
        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let record = FinalRecord::new(
            DocumentType::Lease,
            vec![
                ("Street Name", CellValue::text("Main")),
                ("Year Built", CellValue::Number(1998.0)),
                ("Roll Number", CellValue::Empty),
                ("Lease Start Date", CellValue::Date(start)),
            ],
        );

        XlsxExporter::new().export(&record, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(range.height(), 2);
        assert_eq!(
            range.get_value((0, 2)),
            Some(&Data::String("Roll Number".to_string()))
        );
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("Main".to_string())));
        assert_eq!(range.get_value((1, 1)), Some(&Data::Float(1998.0)));
        assert_eq!(
            range.get_value((1, 3)),
            Some(&Data::String("01/03/2024".to_string()))
        );
    }

    #[test]
    fn test_export_replaces_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_record.xlsx");
        let first = FinalRecord::new(
            DocumentType::Retail,
            vec![("City", CellValue::text("Calgary"))],
        );
        let second = FinalRecord::new(
            DocumentType::Retail,
            vec![("City", CellValue::text("Airdrie"))],
        );

        let exporter = XlsxExporter::new();
        exporter.export(&first, &path).unwrap();
        exporter.export(&second, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(range.height(), 2);
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("Airdrie".to_string())));
    }
}
