// ============================================================
// WORKBOOK READER
// ============================================================
// Opens an xlsx/xlsm upload and exposes its first worksheet by cell

use std::path::Path;

use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use tracing::debug;

use crate::application::use_cases::extraction::CellSource;
use crate::domain::deal::{CellRef, CellValue};
use crate::domain::error::{AppError, Result};

/// First worksheet of a workbook, held in memory
pub struct WorkbookSheet {
    range: Range<Data>,
}

impl WorkbookSheet {
    /// Open `path` and load its first worksheet.
    ///
    /// Anything that is not a readable workbook fails with `FileFormatError`.
    pub fn open(path: &Path) -> Result<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
            AppError::FileFormatError(format!(
                "Failed to open Excel file {}: {}",
                path.display(),
                e
            ))
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::FileFormatError("No worksheet found".to_string()))?
            .map_err(|e| {
                AppError::FileFormatError(format!(
                    "Failed to read Excel range {}: {}",
                    path.display(),
                    e
                ))
            })?;

        debug!(
            path = %path.display(),
            rows = range.height(),
            columns = range.width(),
            "Worksheet loaded"
        );

        Ok(Self { range })
    }

    pub fn from_range(range: Range<Data>) -> Self {
        Self { range }
    }
}

impl CellSource for WorkbookSheet {
    fn cell(&self, cell: CellRef) -> CellValue {
        self.range
            .get_value(cell.position())
            .map(to_cell_value)
            .unwrap_or(CellValue::Empty)
    }
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(_) | Data::DateTimeIso(_) => data
            .as_datetime()
            .map(CellValue::Date)
            .unwrap_or(CellValue::Empty),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_cells_outside_range_are_empty() {
        let mut range: Range<Data> = Range::new((2, 1), (4, 3));
        range.set_value((2, 1), Data::String("Lease".to_string()));
        range.set_value((3, 2), Data::Float(42.5));
        range.set_value((4, 3), Data::Int(7));
        let sheet = WorkbookSheet::from_range(range);

        assert_eq!(sheet.cell("B3".parse().unwrap()), CellValue::text("Lease"));
        assert_eq!(sheet.cell("C4".parse().unwrap()), CellValue::Number(42.5));
        assert_eq!(sheet.cell("D5".parse().unwrap()), CellValue::Number(7.0));
        assert_eq!(sheet.cell("A1".parse().unwrap()), CellValue::Empty);
        assert_eq!(sheet.cell("Z99".parse().unwrap()), CellValue::Empty);
    }

    #[test]
    fn test_bool_and_error_cells() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 1));
        range.set_value((0, 0), Data::Bool(true));
        range.set_value((0, 1), Data::Error(calamine::CellErrorType::Div0));
        let sheet = WorkbookSheet::from_range(range);

        assert_eq!(sheet.cell("A1".parse().unwrap()), CellValue::text("TRUE"));
        assert_eq!(sheet.cell("B1".parse().unwrap()), CellValue::Empty);
    }

    #[test]
    fn test_open_rejects_non_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deal.xlsx");
        fs::write(&path, b"not a zip archive").unwrap();

        let err = WorkbookSheet::open(&path).err().unwrap();
        assert!(matches!(err, AppError::FileFormatError(_)));
    }
}
