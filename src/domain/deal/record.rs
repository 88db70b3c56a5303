use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{CellValue, DocumentType};

/// One merged submission projected onto its document type's column order
#[derive(Debug, Clone, PartialEq)]
pub struct FinalRecord {
    pub document_type: DocumentType,
    columns: Vec<(&'static str, CellValue)>,
}

impl FinalRecord {
    pub fn new(document_type: DocumentType, columns: Vec<(&'static str, CellValue)>) -> Self {
        Self {
            document_type,
            columns,
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(name, _)| *name)
    }

    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.columns.iter().map(|(_, value)| value)
    }

    pub fn columns(&self) -> &[(&'static str, CellValue)] {
        &self.columns
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for FinalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
