// ============================================================
// FIELD MAP
// ============================================================
// Ordered field name -> value pairs with unique keys

use super::CellValue;

/// Insertion-ordered mapping used for both extracted and form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, CellValue)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; an existing key keeps its position and takes the new value
    pub fn insert(&mut self, name: impl Into<String>, value: CellValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries holding a non-empty value
    pub fn populated_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| !v.is_empty()).count()
    }

    /// Apply `overrides` on top of this map. Keys present in both take the
    /// override value, including when the override is empty.
    pub fn overlay(mut self, overrides: FieldMap) -> FieldMap {
        for (name, value) in overrides.entries {
            self.insert(name, value);
        }
        self
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = FieldMap::new();
        map.insert("City", CellValue::text("A"));
        map.insert("Zoning", CellValue::text("C-COR"));
        map.insert("City", CellValue::text("B"));

        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["City", "Zoning"]);
        assert_eq!(map.get("City"), Some(&CellValue::text("B")));
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let extracted: FieldMap = vec![
            ("City", CellValue::text("A")),
            ("Year Built", CellValue::Number(1998.0)),
        ]
        .into_iter()
        .collect();
        let form: FieldMap = vec![
            ("City", CellValue::text("B")),
            ("Year Built", CellValue::Empty),
            ("Zoning", CellValue::text("I-G")),
        ]
        .into_iter()
        .collect();

        let merged = extracted.overlay(form);
        assert_eq!(merged.get("City"), Some(&CellValue::text("B")));
        assert_eq!(merged.get("Year Built"), Some(&CellValue::Empty));
        assert_eq!(merged.get("Zoning"), Some(&CellValue::text("I-G")));
        assert_eq!(merged.populated_count(), 2);
    }
}
