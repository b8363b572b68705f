//! Ordering and serialization of the aggregated version table.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::Path;

use crate::aggregate::{Aggregator, Orientation};
use crate::domain::compare_releases;
use crate::error::Result;

/// Ordered key -> sorted values table, ready to serialize
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionTable {
    entries: Vec<(String, Vec<String>)>,
}

impl VersionTable {
    /// Orders the aggregator's entries for output.
    ///
    /// Release strings (forward keys, inverted values) use numeric-aware
    /// release ordering. Extracted versions are fixed-width digit strings and
    /// sort as plain strings.
    pub fn from_aggregator(aggregator: &Aggregator) -> Self {
        let orientation = aggregator.orientation();

        let mut entries: Vec<(String, Vec<String>)> = aggregator
            .iter()
            .map(|(key, values)| {
                let mut values: Vec<String> = values.iter().cloned().collect();
                if orientation == Orientation::Inverted {
                    values.sort_by(|a, b| compare_releases(a, b));
                }
                (key.clone(), values)
            })
            .collect();

        match orientation {
            Orientation::Forward => entries.sort_by(|(a, _), (b, _)| compare_releases(a, b)),
            Orientation::Inverted => entries.sort_by(|(a, _), (b, _)| a.cmp(b)),
        }

        VersionTable { entries }
    }

    pub fn entries(&self) -> &[(String, Vec<String>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact JSON, e.g. `{"10.0.0":["170"]}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for VersionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

/// Serializes the whole table before touching the file.
pub fn write_table(path: &Path, table: &VersionTable) -> Result<()> {
    let json = table.to_json()?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_forward_keys_numeric_order() {
        let mut aggregator = Aggregator::new(Orientation::Forward);
        aggregator.record_pair("10.0.0", "170");
        aggregator.record_pair("9.0.0", "138");
        aggregator.record_pair("4.4", "007");

        let table = VersionTable::from_aggregator(&aggregator);
        assert_eq!(
            table.to_json().unwrap(),
            r#"{"4.4":["007"],"9.0.0":["138"],"10.0.0":["170"]}"#
        );
    }

    #[test]
    fn test_forward_values_lexicographic() {
        let mut aggregator = Aggregator::new(Orientation::Forward);
        aggregator.record_pair("8.1.0", "131");
        aggregator.record_pair("8.1.0", "124");
        aggregator.record_pair("8.1.0", "126");

        let table = VersionTable::from_aggregator(&aggregator);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].1, vec!["124", "126", "131"]);
        assert_eq!(table.to_json().unwrap(), r#"{"8.1.0":["124","126","131"]}"#);
    }

    #[test]
    fn test_inverted_keys_plain_values_numeric() {
        let mut aggregator = Aggregator::new(Orientation::Inverted);
        aggregator.record_pair("10.0.0", "170");
        aggregator.record_pair("9.0.0", "170");
        aggregator.record_pair("10.0", "170");
        aggregator.record_pair("6.0.0", "064");

        let table = VersionTable::from_aggregator(&aggregator);
        assert_eq!(
            table.to_json().unwrap(),
            r#"{"064":["6.0.0"],"170":["9.0.0","10.0","10.0.0"]}"#
        );
    }

    #[test]
    fn test_empty_table() {
        let table = VersionTable::from_aggregator(&Aggregator::default());
        assert!(table.is_empty());
        assert_eq!(table.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_write_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("oat_versions.json");

        let mut aggregator = Aggregator::new(Orientation::Forward);
        aggregator.record_pair("10.0.0", "170");
        write_table(&path, &VersionTable::from_aggregator(&aggregator)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"10.0.0":["170"]}"#);
    }

    #[test]
    fn test_write_table_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let result = write_table(&path, &VersionTable::default());
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
