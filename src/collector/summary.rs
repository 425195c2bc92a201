use crate::collector::FileRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub total_files: usize,
    pub total_bytes: u64,
    /// Ordered by extension, ascending.
    pub files_by_extension: BTreeMap<String, usize>,
}

impl CollectionSummary {
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut files_by_extension = BTreeMap::new();
        for record in records {
            *files_by_extension.entry(record.extension.clone()).or_insert(0) += 1;
        }

        Self {
            total_files: records.len(),
            total_bytes: records.iter().map(FileRecord::size).sum(),
            files_by_extension,
        }
    }

    pub fn histogram_lines(&self) -> Vec<String> {
        self.files_by_extension
            .iter()
            .map(|(ext, count)| format!("  {}: {} arquivo(s)", ext, count))
            .collect()
    }
}
