use crate::error::ReadFault;
use crate::scanner::FileFilter;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub content: String,
    pub extension: String,
}

impl FileRecord {
    pub fn new<P, C, E>(path: P, content: C, extension: E) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        E: Into<String>,
    {
        Self {
            path: path.into(),
            content: content.into(),
            extension: extension.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[derive(Debug, Clone)]
pub struct CollectionProgress {
    pub records: Vec<FileRecord>,
    pub failures: Vec<ReadFault>,
    pub candidates_seen: usize,
    pub start_time: Instant,
}

impl CollectionProgress {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
            candidates_seen: 0,
            start_time: Instant::now(),
        }
    }

    pub fn bytes_collected(&self) -> u64 {
        self.records.iter().map(FileRecord::size).sum()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for CollectionProgress {
    fn default() -> Self {
        Self::new()
    }
}

pub enum CollectionEvent<'a> {
    Collected(&'a FileRecord),
    Failed(&'a ReadFault),
}

pub struct FileCollector {
    root: PathBuf,
}

impl FileCollector {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn read_candidate(&self, path: &Path) -> Result<FileRecord, ReadFault> {
        // UTF-8 only; anything else surfaces as InvalidData
        let content =
            fs::read_to_string(path).map_err(|e| ReadFault::new(display_path(path), &e))?;

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let extension = FileFilter::extension_of(path).unwrap_or_default();

        Ok(FileRecord::new(
            relative.to_string_lossy(),
            content,
            extension,
        ))
    }

    pub fn collect<I, F>(&self, candidates: I, mut on_event: F) -> CollectionProgress
    where
        I: IntoIterator<Item = PathBuf>,
        F: FnMut(CollectionEvent<'_>),
    {
        let mut progress = CollectionProgress::new();

        for candidate in candidates {
            progress.candidates_seen += 1;

            match self.read_candidate(&candidate) {
                Ok(record) => {
                    on_event(CollectionEvent::Collected(&record));
                    progress.records.push(record);
                }
                Err(fault) => {
                    on_event(CollectionEvent::Failed(&fault));
                    progress.failures.push(fault);
                }
            }
        }

        progress
    }
}

/// `path` without `.` components, so a walk from "." reports "readme.md".
fn display_path(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
