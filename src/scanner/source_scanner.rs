use crate::config::FilterConfig;
use crate::scanner::file_filter::FileFilter;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub struct SourceScanner {
    filter: FileFilter,
}

impl SourceScanner {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            filter: FileFilter::new(config),
        }
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    /// Walks `root` lazily. A missing or unreadable root yields nothing.
    pub fn candidates<P: AsRef<Path>>(&self, root: P) -> Candidates {
        let filter = self.filter.clone();
        let predicate: EntryPredicate = Box::new(move |e: &DirEntry| should_traverse(&filter, e));
        let walker = WalkDir::new(root.as_ref())
            .follow_links(false)
            .into_iter()
            .filter_entry(predicate);

        Candidates {
            walker,
            filter: self.filter.clone(),
            skipped: Vec::new(),
        }
    }
}

type EntryPredicate = Box<dyn FnMut(&DirEntry) -> bool>;

/// Candidate file paths in directory-enumeration order.
pub struct Candidates {
    walker: walkdir::FilterEntry<walkdir::IntoIter, EntryPredicate>,
    filter: FileFilter,
    skipped: Vec<String>,
}

impl Candidates {
    /// Traversal faults met so far (unreadable directories and the like).
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}

impl Iterator for Candidates {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    self.skipped.push(err.to_string());
                    continue;
                }
            };

            if self.filter.is_code_file(entry.path()) && is_file_like(&entry) {
                return Some(entry.into_path());
            }
        }
    }
}

/// Regular files, and symlinks that do not resolve to a directory. A dangling
/// link stays a candidate so that reading it reports the fault.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }

    file_type.is_symlink() && !entry.path().is_dir()
}

fn should_traverse(filter: &FileFilter, entry: &DirEntry) -> bool {
    // The root is never pruned, whatever its name
    if entry.depth() == 0 {
        return true;
    }

    if entry.file_type().is_dir() {
        return filter.should_traverse_directory(entry.path());
    }

    true
}
