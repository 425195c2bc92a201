use crate::config::FilterConfig;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct FileFilter {
    code_extensions: HashSet<String>,
    exclude_dirs: HashSet<String>,
}

impl FileFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            code_extensions: config.extensions.iter().cloned().collect(),
            exclude_dirs: config.exclude_dirs.iter().cloned().collect(),
        }
    }

    /// Dotted suffix of `path` (".py"), or `None` for extensionless names and
    /// dot-files such as ".gitignore".
    pub fn extension_of(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| format!(".{}", ext))
    }

    pub fn is_code_file(&self, path: &Path) -> bool {
        // Case-sensitive: ".PY" is not ".py"
        Self::extension_of(path).is_some_and(|ext| self.code_extensions.contains(&ext))
    }

    pub fn should_traverse_directory(&self, path: &Path) -> bool {
        match path.file_name().and_then(|s| s.to_str()) {
            Some(dir_name) => !self.exclude_dirs.contains(dir_name),
            None => true,
        }
    }

    pub fn get_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.code_extensions.iter().cloned().collect();
        extensions.sort();
        extensions
    }

    pub fn get_exclude_dirs(&self) -> Vec<String> {
        let mut dirs: Vec<String> = self.exclude_dirs.iter().cloned().collect();
        dirs.sort();
        dirs
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        let config = FilterConfig::default();
        Self::new(&config)
    }
}
