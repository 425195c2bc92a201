use crate::error::{AllCodesError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILE: &str = "AllCodes.txt";
pub const DEFAULT_CONFIG_FILE: &str = "allcodes.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub filters: FilterConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Dotted suffixes, matched exactly (".py", not "py").
    pub extensions: Vec<String>,
    /// Directory base names pruned at any depth.
    pub exclude_dirs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub root: PathBuf,
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filters: FilterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                ".php".to_string(),
                ".js".to_string(),
                ".css".to_string(),
                ".py".to_string(),
                ".json".to_string(),
                ".md".to_string(),
                ".xml".to_string(),
                ".html".to_string(),
                ".vue".to_string(),
                ".ts".to_string(),
                ".jsx".to_string(),
                ".tsx".to_string(),
                ".sql".to_string(),
            ],
            exclude_dirs: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "__pycache__".to_string(),
                "vendor".to_string(),
                ".vscode".to_string(),
                ".idea".to_string(),
                "dist".to_string(),
                "build".to_string(),
            ],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(AllCodesError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| AllCodesError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| AllCodesError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    /// Only an explicitly named file is ever read; without one the built-in
    /// sets apply.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref root) = cli_args.root {
            self.output.root = root.clone();
        }

        if let Some(ref output_file) = cli_args.output_file {
            self.output.output_file = output_file.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| AllCodesError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| AllCodesError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.filters.extensions.is_empty() {
            return Err(AllCodesError::Config {
                message: "At least one file extension must be specified".to_string(),
            });
        }

        if let Some(bad) = self
            .filters
            .extensions
            .iter()
            .find(|ext| !ext.starts_with('.') || ext.len() < 2)
        {
            return Err(AllCodesError::Config {
                message: format!("Extension '{}' must be a dotted suffix such as \".py\"", bad),
            });
        }

        if self.filters.exclude_dirs.iter().any(|dir| dir.is_empty()) {
            return Err(AllCodesError::Config {
                message: "Excluded directory names cannot be empty".to_string(),
            });
        }

        if self.output.output_file.as_os_str().is_empty() {
            return Err(AllCodesError::Config {
                message: "Output file path cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// True when a previous output document could be picked up by a later
    /// run over the same root.
    pub fn output_may_be_collected(&self) -> bool {
        let has_allowed_suffix = self
            .output
            .output_file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.filters
                    .extensions
                    .iter()
                    .any(|allowed| allowed.strip_prefix('.') == Some(ext))
            });

        if !has_allowed_suffix {
            return false;
        }

        match (
            std::path::absolute(&self.output.root),
            std::path::absolute(&self.output.output_file),
        ) {
            (Ok(root), Ok(output)) => output.starts_with(root),
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }

    pub fn with_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filters.extensions.len(), 13);
        assert!(config.filters.extensions.contains(&".py".to_string()));
        assert!(config.filters.extensions.contains(&".sql".to_string()));
        assert!(config.filters.exclude_dirs.contains(&"node_modules".to_string()));
        assert_eq!(config.output.root, PathBuf::from("."));
        assert_eq!(config.output.output_file, PathBuf::from("AllCodes.txt"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.filters.extensions = vec!["py".to_string()];
        assert!(config.validate().is_err());

        config.filters.extensions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_exclude_dir_rejected() {
        let mut config = Config::default();
        config.filters.exclude_dirs.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let mut config = Config::default();
        config.filters.extensions = vec![".rs".to_string()];
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();

        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded_config.filters.extensions, vec![".rs"]);
        assert_eq!(loaded_config.filters.exclude_dirs, config.filters.exclude_dirs);
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(AllCodesError::Config { .. })));
    }

    #[test]
    fn test_no_implicit_config_file() {
        let config = Config::load_or_default(None::<&Path>).unwrap();
        assert_eq!(config.filters.extensions, FilterConfig::default().extensions);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        let overrides = CliOverrides::new()
            .with_root(Some(PathBuf::from("project")))
            .with_output_file(Some(PathBuf::from("bundle.txt")));

        config.merge_with_cli_args(&overrides);

        assert_eq!(config.output.root, PathBuf::from("project"));
        assert_eq!(config.output.output_file, PathBuf::from("bundle.txt"));
    }

    #[test]
    fn test_output_may_be_collected() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.output.root = temp_dir.path().to_path_buf();

        config.output.output_file = temp_dir.path().join("AllCodes.txt");
        assert!(!config.output_may_be_collected());

        config.output.output_file = temp_dir.path().join("AllCodes.md");
        assert!(config.output_may_be_collected());

        config.output.output_file = std::env::temp_dir().join("elsewhere").join("AllCodes.md");
        assert!(!config.output_may_be_collected());
    }

    #[test]
    fn test_malformed_config_file() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "[filters\nextensions = 1").unwrap();

        let result = Config::load_from_file(temp_file.path());
        match result {
            Err(AllCodesError::Config { message }) => assert!(message.contains("Failed to parse")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
