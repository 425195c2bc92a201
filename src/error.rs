use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AllCodesError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to write output document {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single candidate that could not be read. Recovered locally by the
/// collector; never aborts a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Erro ao ler {}: {message}", .path.display())]
pub struct ReadFault {
    pub path: PathBuf,
    pub message: String,
}

impl ReadFault {
    pub fn new<P: Into<PathBuf>>(path: P, error: &std::io::Error) -> Self {
        Self {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for AllCodesError {
    fn user_message(&self) -> String {
        match self {
            AllCodesError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            AllCodesError::OutputWrite { path, source } => {
                format!("Could not write {}: {}", path.display(), source)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            AllCodesError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config.".to_string()
            ),
            AllCodesError::OutputWrite { .. } => Some(
                "Ensure the output directory exists and is writable, or choose another location with --output.".to_string()
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AllCodesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_user_friendly_messages() {
        let error = AllCodesError::Config {
            message: "no extensions".to_string(),
        };
        assert!(error.user_message().contains("Configuration error"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_output_write_message_names_path() {
        let error = AllCodesError::OutputWrite {
            path: PathBuf::from("/nope/AllCodes.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing directory"),
        };
        let message = error.user_message();
        assert!(message.contains("/nope/AllCodes.txt"));
        assert!(message.contains("missing directory"));
        assert!(error.suggestion().unwrap().contains("--output"));
    }

    #[test]
    fn test_read_fault_diagnostic_line() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let fault = ReadFault::new("src/readme.md", &io_error);
        assert_eq!(
            fault.to_string(),
            "Erro ao ler src/readme.md: stream did not contain valid UTF-8"
        );
    }
}
