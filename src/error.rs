//! Error types for temple

use crate::domain::INVALID_CHOICE_MESSAGE;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the temple application
#[derive(Debug, Error)]
pub enum TempleError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Malformed table in {} at line {line}: {message}", .path.display())]
    MalformedTable {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Spreadsheet error in {}: {message}", .path.display())]
    Spreadsheet { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TempleError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TempleError::FileNotFound(_) => 2,
            TempleError::MalformedTable { .. } | TempleError::Spreadsheet { .. } => 3,
            _ => 1,
        }
    }

    /// Map an IO error on `path` to `FileNotFound` when the file is missing,
    /// otherwise to `ReadFile` naming the path
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            TempleError::FileNotFound(path.to_path_buf())
        } else {
            TempleError::ReadFile {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TempleError::FileNotFound(path) => {
                format!(
                    "File not found at {}\n\n\
                    Suggestions:\n\
                    • Check the path and file name\n\
                    • Relative paths in temple.toml resolve against the config file's directory\n\
                    • Pass an explicit path, e.g. 'temple journal notes/journal.txt'",
                    path.display()
                )
            }
            TempleError::InvalidChoice(_) => INVALID_CHOICE_MESSAGE.to_string(),
            TempleError::MalformedTable { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Columns must be separated by tabs\n\
                    • Rows may not have more fields than the header\n\
                    • Use --skip-rows to skip preamble lines before the header",
                    self
                )
            }
            TempleError::Spreadsheet { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the workbook opens in a spreadsheet program (.xlsx, .xls, .ods)\n\
                    • Use --sheet to pick the sheet, e.g. --sheet 'Main Chamber'",
                    self
                )
            }
            TempleError::Config(msg) => {
                if msg.contains("preview_rows") {
                    format!("{}\n\nExample in temple.toml: preview_rows = 5", msg)
                } else {
                    msg.clone()
                }
            }
            TempleError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Valid keys in temple.toml: journal, locations, locations_skip_rows, \
                    artifacts, artifacts_sheet, artifacts_skip_rows, preview_rows",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TempleError
pub type Result<T> = std::result::Result<T, TempleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TempleError::FileNotFound(PathBuf::from("x")).exit_code(), 2);
        let malformed = TempleError::MalformedTable {
            path: PathBuf::from("locations.tsv"),
            line: 4,
            message: "too many fields".to_string(),
        };
        assert_eq!(malformed.exit_code(), 3);
        assert_eq!(TempleError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_from_io_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match TempleError::from_io(Path::new("journal.txt"), err) {
            TempleError::FileNotFound(path) => assert_eq!(path, PathBuf::from("journal.txt")),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_from_io_other_kind_names_path() {
        let err = std::io::Error::new(std::io::ErrorKind::InvalidData, "not UTF-8");
        let err = TempleError::from_io(Path::new("day1.txt"), err);
        assert!(matches!(err, TempleError::ReadFile { .. }));
        assert_eq!(err.to_string(), "Failed to read day1.txt: not UTF-8");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_spreadsheet_suggestions() {
        let err = TempleError::Spreadsheet {
            path: PathBuf::from("artifacts.xlsx"),
            message: "sheet 'Main Chamber' not found".to_string(),
        };
        assert_eq!(err.exit_code(), 3);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("artifacts.xlsx"));
        assert!(msg.contains("--sheet"));
    }

    #[test]
    fn test_file_not_found_suggestions() {
        let err = TempleError::FileNotFound(PathBuf::from("/tmp/journal.txt"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("File not found at /tmp/journal.txt"));
        assert!(msg.contains("Suggestions"));
        assert!(msg.contains("temple.toml"));
    }

    #[test]
    fn test_malformed_table_suggestions() {
        let err = TempleError::MalformedTable {
            path: PathBuf::from("locations.tsv"),
            line: 3,
            message: "3 fields, expected 2".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("locations.tsv at line 3"));
        assert!(msg.contains("--skip-rows"));
    }

    #[test]
    fn test_config_suggestions() {
        let err = TempleError::Config("preview_rows must be at least 1".to_string());
        assert!(err.display_with_suggestions().contains("preview_rows = 5"));

        let err = TempleError::Config("--rows must be at least 1".to_string());
        assert_eq!(err.display_with_suggestions(), "--rows must be at least 1");
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TempleError::Io(std::io::Error::other("disk on fire"));
        assert_eq!(err.display_with_suggestions(), "IO error: disk on fire");
    }
}
