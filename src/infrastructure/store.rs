//! File system access for expedition data files

use crate::error::{Result, TempleError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of journal files picked up when scanning a directory
pub const JOURNAL_EXTENSION: &str = "txt";

/// Abstract source of text files
pub trait TextStore {
    /// Read a whole file as UTF-8 text. A missing file is `FileNotFound`.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Journal files under `root`, sorted by path
    fn journal_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// File system implementation of TextStore
#[derive(Debug, Clone, Default)]
pub struct FileSystemStore;

impl FileSystemStore {
    pub fn new() -> Self {
        FileSystemStore
    }

    fn is_journal_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(JOURNAL_EXTENSION))
    }
}

impl TextStore for FileSystemStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| TempleError::from_io(path, e))
    }

    fn journal_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(TempleError::FileNotFound(root.to_path_buf()));
        }

        // Hidden directories are skipped, the root itself is always walked
        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                TempleError::Io(std::io::Error::other(format!(
                    "Failed to walk {}: {}",
                    root.display(),
                    e
                )))
            })?;
            if entry.file_type().is_file() && Self::is_journal_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}
