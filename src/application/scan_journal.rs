//! Scan journal use case

use crate::domain::JournalFindings;
use crate::error::Result;
use crate::infrastructure::TextStore;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What scanning a path produced
#[derive(Debug)]
pub enum JournalScan {
    /// A single journal file
    File(JournalFindings),
    /// Every journal file below a directory, each with its own outcome.
    /// One unreadable file does not hide the others.
    Directory(Vec<(PathBuf, Result<JournalFindings>)>),
}

/// Service for extracting dates and secret codes from journal files
pub struct ScanJournalService<S: TextStore> {
    store: S,
}

impl<S: TextStore> ScanJournalService<S> {
    /// Create a new scan journal service
    pub fn new(store: S) -> Self {
        ScanJournalService { store }
    }

    /// Read one journal file and extract its findings
    pub fn scan_file(&self, path: &Path) -> Result<JournalFindings> {
        let text = self.store.read_text(path)?;
        let findings = JournalFindings::from_text(&text);

        info!(
            path = %path.display(),
            dates = findings.dates.len(),
            codes = findings.codes.len(),
            "Scanned journal"
        );

        Ok(findings)
    }

    /// Scan a file, or every journal file below a directory
    pub fn scan_path(&self, path: &Path) -> Result<JournalScan> {
        if !path.is_dir() {
            return Ok(JournalScan::File(self.scan_file(path)?));
        }

        let results = self
            .store
            .journal_files(path)?
            .into_iter()
            .map(|file| {
                let findings = self.scan_file(&file);
                if let Err(e) = &findings {
                    warn!(path = %file.display(), error = %e, "Skipping unreadable journal");
                }
                (file, findings)
            })
            .collect();

        Ok(JournalScan::Directory(results))
    }
}
