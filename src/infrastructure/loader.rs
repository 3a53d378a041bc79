//! Delimited-text table loader

use crate::domain::Table;
use crate::error::Result;
use crate::infrastructure::TextStore;
use std::path::Path;
use tracing::info;

/// Loads tables from delimited text files (tab-separated by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedLoader {
    pub delimiter: char,
    pub skip_rows: usize,
}

impl Default for DelimitedLoader {
    fn default() -> Self {
        DelimitedLoader {
            delimiter: '\t',
            skip_rows: 0,
        }
    }
}

impl DelimitedLoader {
    /// Tab-separated loader skipping `skip_rows` leading lines
    pub fn tsv(skip_rows: usize) -> Self {
        DelimitedLoader {
            skip_rows,
            ..DelimitedLoader::default()
        }
    }

    /// Read and parse a table from `path`
    pub fn load(&self, store: &impl TextStore, path: &Path) -> Result<Table> {
        let text = store.read_text(path)?;
        let table = Table::parse(&text, self.delimiter, self.skip_rows, path)?;

        info!(
            path = %path.display(),
            columns = table.headers.len(),
            rows = table.len(),
            "Loaded table"
        );

        Ok(table)
    }
}
