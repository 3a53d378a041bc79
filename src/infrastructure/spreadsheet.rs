//! Artifact register loader for spreadsheet workbooks

use crate::domain::Table;
use crate::error::{Result, TempleError};
use calamine::{open_workbook_auto, Reader};
use std::path::Path;
use tracing::info;

/// Sheet holding the artifact register
pub const DEFAULT_SHEET: &str = "Main Chamber";

/// Title rows above the register header
pub const DEFAULT_SKIP_ROWS: usize = 3;

/// Loads one sheet of a workbook (.xlsx, .xls, .ods) as a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLoader {
    pub sheet: String,
    pub skip_rows: usize,
}

impl Default for ArtifactLoader {
    fn default() -> Self {
        ArtifactLoader {
            sheet: DEFAULT_SHEET.to_string(),
            skip_rows: DEFAULT_SKIP_ROWS,
        }
    }
}

impl ArtifactLoader {
    pub fn new(sheet: impl Into<String>, skip_rows: usize) -> Self {
        ArtifactLoader {
            sheet: sheet.into(),
            skip_rows,
        }
    }

    /// Read the configured sheet, skipping the first `skip_rows` sheet rows
    pub fn load(&self, path: &Path) -> Result<Table> {
        if !path.is_file() {
            return Err(TempleError::FileNotFound(path.to_path_buf()));
        }

        let spreadsheet_error = |message: String| TempleError::Spreadsheet {
            path: path.to_path_buf(),
            message,
        };

        let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(e.to_string()))?;

        let names = workbook.sheet_names();
        if !names.iter().any(|name| name == &self.sheet) {
            return Err(spreadsheet_error(format!(
                "sheet '{}' not found (available: {})",
                self.sheet,
                names.join(", ")
            )));
        }

        let range = workbook
            .worksheet_range(&self.sheet)
            .map_err(|e| spreadsheet_error(e.to_string()))?;

        // Ranges start at the first used cell, not at A1
        let first_row = range.start().map_or(0, |(row, _)| row as usize);
        let records = range
            .rows()
            .enumerate()
            .map(|(idx, cells)| {
                let row_number = first_row + idx + 1;
                let fields: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
                (row_number, fields)
            })
            .filter(|(row_number, _)| *row_number > self.skip_rows);

        let table = Table::from_records(records, self.skip_rows + 1, path)?;

        info!(
            path = %path.display(),
            sheet = %self.sheet,
            columns = table.headers.len(),
            rows = table.len(),
            "Loaded artifact sheet"
        );

        Ok(table)
    }
}
