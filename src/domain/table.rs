//! Tabular data parsed from delimited text or spreadsheet rows

use crate::error::{Result, TempleError};
use std::path::Path;

/// A header row plus data rows, every row as wide as the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse delimited text.
    ///
    /// The first `skip_rows` lines are ignored, then the first non-blank row
    /// is the header. Fields may be quoted, so a quoted cell can hold the
    /// delimiter. Short rows are padded with empty cells; rows wider than the
    /// header are an error. `source` is only used in error messages.
    pub fn parse(text: &str, delimiter: char, skip_rows: usize, source: &Path) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(TempleError::Config(format!(
                "Delimiter must be ASCII, got {:?}",
                delimiter
            )));
        }
        let delimiter = delimiter as u8;

        let body: String = text.split_inclusive('\n').skip(skip_rows).collect();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(body.as_bytes());

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| TempleError::MalformedTable {
                path: source.to_path_buf(),
                line: skip_rows + e.position().map_or(0, |p| p.line() as usize),
                message: e.to_string(),
            })?;
            let line = skip_rows
                + record
                    .position()
                    .map_or(records.len() + 1, |p| p.line() as usize);
            records.push((line, record.iter().map(str::to_string).collect()));
        }

        Self::from_records(records, skip_rows + 1, source)
    }

    /// Build a table from numbered rows (1-based line or sheet row numbers).
    ///
    /// Blank rows are skipped and the first remaining row is the header.
    /// `empty_line` is reported when no header is found.
    pub fn from_records<I>(records: I, empty_line: usize, source: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, Vec<String>)>,
    {
        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for (line, mut fields) in records {
            if fields.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            match &headers {
                None => headers = Some(fields),
                Some(header) => {
                    if fields.len() > header.len() {
                        return Err(TempleError::MalformedTable {
                            path: source.to_path_buf(),
                            line,
                            message: format!(
                                "{} fields, expected at most {}",
                                fields.len(),
                                header.len()
                            ),
                        });
                    }
                    fields.resize(header.len(), String::new());
                    rows.push(fields);
                }
            }
        }

        let headers = headers.ok_or_else(|| TempleError::MalformedTable {
            path: source.to_path_buf(),
            line: empty_line,
            message: "no columns to parse".to_string(),
        })?;

        Ok(Table { headers, rows })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` data rows
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Index of the column with the given header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All values of one column, by header name
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }
}
