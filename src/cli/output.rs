//! Output formatting utilities

use crate::application::SurveyReport;
use crate::domain::{JournalFindings, Table};
use crate::error::{Result, TempleError};
use std::path::{Path, PathBuf};

/// Format extraction results as two list lines
pub fn format_findings(findings: &JournalFindings) -> String {
    format!(
        "Found dates: {:?}\nFound codes: {:?}\n",
        findings.date_strings(),
        findings.code_strings()
    )
}

/// Format findings for several journal files, one block per file.
/// File names are shown relative to `base`; unreadable files get an error line.
pub fn format_findings_by_file(
    results: &[(PathBuf, Result<JournalFindings>)],
    base: &Path,
) -> String {
    if results.is_empty() {
        return "No journal files found\n".to_string();
    }

    let mut output = String::new();
    for (path, findings) in results {
        output.push_str(&format!("== {}\n", display_relative(path, base)));
        match findings {
            Ok(findings) => output.push_str(&format_findings(findings)),
            Err(e) => output.push_str(&format_step_error(e)),
        }
    }
    output
}

/// Render the header and first `rows` rows of a table as aligned columns
pub fn format_table_preview(table: &Table, rows: usize) -> String {
    let shown = table.head(rows);

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in shown {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut output = render(table.headers.as_slice());
    if shown.is_empty() {
        output.push_str("(no rows)\n");
    }
    for row in shown {
        output.push_str(&render(row.as_slice()));
    }
    output
}

fn format_step_error(err: &TempleError) -> String {
    match err {
        TempleError::FileNotFound(path) => format!("Error: File not found at {}\n", path.display()),
        other => format!("Error: {}\n", other),
    }
}

fn push_table_step(output: &mut String, table: &Result<Table>, preview_rows: usize) {
    match table {
        Ok(table) => {
            output.push_str(&format!(
                "Successfully loaded table. First {} rows:\n",
                preview_rows
            ));
            output.push_str(&format_table_preview(table, preview_rows));
        }
        Err(e) => output.push_str(&format_step_error(e)),
    }
}

/// Format a survey report section by section
pub fn format_survey(report: &SurveyReport, preview_rows: usize) -> String {
    let mut output = format!(
        "--- Loading Artifact Data from {} ---\n",
        report.artifacts_path.display()
    );
    push_table_step(&mut output, &report.artifacts, preview_rows);

    output.push_str(&format!(
        "\n--- Loading Location Notes from {} ---\n",
        report.locations_path.display()
    ));
    push_table_step(&mut output, &report.locations, preview_rows);

    output.push_str(&format!(
        "\n--- Processing Journal from {} ---\n",
        report.journal_path.display()
    ));
    match &report.journal {
        Ok(findings) => {
            output.push_str(&format!(
                "Extracting Dates...\nFound dates: {:?}\n\n",
                findings.date_strings()
            ));
            output.push_str(&format!(
                "Extracting Secret Codes...\nFound codes: {:?}\n",
                findings.code_strings()
            ));
        }
        Err(e) => output.push_str(&format_step_error(e)),
    }
    output
}

/// Display a path relative to `base` when possible
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
