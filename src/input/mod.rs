use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

pub mod reader;

use reader::{delimiter_for_path, open_maybe_gz};

/// An immutable in-memory table of string cells with an ordered header.
///
/// Rows are read-only source data: the engine only ever looks cells up, it
/// never writes them back. Short records are padded with empty cells at load
/// time, so every row has exactly one cell per header column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_index: HashMap<String, usize>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}: table has no columns")]
    NoColumns(String),
    #[error("{0}: table has a header but no data rows")]
    NoRows(String),
}

impl InputTable {
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let mut column_index = HashMap::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            // First occurrence wins for duplicate header names.
            column_index.entry(name.clone()).or_insert(idx);
        }
        for row in &mut rows {
            row.resize(headers.len(), String::new());
        }
        InputTable {
            headers,
            rows,
            column_index,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    /// Trimmed cell content, or `None` when the column is unknown or the
    /// cell is empty after trimming.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = *self.column_index.get(column)?;
        let value = self.rows.get(row)?.get(idx)?.trim();
        if value.is_empty() { None } else { Some(value) }
    }

    /// The cell parsed as a finite number, or `None` for missing,
    /// non-numeric, or non-finite content.
    pub fn numeric_cell(&self, row: usize, column: &str) -> Option<f64> {
        parse_numeric(self.cell(row, column)?)
    }
}

pub fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn load_table(path: &Path) -> Result<InputTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let delimiter = delimiter_for_path(path);

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(InputError::NoColumns(path.display().to_string()));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if record.len() > headers.len() {
            warn!(
                "record {} has {} cells but the header has {}; extra cells ignored",
                rows.len() + 1,
                record.len(),
                headers.len()
            );
        }
        let row: Vec<String> = record
            .iter()
            .take(headers.len())
            .map(|cell| cell.to_string())
            .collect();
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(InputError::NoRows(path.display().to_string()));
    }

    Ok(InputTable::new(headers, rows))
}
