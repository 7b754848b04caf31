use thiserror::Error;

use crate::input::{InputTable, parse_numeric};

/// How many leading rows the numeric-column sniffer inspects.
const SNIFF_ROWS: usize = 5;

/// Which table columns play which role.
///
/// `panel_column: None` means panels are auto-detected from the judge
/// signature of each row instead of read from a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub panel_column: Option<String>,
    pub team_id_column: String,
    pub team_name_column: String,
    pub judge_columns: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("no judge columns selected; at least one is required")]
    NoJudgeColumns,
    #[error("column {0:?} not present in the table header")]
    UnknownColumn(String),
}

impl ColumnMapping {
    /// Checks the mapping against a concrete table: the judge set must be
    /// non-empty and every referenced column must exist.
    pub fn validate(&self, table: &InputTable) -> Result<(), MappingError> {
        if self.judge_columns.is_empty() {
            return Err(MappingError::NoJudgeColumns);
        }
        let mut referenced: Vec<&str> = vec![&self.team_id_column, &self.team_name_column];
        if let Some(panel) = &self.panel_column {
            referenced.push(panel);
        }
        referenced.extend(self.judge_columns.iter().map(String::as_str));
        for name in referenced {
            if !table.has_column(name) {
                return Err(MappingError::UnknownColumn(name.to_string()));
            }
        }
        Ok(())
    }
}

/// Suggests a mapping from header names and a sample of the data.
///
/// Headers containing `panel`/`group`/`batch` are panel candidates;
/// `id`/`code`/`ref` mark the team id; `name`/`team`/`project` the team
/// name. Judge columns are judge-like names (`judge`, `score`, `j<digits>`)
/// or columns whose first sampled rows are all numeric-or-blank, excluding
/// panel/id/name-like headers.
pub fn suggest_mapping(table: &InputTable) -> ColumnMapping {
    let headers = table.headers();

    let panel_column = headers
        .iter()
        .find(|h| contains_any(h, &["panel", "group", "batch"]))
        .cloned();

    let team_id_column = headers
        .iter()
        .find(|h| contains_any(h, &["id", "code", "ref"]))
        .or_else(|| headers.first())
        .cloned()
        .unwrap_or_default();

    // The id column often matches name-like words too ("Team ID"), so it is
    // excluded from the name search.
    let team_name_column = headers
        .iter()
        .find(|h| **h != team_id_column && contains_any(h, &["name", "team", "project"]))
        .or_else(|| headers.get(1))
        .cloned()
        .unwrap_or_default();

    let judge_columns = headers
        .iter()
        .filter(|h| {
            if is_judge_like(h) {
                return true;
            }
            looks_numeric(table, h) && !contains_any(h, &["panel", "id", "name"])
        })
        .cloned()
        .collect();

    ColumnMapping {
        panel_column,
        team_id_column,
        team_name_column,
        judge_columns,
    }
}

fn contains_any(header: &str, needles: &[&str]) -> bool {
    let lower = header.to_ascii_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

fn is_judge_like(header: &str) -> bool {
    let lower = header.to_ascii_lowercase();
    if lower.contains("judge") || lower.contains("score") {
        return true;
    }
    // "J1", "j12", ...
    lower
        .strip_prefix('j')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

fn looks_numeric(table: &InputTable, column: &str) -> bool {
    let sample = table.n_rows().min(SNIFF_ROWS);
    (0..sample).all(|row| match table.cell(row, column) {
        None => true,
        Some(raw) => parse_numeric(raw).is_some(),
    })
}
