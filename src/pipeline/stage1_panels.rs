use std::collections::HashMap;

use tracing::debug;

use crate::input::InputTable;
use crate::mapping::ColumnMapping;

pub const UNASSIGNED_PANEL: &str = "Unassigned";

/// One panel and the source-table rows that belong to it, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAssignment {
    pub id: String,
    pub row_indices: Vec<usize>,
}

/// Groups rows into panels, in first-seen order.
///
/// With an explicit panel column the trimmed cell is the panel id and empty
/// cells fall into `Unassigned`. Without one, panels are inferred from each
/// row's judge signature: the sorted set of judge columns with a numeric
/// cell. Each distinct non-empty signature is minted a synthetic name
/// (`Panel 1`, `Panel 2`, ...) in first-seen order; rows with no numeric
/// judge cells at all go to `Unassigned`. Distinct committees that happen to
/// share a signature merge into one panel.
pub fn assign_panels(table: &InputTable, mapping: &ColumnMapping) -> Vec<PanelAssignment> {
    let mut panels: Vec<PanelAssignment> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();
    let mut signature_names: HashMap<String, String> = HashMap::new();

    for row in 0..table.n_rows() {
        let panel_id = match &mapping.panel_column {
            Some(column) => table
                .cell(row, column)
                .map(str::to_string)
                .unwrap_or_else(|| UNASSIGNED_PANEL.to_string()),
            None => {
                let signature = judge_signature(table, row, &mapping.judge_columns);
                if signature.is_empty() {
                    UNASSIGNED_PANEL.to_string()
                } else {
                    let next = signature_names.len() + 1;
                    signature_names
                        .entry(signature)
                        .or_insert_with(|| format!("Panel {next}"))
                        .clone()
                }
            }
        };

        let idx = *index_of.entry(panel_id.clone()).or_insert_with(|| {
            panels.push(PanelAssignment {
                id: panel_id,
                row_indices: Vec::new(),
            });
            panels.len() - 1
        });
        panels[idx].row_indices.push(row);
    }

    debug!("assigned {} rows to {} panels", table.n_rows(), panels.len());
    panels
}

fn judge_signature(table: &InputTable, row: usize, judge_columns: &[String]) -> String {
    let mut present: Vec<&str> = judge_columns
        .iter()
        .filter(|col| table.numeric_cell(row, col).is_some())
        .map(String::as_str)
        .collect();
    present.sort_unstable();
    present.join("|")
}
