use std::collections::BTreeMap;

use crate::input::InputTable;
use crate::mapping::ColumnMapping;
use crate::model::{EnrichedRow, JudgeStat};
use crate::pipeline::stage1_panels::PanelAssignment;
use crate::settings::Settings;

/// Builds enriched rows for one panel: z-scores against the panel's judge
/// stats, team average over the present raw values, final score as the sum
/// of z-scores. Ranks are filled in later.
pub fn standardize_rows(
    table: &InputTable,
    panel: &PanelAssignment,
    judge_stats: &BTreeMap<String, JudgeStat>,
    mapping: &ColumnMapping,
    settings: &Settings,
) -> Vec<EnrichedRow> {
    panel
        .row_indices
        .iter()
        .map(|&row| {
            let mut raw_scores = BTreeMap::new();
            let mut z_scores = BTreeMap::new();
            let mut final_score = 0.0;
            let mut present = Vec::new();

            for column in &mapping.judge_columns {
                let raw = table.numeric_cell(row, column);
                raw_scores.insert(column.clone(), raw);

                let z = match judge_stats.get(column) {
                    // Judge had no observations in this panel at all.
                    None => None,
                    Some(stat) => Some(match raw {
                        Some(value) => {
                            present.push(value);
                            z_score(value, stat)
                        }
                        // Active judge, missing cell: neutral contribution.
                        None => 0.0,
                    }),
                };
                if let Some(z) = z {
                    final_score += z;
                }
                z_scores.insert(column.clone(), z);
            }

            let team_average = if present.is_empty() {
                0.0
            } else {
                round_to(
                    present.iter().sum::<f64>() / present.len() as f64,
                    settings.rounding_decimals,
                )
            };

            EnrichedRow {
                source_row: row,
                panel: panel.id.clone(),
                team_id: table
                    .cell(row, &mapping.team_id_column)
                    .unwrap_or_default()
                    .to_string(),
                team_name: table
                    .cell(row, &mapping.team_name_column)
                    .unwrap_or_default()
                    .to_string(),
                raw_scores,
                z_scores,
                team_average,
                final_score,
                panel_rank: 0,
                global_rank: 0,
                selected: false,
            }
        })
        .collect()
}

fn z_score(value: f64, stat: &JudgeStat) -> f64 {
    if stat.sd == 0.0 {
        0.0
    } else {
        (value - stat.mean) / stat.sd
    }
}

/// Half-away-from-zero rounding to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
