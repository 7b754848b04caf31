use std::cmp::Ordering;

use tracing::info;

use crate::input::InputTable;
use crate::mapping::{ColumnMapping, MappingError};
use crate::model::ProcessOutput;
use crate::settings::Settings;

pub mod stage1_panels;
pub mod stage2_stats;
pub mod stage3_standardize;
pub mod stage4_rank;
pub mod stage5_finalize;

use stage1_panels::assign_panels;
use stage2_stats::compute_judge_stats;
use stage3_standardize::standardize_rows;
use stage4_rank::competition_ranks;
use stage5_finalize::finalize;

/// Runs the full scoring pipeline over a table.
///
/// Pure function of its inputs: panel assignment, per-panel judge stats,
/// standardization, panel-local and global competition ranking, selection
/// and per-panel aggregation. Rows come back sorted by descending final
/// score (ties keep input order); panel stats keep first-seen panel order.
pub fn process_data(
    table: &InputTable,
    mapping: &ColumnMapping,
    settings: &Settings,
) -> Result<ProcessOutput, MappingError> {
    mapping.validate(table)?;

    let panels = assign_panels(table, mapping);
    info!(
        "processing {} rows across {} panels with {} judges",
        table.n_rows(),
        panels.len(),
        mapping.judge_columns.len()
    );

    let mut rows = Vec::with_capacity(table.n_rows());
    let mut panel_judge_stats = Vec::with_capacity(panels.len());
    for panel in &panels {
        let stats = compute_judge_stats(table, &panel.row_indices, &mapping.judge_columns);
        let mut panel_rows = standardize_rows(table, panel, &stats, mapping, settings);

        let scores: Vec<f64> = panel_rows.iter().map(|r| r.final_score).collect();
        for (row, rank) in panel_rows.iter_mut().zip(competition_ranks(&scores)) {
            row.panel_rank = rank;
        }

        panel_judge_stats.push((panel.id.clone(), stats));
        rows.extend(panel_rows);
    }

    let scores: Vec<f64> = rows.iter().map(|r| r.final_score).collect();
    for (row, rank) in rows.iter_mut().zip(competition_ranks(&scores)) {
        row.global_rank = rank;
    }

    let stats = finalize(&mut rows, panel_judge_stats, settings.cutoff_rank);

    rows.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });

    Ok(ProcessOutput { rows, stats })
}
