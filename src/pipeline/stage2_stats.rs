use std::collections::BTreeMap;

use crate::input::InputTable;
use crate::model::JudgeStat;

/// Mean and population SD per judge over the given rows.
///
/// Missing and non-numeric cells are excluded from the observations. A judge
/// with zero observations in the row set gets no entry at all, which is what
/// later marks their z-scores as absent rather than zero.
pub fn compute_judge_stats(
    table: &InputTable,
    rows: &[usize],
    judge_columns: &[String],
) -> BTreeMap<String, JudgeStat> {
    let mut stats = BTreeMap::new();
    for column in judge_columns {
        let values: Vec<f64> = rows
            .iter()
            .filter_map(|&row| table.numeric_cell(row, column))
            .collect();
        if values.is_empty() {
            continue;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        stats.insert(
            column.clone(),
            JudgeStat {
                mean,
                sd: population_sd(&values, mean),
            },
        );
    }
    stats
}

fn population_sd(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
