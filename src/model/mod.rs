use std::collections::BTreeMap;

use serde::Serialize;

/// Per-judge descriptive statistics within one panel. `sd` is the
/// population standard deviation (divisor `n`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JudgeStat {
    pub mean: f64,
    pub sd: f64,
}

/// One scored team, carrying both the raw judge cells and everything the
/// engine derives from them.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRow {
    /// Index of the row in the source table, for stable tie ordering.
    pub source_row: usize,
    pub panel: String,
    pub team_id: String,
    pub team_name: String,
    /// Raw judge cells, `None` when missing or non-numeric.
    pub raw_scores: BTreeMap<String, Option<f64>>,
    /// `None` when the judge has no statistics in this row's panel;
    /// `Some(0.0)` when the judge is active but this cell is missing.
    pub z_scores: BTreeMap<String, Option<f64>>,
    /// Rounded mean of the present raw scores, 0.0 when none are present.
    pub team_average: f64,
    /// Sum of z-scores, unrounded. The ranking key.
    pub final_score: f64,
    pub panel_rank: u32,
    pub global_rank: u32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelStats {
    pub panel_id: String,
    pub team_count: usize,
    pub selected_count: usize,
    pub mean_team_average: f64,
    pub mean_final_score: f64,
    pub judge_stats: BTreeMap<String, JudgeStat>,
}

/// Engine output: rows sorted by descending final score, panel stats in
/// first-seen panel order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    pub rows: Vec<EnrichedRow>,
    pub stats: Vec<PanelStats>,
}
