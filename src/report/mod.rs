use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::mapping::ColumnMapping;
use crate::model::ProcessOutput;
use crate::settings::Settings;

pub mod json;
pub mod text;
pub mod tsv;

use json::render_summary_json;
use text::render_report_text;
use tsv::{write_panels_tsv, write_rankings_tsv};

#[derive(Debug, Clone, Serialize)]
pub struct OverallStats {
    pub team_count: usize,
    pub selected_count: usize,
    pub selection_rate: f64,
    pub panel_count: usize,
    pub judge_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub input: String,
    pub cutoff_rank: u32,
    pub rounding_decimals: u32,
    pub missing_values: &'static str,
    pub judge_columns: &'a [String],
    pub overall: OverallStats,
    pub panels: &'a [crate::model::PanelStats],
}

pub fn overall_stats(output: &ProcessOutput, mapping: &ColumnMapping) -> OverallStats {
    let team_count = output.rows.len();
    let selected_count = output.rows.iter().filter(|r| r.selected).count();
    OverallStats {
        team_count,
        selected_count,
        selection_rate: if team_count == 0 {
            0.0
        } else {
            selected_count as f64 / team_count as f64
        },
        panel_count: output.stats.len(),
        judge_count: mapping.judge_columns.len(),
    }
}

/// Fixed-point formatting for report columns. Output derivative only; the
/// engine keeps unrounded values.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    format!("{value:.prec$}", prec = decimals as usize)
}

pub fn write_reports(
    out_dir: &Path,
    input_path: &Path,
    mapping: &ColumnMapping,
    settings: &Settings,
    output: &ProcessOutput,
) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_rankings_tsv(&out_dir.join("rankings.tsv"), output, mapping, settings)?;
    write_panels_tsv(&out_dir.join("panels.tsv"), output)?;

    let summary = RunSummary {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        input: input_path.display().to_string(),
        cutoff_rank: settings.cutoff_rank,
        rounding_decimals: settings.rounding_decimals,
        missing_values: settings.missing_values.as_str(),
        judge_columns: &mapping.judge_columns,
        overall: overall_stats(output, mapping),
        panels: &output.stats,
    };
    let json = render_summary_json(&summary).map_err(io::Error::other)?;
    fs::write(out_dir.join("summary.json"), json)?;

    fs::write(out_dir.join("report.txt"), render_report_text(&summary))?;

    info!("reports written to {}", out_dir.display());
    Ok(())
}
