mod input;
mod logging;
mod mapping;
mod model;
mod pipeline;
mod report;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::input::{InputTable, load_table};
use crate::mapping::{ColumnMapping, suggest_mapping};
use crate::pipeline::process_data;
use crate::report::write_reports;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "panel-scout")]
#[command(about = "Standardized competition scoring: panel z-scores and tie-aware ranking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a judging table and write ranking reports
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Input table (.csv, .tsv, .tab, optionally .gz)
    #[arg(long)]
    input: PathBuf,

    /// Output directory for rankings.tsv, panels.tsv, summary.json, report.txt
    #[arg(long)]
    out: PathBuf,

    /// Column holding the panel id (default: detected from the header)
    #[arg(long, value_name = "NAME")]
    panel_col: Option<String>,

    /// Infer panels from judge signatures even if a panel-like column exists
    #[arg(long, conflicts_with = "panel_col")]
    auto_panels: bool,

    /// Team id column (default: detected from the header)
    #[arg(long, value_name = "NAME")]
    id_col: Option<String>,

    /// Team name column (default: detected from the header)
    #[arg(long, value_name = "NAME")]
    name_col: Option<String>,

    /// Judge column; repeat to pin the judge set (default: detected)
    #[arg(long = "judge-col", value_name = "NAME")]
    judge_cols: Vec<String>,

    /// Teams with global rank at or below this value are selected
    #[arg(long, default_value_t = 42)]
    cutoff: u32,

    /// Decimal places for team averages
    #[arg(long, default_value_t = 2)]
    decimals: u32,

    /// Missing-value strategy (only "ignore" is supported)
    #[arg(long, default_value = "ignore")]
    missing: String,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let Commands::Run(args) = cli.command;

    let settings =
        Settings::new(args.cutoff, args.decimals, &args.missing).map_err(|e| e.to_string())?;

    let table = load_table(&args.input).map_err(|e| e.to_string())?;
    info!(
        "loaded {} with {} rows, {} columns",
        args.input.display(),
        table.n_rows(),
        table.headers().len()
    );

    let mapping = resolve_mapping(&table, &args);
    info!(
        "mapping: panel {}, id {:?}, name {:?}, judges [{}]",
        mapping
            .panel_column
            .as_deref()
            .unwrap_or("(auto-detected)"),
        mapping.team_id_column,
        mapping.team_name_column,
        mapping.judge_columns.join(", ")
    );

    let output = process_data(&table, &mapping, &settings).map_err(|e| e.to_string())?;
    info!(
        "scored {} teams, {} selected at cutoff {}",
        output.rows.len(),
        output.rows.iter().filter(|r| r.selected).count(),
        settings.cutoff_rank
    );

    write_reports(&args.out, &args.input, &mapping, &settings, &output).map_err(|e| e.to_string())
}

/// Suggested mapping with CLI overrides applied on top.
fn resolve_mapping(table: &InputTable, args: &RunArgs) -> ColumnMapping {
    let mut mapping = suggest_mapping(table);
    if args.auto_panels {
        mapping.panel_column = None;
    } else if let Some(panel) = &args.panel_col {
        mapping.panel_column = Some(panel.clone());
    }
    if let Some(id) = &args.id_col {
        mapping.team_id_column = id.clone();
    }
    if let Some(name) = &args.name_col {
        mapping.team_name_column = name.clone();
    }
    if !args.judge_cols.is_empty() {
        mapping.judge_columns = args.judge_cols.clone();
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> InputTable {
        InputTable::new(
            vec![
                "Team ID".to_string(),
                "Team Name".to_string(),
                "Panel".to_string(),
                "J1".to_string(),
                "J2".to_string(),
            ],
            vec![vec![
                "T1".into(),
                "Alpha".into(),
                "A".into(),
                "8".into(),
                "9".into(),
            ]],
        )
    }

    fn args() -> RunArgs {
        RunArgs {
            input: PathBuf::from("scores.csv"),
            out: PathBuf::from("out"),
            panel_col: None,
            auto_panels: false,
            id_col: None,
            name_col: None,
            judge_cols: Vec::new(),
            cutoff: 42,
            decimals: 2,
            missing: "ignore".to_string(),
        }
    }

    #[test]
    fn test_resolve_uses_suggestions_by_default() {
        let m = resolve_mapping(&table(), &args());
        assert_eq!(m.panel_column.as_deref(), Some("Panel"));
        assert_eq!(m.team_id_column, "Team ID");
        assert_eq!(m.judge_columns, vec!["J1", "J2"]);
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let mut a = args();
        a.panel_col = Some("Team Name".to_string());
        a.judge_cols = vec!["J2".to_string()];
        let m = resolve_mapping(&table(), &a);
        assert_eq!(m.panel_column.as_deref(), Some("Team Name"));
        assert_eq!(m.judge_columns, vec!["J2"]);
    }

    #[test]
    fn test_auto_panels_clears_detected_column() {
        let mut a = args();
        a.auto_panels = true;
        let m = resolve_mapping(&table(), &a);
        assert!(m.panel_column.is_none());
    }

    #[test]
    fn test_cli_parses_run_command() {
        let cli = Cli::try_parse_from([
            "panel-scout",
            "run",
            "--input",
            "scores.csv",
            "--out",
            "out",
            "--judge-col",
            "J1",
            "--judge-col",
            "J2",
            "--cutoff",
            "10",
        ])
        .unwrap();
        let Commands::Run(run) = cli.command;
        assert_eq!(run.judge_cols, vec!["J1", "J2"]);
        assert_eq!(run.cutoff, 10);
        assert_eq!(run.decimals, 2);
        assert_eq!(run.missing, "ignore");
    }
}
