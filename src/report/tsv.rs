use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::mapping::ColumnMapping;
use crate::model::ProcessOutput;
use crate::report::format_fixed;
use crate::settings::Settings;

/// All rows in final-score order, one z and one raw column per judge.
/// Z cells are blank for judges with no statistics in the row's panel.
pub fn write_rankings_tsv(
    path: &Path,
    output: &ProcessOutput,
    mapping: &ColumnMapping,
    settings: &Settings,
) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    write!(
        w,
        "global_rank\tpanel\tpanel_rank\tselected\tteam_id\tteam_name\tfinal_score\tteam_average"
    )?;
    for judge in &mapping.judge_columns {
        write!(w, "\tz_{judge}")?;
    }
    for judge in &mapping.judge_columns {
        write!(w, "\traw_{judge}")?;
    }
    writeln!(w)?;

    for row in &output.rows {
        write!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.global_rank,
            row.panel,
            row.panel_rank,
            row.selected,
            row.team_id,
            row.team_name,
            format_fixed(row.final_score, 3),
            format_fixed(row.team_average, settings.rounding_decimals),
        )?;
        for judge in &mapping.judge_columns {
            match row.z_scores.get(judge).copied().flatten() {
                Some(z) => write!(w, "\t{}", format_fixed(z, 3))?,
                None => write!(w, "\t")?,
            }
        }
        for judge in &mapping.judge_columns {
            match row.raw_scores.get(judge).copied().flatten() {
                Some(raw) => write!(w, "\t{raw}")?,
                None => write!(w, "\t")?,
            }
        }
        writeln!(w)?;
    }
    w.flush()
}

/// One line per panel in first-seen order, preceded by a synthetic `ALL`
/// aggregate over every row. The aggregate is presentation only.
pub fn write_panels_tsv(path: &Path, output: &ProcessOutput) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    writeln!(
        w,
        "panel\tteam_count\tselected_count\tmean_team_average\tmean_final_score\tactive_judges"
    )?;

    let team_count = output.rows.len();
    let selected_count = output.rows.iter().filter(|r| r.selected).count();
    let mean_avg = mean(output.rows.iter().map(|r| r.team_average));
    let mean_final = mean(output.rows.iter().map(|r| r.final_score));
    let all_judges: BTreeSet<&str> = output
        .stats
        .iter()
        .flat_map(|s| s.judge_stats.keys().map(String::as_str))
        .collect();
    writeln!(
        w,
        "ALL\t{team_count}\t{selected_count}\t{}\t{}\t{}",
        format_fixed(mean_avg, 2),
        format_fixed(mean_final, 3),
        all_judges.len(),
    )?;

    for panel in &output.stats {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            panel.panel_id,
            panel.team_count,
            panel.selected_count,
            format_fixed(panel.mean_team_average, 2),
            format_fixed(panel.mean_final_score, 3),
            panel.judge_stats.len(),
        )?;
    }
    w.flush()
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 { 0.0 } else { sum / n as f64 }
}
