use std::collections::BTreeMap;

use crate::model::{EnrichedRow, JudgeStat, PanelStats};

/// Applies the selection cutoff and aggregates per-panel statistics.
///
/// `panel_judge_stats` carries the panels in first-seen order together with
/// the judge stats computed for each; the returned `PanelStats` keep that
/// order. Global ranks must already be in place.
pub fn finalize(
    rows: &mut [EnrichedRow],
    panel_judge_stats: Vec<(String, BTreeMap<String, JudgeStat>)>,
    cutoff_rank: u32,
) -> Vec<PanelStats> {
    for row in rows.iter_mut() {
        row.selected = cutoff_rank > 0 && row.global_rank <= cutoff_rank;
    }

    panel_judge_stats
        .into_iter()
        .map(|(panel_id, judge_stats)| {
            let members: Vec<&EnrichedRow> =
                rows.iter().filter(|r| r.panel == panel_id).collect();
            let team_count = members.len();
            PanelStats {
                selected_count: members.iter().filter(|r| r.selected).count(),
                mean_team_average: mean(members.iter().map(|r| r.team_average)),
                mean_final_score: mean(members.iter().map(|r| r.final_score)),
                panel_id,
                team_count,
                judge_stats,
            }
        })
        .collect()
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

#[cfg(test)]
mod tests {
    use super::*;

    fn row(panel: &str, global_rank: u32, final_score: f64, team_average: f64) -> EnrichedRow {
        EnrichedRow {
            source_row: 0,
            panel: panel.to_string(),
            team_id: String::new(),
            team_name: String::new(),
            raw_scores: BTreeMap::new(),
            z_scores: BTreeMap::new(),
            team_average,
            final_score,
            panel_rank: 0,
            global_rank,
            selected: false,
        }
    }

    #[test]
    fn test_cutoff_selection() {
        let mut rows = vec![row("A", 1, 2.0, 8.0), row("A", 2, 1.0, 7.0), row("B", 3, 0.0, 6.0)];
        let stats = finalize(
            &mut rows,
            vec![
                ("A".to_string(), BTreeMap::new()),
                ("B".to_string(), BTreeMap::new()),
            ],
            2,
        );
        assert!(rows[0].selected && rows[1].selected);
        assert!(!rows[2].selected);
        assert_eq!(stats[0].selected_count, 2);
        assert_eq!(stats[1].selected_count, 0);
    }

    #[test]
    fn test_zero_cutoff_selects_nothing() {
        let mut rows = vec![row("A", 1, 2.0, 8.0)];
        finalize(&mut rows, vec![("A".to_string(), BTreeMap::new())], 0);
        assert!(!rows[0].selected);
    }

    #[test]
    fn test_panel_means() {
        let mut rows = vec![row("A", 1, 2.0, 8.0), row("A", 2, 0.0, 6.0)];
        let stats = finalize(&mut rows, vec![("A".to_string(), BTreeMap::new())], 1);
        assert_eq!(stats[0].team_count, 2);
        assert_eq!(stats[0].mean_final_score, 1.0);
        assert_eq!(stats[0].mean_team_average, 7.0);
    }

    #[test]
    fn test_empty_panel_has_zero_means() {
        let mut rows: Vec<EnrichedRow> = Vec::new();
        let stats = finalize(&mut rows, vec![("A".to_string(), BTreeMap::new())], 1);
        assert_eq!(stats[0].team_count, 0);
        assert_eq!(stats[0].mean_final_score, 0.0);
    }
}
