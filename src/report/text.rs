use crate::report::{RunSummary, format_fixed};

pub fn render_report_text(summary: &RunSummary<'_>) -> String {
    let mut out = String::new();

    out.push_str("Panel Scoring Report\n");
    out.push_str("====================\n\n");

    out.push_str("1. Run\n");
    out.push_str(&format!("Tool: {} {}\n", summary.tool, summary.version));
    out.push_str(&format!("Input: {}\n", summary.input));
    out.push_str(&format!(
        "Judges: {}\n",
        summary.judge_columns.join(", ")
    ));
    out.push_str(&format!(
        "Settings: cutoff rank {}, {} decimals, missing values {}\n\n",
        summary.cutoff_rank, summary.rounding_decimals, summary.missing_values
    ));

    out.push_str("2. Selection\n");
    out.push_str(&format!("Teams: {}\n", summary.overall.team_count));
    out.push_str(&format!("Selected: {}\n", summary.overall.selected_count));
    out.push_str(&format!(
        "Selection rate: {}\n\n",
        format_fixed(summary.overall.selection_rate * 100.0, 1) + "%"
    ));

    out.push_str("3. Panels\n");
    for panel in summary.panels {
        out.push_str(&format!(
            "{}: {} teams, {} selected, mean average {}, mean final {}\n",
            panel.panel_id,
            panel.team_count,
            panel.selected_count,
            format_fixed(panel.mean_team_average, 2),
            format_fixed(panel.mean_final_score, 3),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PanelStats;
    use crate::report::OverallStats;
    use std::collections::BTreeMap;

    #[test]
    fn test_report_mentions_panels_and_rate() {
        let judges = vec!["J1".to_string()];
        let panels = vec![PanelStats {
            panel_id: "Panel 1".to_string(),
            team_count: 4,
            selected_count: 2,
            mean_team_average: 7.25,
            mean_final_score: 0.0,
            judge_stats: BTreeMap::new(),
        }];
        let summary = RunSummary {
            tool: "panel-scout",
            version: "0.1.0",
            input: "scores.csv".to_string(),
            cutoff_rank: 2,
            rounding_decimals: 2,
            missing_values: "ignore",
            judge_columns: &judges,
            overall: OverallStats {
                team_count: 4,
                selected_count: 2,
                selection_rate: 0.5,
                panel_count: 1,
                judge_count: 1,
            },
            panels: &panels,
        };
        let text = render_report_text(&summary);
        assert!(text.contains("Selection rate: 50.0%"));
        assert!(text.contains("Panel 1: 4 teams, 2 selected"));
    }
}
