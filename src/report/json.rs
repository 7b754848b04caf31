use crate::report::RunSummary;

pub fn render_summary_json(summary: &RunSummary<'_>) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OverallStats;

    #[test]
    fn test_summary_shape() {
        let judges = vec!["J1".to_string()];
        let summary = RunSummary {
            tool: "panel-scout",
            version: "0.1.0",
            input: "scores.csv".to_string(),
            cutoff_rank: 42,
            rounding_decimals: 2,
            missing_values: "ignore",
            judge_columns: &judges,
            overall: OverallStats {
                team_count: 0,
                selected_count: 0,
                selection_rate: 0.0,
                panel_count: 0,
                judge_count: 1,
            },
            panels: &[],
        };
        let json = render_summary_json(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tool"], "panel-scout");
        assert_eq!(value["cutoff_rank"], 42);
        assert_eq!(value["overall"]["judge_count"], 1);
        assert!(value["panels"].as_array().unwrap().is_empty());
    }
}
