//! Text reports for picked brackets and their scores

use bracket_core::RoundTable;
use std::path::Path;

/// Render the picked bracket as a per-round winners table
pub fn format_picks(picks: &RoundTable) -> String {
    let mut report = String::new();
    report.push_str("=== Picked Bracket ===\n");
    report.push_str(&format!(
        "{:<6} {:>6}  {}\n",
        "Round", "Picks", "Winning slots"
    ));
    report.push_str(&"-".repeat(60));
    report.push('\n');
    for round in 0..picks.rounds() {
        let winners = picks.winners(round);
        let slots: Vec<String> = winners.iter().map(|i| i.to_string()).collect();
        report.push_str(&format!(
            "{:<6} {:>6}  {}\n",
            format!("rd{}", round + 1),
            winners.len(),
            slots.join(", ")
        ));
    }
    report
}

/// Render per-round scores and their total
pub fn format_scores(scores: &[f64]) -> String {
    let mut report = String::new();
    report.push_str("=== Bracket Score ===\n");
    for (round, score) in scores.iter().enumerate() {
        report.push_str(&format!("{:<6} {:>8.1}\n", format!("rd{}", round + 1), score));
    }
    report.push_str(&"-".repeat(15));
    report.push('\n');
    let total: f64 = scores.iter().sum();
    report.push_str(&format!("{:<6} {:>8.1}\n", "total", total));
    report
}

/// Save picks to a JSON file
pub fn save_picks(picks: &RoundTable, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(picks).map_err(|e| format!("Failed to serialize: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write picks: {}", e))
}

/// Load picks from a JSON file
pub fn load_picks(path: &Path) -> Result<RoundTable, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read picks: {}", e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse picks: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_picks() -> RoundTable {
        RoundTable::from_rows(&[
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_picks_report_lists_winners() {
        let report = format_picks(&toy_picks());
        assert!(report.contains("rd1"));
        assert!(report.contains("0, 2"));
        assert!(report.lines().any(|l| l.starts_with("rd2") && l.ends_with('0')));
    }

    #[test]
    fn test_scores_report_totals() {
        let report = format_scores(&[300.0, 320.0]);
        assert!(report.contains("rd1"));
        assert!(report.contains("300.0"));
        assert!(report.contains("620.0"));
    }

    #[test]
    fn test_picks_round_trip() {
        let picks = toy_picks();
        let dir = std::env::temp_dir().join("picker_report_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("picks.json");
        save_picks(&picks, &path).unwrap();
        assert_eq!(load_picks(&path).unwrap(), picks);
        std::fs::remove_file(&path).ok();
    }
}
