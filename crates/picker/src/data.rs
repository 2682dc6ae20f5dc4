//! Forecast table loading: native JSON, or the legacy wide CSV layout
//! (64 rows, 20+ columns with probabilities, outcomes, and favorite
//! baselines in fixed column groups).

use bracket_core::ForecastTable;
use std::path::Path;

/// Load a forecast table, dispatching on the file extension.
pub fn load_table(path: &Path) -> Result<ForecastTable, String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_wide_csv(path),
        _ => ForecastTable::load(path).map_err(|e| format!("Failed to load table: {}", e)),
    }
}

/// Parse the legacy wide CSV. A single leading header line is tolerated;
/// every other line must be all-numeric.
pub fn load_wide_csv(path: &Path) -> Result<ForecastTable, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read CSV: {}", e))?;
    let rows = parse_wide_rows(&contents)?;
    ForecastTable::from_wide_rows(&rows).map_err(|e| format!("Bad CSV table: {}", e))
}

fn parse_wide_rows(contents: &str) -> Result<Vec<Vec<f64>>, String> {
    let mut rows = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parsed: Result<Vec<f64>, _> = line
            .split(',')
            .map(|field| field.trim().parse::<f64>())
            .collect();
        match parsed {
            Ok(row) => rows.push(row),
            // First unparseable line is the header
            Err(_) if line_no == 0 => {}
            Err(e) => {
                return Err(format!("Bad value on line {}: {}", line_no + 1, e));
            }
        }
    }
    Ok(rows)
}
