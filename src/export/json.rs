use super::model::DailyRow;
use crate::errors::AppResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Same rows as the CSV, pretty-printed JSON array.
pub fn write_daily_json(path: &Path, rows: &[DailyRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
