use super::csv::write_daily_csv;
use super::fs_utils::ensure_writable;
use super::json::write_daily_json;
use super::model::daily_rows;
use super::{ExportFormat, notify_export_success};
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct ExportLogic;

impl ExportLogic {
    /// `presences_2026-10-19.csv`
    pub fn default_file_name(date: NaiveDate, format: ExportFormat) -> String {
        format!("presences_{}.{}", date.format("%Y-%m-%d"), format.as_str())
    }

    /// Export the roster for `date`. Without `file`, writes the default
    /// file name in the working directory. Returns the written path.
    pub fn export(
        store: &RecordStore,
        date: NaiveDate,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(Self::default_file_name(date, format)),
        };

        ensure_writable(&path, force)?;

        let rows = daily_rows(store, date);
        if rows.is_empty() {
            warning("Roster is empty: the export only holds the header.");
        }

        match format {
            ExportFormat::Csv => write_daily_csv(File::create(&path)?, &rows)?,
            ExportFormat::Json => write_daily_json(Path::new(&path), &rows)?,
        }

        notify_export_success(format.label(), &path);
        Ok(path)
    }
}
