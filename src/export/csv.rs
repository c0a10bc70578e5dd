use super::model::{DailyRow, HEADERS};
use crate::errors::AppResult;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// Plain cell: no separator, no line break.
fn cell(value: &str) -> String {
    value.replace(',', ";").replace(['\r', '\n'], " ")
}

/// Notes are always quoted; commas become semicolons.
fn notes_cell(notes: &str) -> String {
    format!("\"{}\"", cell(notes).replace('"', "\"\""))
}

/// Write the daily sheet. Quoting is done by hand so the notes column is
/// quoted even when empty (`...,non marqué,""`).
pub fn write_daily_csv<W: Write>(out: W, rows: &[DailyRow]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(out);

    wtr.write_record(HEADERS)?;

    for row in rows {
        wtr.write_record([
            cell(&row.prenom),
            cell(&row.nom),
            cell(&row.email),
            cell(&row.poste),
            row.statut.clone(),
            notes_cell(&row.notes),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn render_daily_csv(rows: &[DailyRow]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_daily_csv(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
