use super::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::daily_stats;
use crate::errors::AppResult;
use crate::models::DailyStats;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, RED, RESET, color_for_rate};
use crate::utils::date::resolve_date;
use chrono::NaiveDate;

pub fn print_stats(day: &NaiveDate, stats: &DailyStats) {
    header(day.format("%A %d %B %Y"));
    println!(
        "Total: {} | Présents: {}{}{} | Absents: {}{}{} | Taux: {}{}%{}\n",
        stats.total,
        GREEN,
        stats.present,
        RESET,
        RED,
        stats.absent,
        RESET,
        color_for_rate(stats.rate),
        stats.rate,
        RESET
    );
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { date } = cmd {
        let day = resolve_date(date.as_deref())?;
        let session = session(cfg)?;
        print_stats(&day, &daily_stats(session.store(), day));
    }
    Ok(())
}
