use crate::db::log::{JournalEntry, read_journal};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ansi regex"));

const MAX_OP_WIDTH: usize = 48;

fn visible_len(s: &str) -> usize {
    ANSI_RE.replace_all(s, "").chars().count()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" | "set" => Colour::Yellow,
        "mark" | "notes" => Colour::Cyan,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// "mark (local-1712…)" with only the operation coloured, cut to `MAX_OP_WIDTH`.
fn op_column(entry: &JournalEntry) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let plain = if plain.chars().count() > MAX_OP_WIDTH {
        let mut cut: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        cut.push_str("...");
        cut
    } else {
        plain
    };

    let color = color_for_operation(&entry.operation);
    match plain.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(plain.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = read_journal(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let op = op_column(entry);
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible_len(&op)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id, entry.date, op, padding, entry.message,
            );
        }

        Ok(())
    }
}
