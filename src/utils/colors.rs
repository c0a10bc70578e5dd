/// ANSI color helper utilities for terminal output.
use crate::models::Status;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Unmarked days are grey.
pub fn color_for_status(status: Option<Status>) -> &'static str {
    match status {
        Some(Status::Present) => GREEN,
        Some(Status::Retard) => YELLOW,
        Some(Status::Absent) => RED,
        Some(Status::Conge) => MAGENTA,
        None => GREY,
    }
}

/// Attendance rate: green from 80%, yellow from 50%, red below.
pub fn color_for_rate(rate: u32) -> &'static str {
    if rate >= 80 {
        GREEN
    } else if rate >= 50 {
        YELLOW
    } else {
        RED
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Empty optional fields render as a grey dash.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
