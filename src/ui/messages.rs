//! Coloured one-line feedback for the terminal.

use crate::core::sync::{SyncOutcome, SyncPath};
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_OFFLINE: &str = "💾";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Report a sync outcome: success when the server took it, an informational
/// "saved locally" line otherwise. Neither is an error.
pub fn outcome<T, M: fmt::Display>(result: &SyncOutcome<T>, msg: M) {
    match result.path {
        SyncPath::Remote => success(msg),
        SyncPath::LocalFallback => println!(
            "{}{}{} {}{} (saved locally, offline mode)",
            FG_BLUE, BOLD, ICON_OFFLINE, RESET, msg
        ),
    }
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", FG_BLUE, BOLD, msg, RESET);
}
