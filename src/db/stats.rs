use crate::core::mirror::LocalMirror;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_mirror_info(mirror: &mut LocalMirror) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let path = mirror.path().to_string();
    let file_size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SNAPSHOT CONTENTS
    //
    let store = mirror.load();
    println!(
        "{}• People:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        store.people().len(),
        RESET
    );
    println!(
        "{}• Presences:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        store.presences().len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let first = store.presences().iter().map(|p| p.date).min();
    let last = store.presences().iter().map(|p| p.date).max();
    let dash = format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.map(|d| d.to_string()).unwrap_or_else(|| dash.clone())
    );
    println!(
        "    to:   {}",
        last.map(|d| d.to_string()).unwrap_or_else(|| dash.clone())
    );

    //
    // 4) LAST SAVE
    //
    let saved = mirror.last_saved()?.unwrap_or(dash);
    println!("{}• Last saved:{} {}", CYAN, RESET, saved);

    println!();
    Ok(())
}
