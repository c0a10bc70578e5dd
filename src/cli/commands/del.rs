use super::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, outcome, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut session = session(cfg)?;
        let person_id = session.resolve_person(id)?;

        let (name, marks) = match session.store().find_person(&person_id) {
            Some(p) => (
                p.full_name(),
                session.store().presences_of(&person_id).count(),
            ),
            None => (id.clone(), 0),
        };

        if !*yes
            && !ask_confirmation(&format!(
                "Delete {name} and {marks} presence record(s)? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let result = session.delete_person(&person_id)?;
        outcome(
            &result,
            format!("Deleted {} ({marks} presence record(s))", result.value.full_name()),
        );
    }

    Ok(())
}
