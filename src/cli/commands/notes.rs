use super::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::outcome;
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notes { id, text, date } = cmd {
        let day = resolve_date(date.as_deref())?;

        let mut session = session(cfg)?;
        let person_id = session.resolve_person(id)?;

        let result = session.edit_presence_notes(&person_id, day, text)?;
        outcome(
            &result,
            format!(
                "Notes saved for {day} ({})",
                result.value.statut.label()
            ),
        );
    }

    Ok(())
}
