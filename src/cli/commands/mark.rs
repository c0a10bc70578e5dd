use super::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::outcome;
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        id,
        status,
        date,
        notes,
    } = cmd
    {
        let day = resolve_date(date.as_deref())?;

        let mut session = session(cfg)?;
        let person_id = session.resolve_person(id)?;

        let result = session.mark_presence(&person_id, day, *status, notes.as_deref())?;
        let name = session
            .store()
            .find_person(&person_id)
            .map(|p| p.full_name())
            .unwrap_or_else(|| id.clone());

        outcome(
            &result,
            format!("{name}: {} on {day}", result.value.statut.label()),
        );
    }

    Ok(())
}
