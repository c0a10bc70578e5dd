use super::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::outcome;

/// Single-cell edit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { id, field, value } = cmd {
        let mut session = session(cfg)?;
        let person_id = session.resolve_person(id)?;

        let result = session.edit_person_field(&person_id, *field, value)?;
        outcome(
            &result,
            format!(
                "{} of {} set to '{}'",
                field.as_str(),
                person_id,
                result.value.get(*field)
            ),
        );
    }

    Ok(())
}
