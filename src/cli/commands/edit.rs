use super::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::outcome;

/// Form-style edit: unspecified options keep the stored value, then the
/// whole record is replaced.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        nom,
        prenom,
        email,
        poste,
        color,
    } = cmd
    {
        let mut session = session(cfg)?;
        let person_id = session.resolve_person(id)?;

        let mut draft = session
            .store()
            .find_person(&person_id)
            .map(|p| p.draft())
            .ok_or_else(|| crate::errors::ValidationFailure::UnknownPerson(id.clone()))?;

        if let Some(v) = nom {
            draft.nom = v.clone();
        }
        if let Some(v) = prenom {
            draft.prenom = v.clone();
        }
        if let Some(v) = email {
            draft.email = v.clone();
        }
        if let Some(v) = poste {
            draft.poste = v.clone();
        }
        if let Some(v) = color {
            draft.avatar_color = v.clone();
        }

        let result = session.update_person(&person_id, draft)?;
        outcome(&result, format!("Updated {}", result.value.full_name()));
    }

    Ok(())
}
