use super::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::PersonDraft;
use crate::ui::messages::outcome;

/// Add a person to the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        nom,
        prenom,
        email,
        poste,
        color,
    } = cmd
    {
        let draft = PersonDraft::new(nom.as_str(), prenom.as_str())
            .with_email(email.clone().unwrap_or_default())
            .with_poste(poste.clone().unwrap_or_default())
            .with_color(
                color
                    .clone()
                    .unwrap_or_else(|| cfg.default_avatar_color.clone()),
            );

        // validate before touching the mirror or the network
        draft.validate()?;

        let mut session = session(cfg)?;
        let result = session.create_person(draft)?;

        outcome(
            &result,
            format!(
                "Added {} (id {})",
                result.value.full_name(),
                result.value.id
            ),
        );
    }

    Ok(())
}
