use super::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        date,
        format,
        file,
        force,
    } = cmd
    {
        let day = resolve_date(date.as_deref())?;
        let session = session(cfg)?;

        let path = ExportLogic::export(session.store(), day, *format, file.as_deref(), *force)?;
        session.mirror().journal(
            "export",
            &day.to_string(),
            &format!("{} rows to {}", session.store().people().len(), path.display()),
        );
    }
    Ok(())
}
