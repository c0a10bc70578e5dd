use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::core::mirror::LocalMirror;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut mirror = LocalMirror::open(&cfg.database)?;
        LogLogic::print_log(mirror.pool())?;
    }

    Ok(())
}
