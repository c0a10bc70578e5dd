use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::mirror::LocalMirror;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// Creates the config directory and file (skipped with `--test`) and the
/// local mirror database with its tables.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let written = Config::init_all(Some(cfg.database.clone()), cfg.api_url.clone(), cli.test)?;

    println!("⚙️  Initializing rpresence…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Mirror     : {}", &written.database);
    match &written.api_url {
        Some(url) => println!("🌐 API        : {url}"),
        None => println!("🌐 API        : none (offline mode)"),
    }

    let mirror = LocalMirror::open(&written.database)?;
    mirror.journal(
        "init",
        "mirror",
        &format!("Mirror initialized at {}", &written.database),
    );

    println!("🎉 rpresence initialization completed!");
    Ok(())
}
