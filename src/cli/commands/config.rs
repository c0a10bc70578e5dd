use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration ({}):\n", Config::config_file().display());
            println!("{yaml}");
        }

        if *edit_config {
            edit(editor.as_deref())?;
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open the config file in `requested`, falling back to the default editor.
fn edit(requested: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        Config::default().save_to(&path)?;
    }

    let fallback = default_editor();
    let first = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    for editor in [first.as_str(), fallback.as_str()] {
        match Command::new(editor).arg(&path).status() {
            Ok(s) if s.success() => {
                println!("✅ Configuration file edited with '{editor}'");
                return Ok(());
            }
            _ => eprintln!("⚠️  Editor '{editor}' not available"),
        }
    }

    Err(AppError::Config(format!(
        "could not open {} in an editor",
        path.display()
    )))
}
