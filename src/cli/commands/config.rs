use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::models::RecordKind;
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let missing = migrate::missing_fields(&content)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `tourdesk config --migrate` to add them with default values.");
                }
            } else {
                warning(format!("No configuration file at {}", path.display()));
            }
            // values must also make sense, not only be present
            cfg.zone()?;
            cfg.search_fields()?;
            cfg.marker_policy(None, None, None)?;
            for kind in cfg.status_priority.keys() {
                if RecordKind::from_str_opt(kind).is_none() {
                    warning(format!("status_priority: unknown record kind '{kind}'"));
                }
            }
        }

        if *do_migrate {
            migrate::migrate_file(&path)?;
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration edited with '{editor_to_use}'"));
                }
                _ => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));
                    let status = Command::new(&default_editor)
                        .arg(&path)
                        .status()
                        .map_err(|e| AppError::Config(e.to_string()))?;
                    if !status.success() {
                        error(format!("Failed to edit configuration with '{default_editor}'"));
                    }
                }
            }
        }
    }

    Ok(())
}
