use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory and a default config file pointing at the
/// records snapshot (`--records` wins over the default location).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.records.clone(), cli.test)?;

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Records     : {}", cfg.records_path().display()));
    info(format!("Time zone   : {}", cfg.reference_timezone));

    if !cfg.records_path().exists() {
        warning("Records snapshot not found yet; export one from the backend to that path.");
    }

    success("tourdesk initialization completed!");
    Ok(())
}
