use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the default configuration file and creates the export directory
/// taken from the loaded configuration. With `--test` nothing is written.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = Config::init_all(cli.config.as_deref(), cli.test)?;

    info("Initializing discountbot…");

    if cli.test {
        info(format!("Config file : {} (test mode, not written)", path.display()));
        info(format!("Export dir  : {} (test mode, not created)", cfg.export_dir.display()));
        return Ok(());
    }

    std::fs::create_dir_all(&cfg.export_dir)?;

    success(format!("Config file : {}", path.display()));
    success(format!("Export dir  : {}", cfg.export_dir.display()));

    Ok(())
}
