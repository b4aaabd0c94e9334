use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::bot::Bot;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::errors::AppResult;
use crate::export::Exporter;
use crate::transport::ConsoleTransport;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, BufReader};

/// Handle the `chat` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Chat { user, script } = &cli.command {
        let clock: Box<dyn Clock> = match &cli.now {
            Some(at) => Box::new(FixedClock::parse(at)?),
            None => Box::new(SystemClock),
        };

        let exporter = Exporter::from_config(cfg)?;
        let mut bot = Bot::new(clock, exporter).with_default_name(cfg.supervisor_name.clone());
        let transport = ConsoleTransport::new(user.unwrap_or(cfg.default_user));

        let handled = match script {
            Some(path) => transport.run(&mut bot, BufReader::new(File::open(path)?))?,
            None => transport.run(&mut bot, io::stdin().lock())?,
        };

        info(format!("{handled} message(s) handled"));
    }

    Ok(())
}
