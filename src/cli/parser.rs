use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for discountbot
/// Chat-driven data entry with XLSX export
#[derive(Parser)]
#[command(
    name = "discountbot",
    version = env!("CARGO_PKG_VERSION"),
    about = "A data-entry bot: collect driver discount rows through chat prompts and export them to XLSX",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the directory exported workbooks are written to
    #[arg(global = true, long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Freeze the clock at "YYYY-MM-DD HH:MM" (useful for tests)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Show the effective configuration
    Config {
        /// Print the current configuration as YAML
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Talk to the bot from the terminal, one message per line
    ///
    /// Lines of the form `@<id> <text>` are sent as user <id>; every other
    /// line is sent as --user. Commands: /start, /generate, /cancelDiscount,
    /// /reset, /name <text>, /status.
    Chat {
        /// User id for lines without an @<id> prefix (default: config `default_user`)
        #[arg(long = "user", short = 'u')]
        user: Option<i64>,

        /// Read messages from a file instead of stdin
        #[arg(long = "script", value_name = "FILE")]
        script: Option<PathBuf>,
    },
}
