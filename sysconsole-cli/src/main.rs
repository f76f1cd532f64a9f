use std::error::Error;

use clap::Parser;
use colored::Colorize;
use sysconsole::{init_tracing, AppConfig};
use sysconsole_cli::settings::DEFAULT_LOG_FILTER;
use sysconsole_cli::{commands, Cli, ConsoleSettings};

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // Log config loading under the built-in filter, then switch to `sysconsole.log.filter`.
    let logging = init_tracing(DEFAULT_LOG_FILTER);
    let app = AppConfig::load(&cli.profile)?.with_typed::<ConsoleSettings>()?;
    logging.set_default_filter(&app.log_filter)?;
    commands::execute(cli, &app)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}
