//! Command implementations for the `sysconsole` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

use std::error::Error;
use std::path::PathBuf;

use sysconsole::{ConfigError, DefaultMessages, FileConfigStore, Localizer, MessageCatalog};

use crate::cli::{Cli, Commands};
use crate::settings::ConsoleSettings;

/// Edits: `sysconsole set`, `sysconsole enable`, `sysconsole disable`.
///
/// Loads the configuration, applies one field edit through the settings
/// controller, runs the presence validator, and saves.
pub mod set;

/// Rendering: `sysconsole show`.
///
/// Prints the panel as colored text or, with `--json`, as the serialized
/// render tree.
pub mod show;

/// What every command works against.
pub struct Context {
    pub store: FileConfigStore,
    pub localizer: Box<dyn Localizer>,
}

impl Context {
    /// Resolve the store and localizer from command-line overrides and settings.
    pub fn new(
        settings: &ConsoleSettings,
        config: Option<PathBuf>,
        locale: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config_path = config.unwrap_or_else(|| settings.config_path.clone());
        let localizer: Box<dyn Localizer> = match locale.or_else(|| settings.locale_path.clone()) {
            Some(path) => Box::new(MessageCatalog::from_file(&path)?),
            None => Box::new(DefaultMessages),
        };
        tracing::debug!(config = %config_path.display(), "Using console configuration");
        Ok(Self {
            store: FileConfigStore::new(config_path),
            localizer,
        })
    }
}

/// Run the parsed command line.
pub fn execute(cli: Cli, settings: &ConsoleSettings) -> Result<(), Box<dyn Error>> {
    let mut ctx = Context::new(settings, cli.config, cli.locale)?;
    match cli.command {
        Commands::Show { json } => show::run(&ctx, json),
        Commands::Set { field, value } => set::run(&mut ctx, &field, &value),
        Commands::Enable => set::toggle(&mut ctx, true),
        Commands::Disable => set::toggle(&mut ctx, false),
    }
}
