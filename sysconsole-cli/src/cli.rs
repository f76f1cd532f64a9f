use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "sysconsole",
    version,
    about = "sysconsole: inspect and edit the OpenID Connect settings of a console configuration"
)]
pub struct Cli {
    /// Console configuration file (overrides `sysconsole.config.path`)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Message catalog used for labels and placeholders (overrides `sysconsole.locale.path`)
    #[arg(long, global = true)]
    pub locale: Option<PathBuf>,

    /// Application config profile
    #[arg(long, global = true, default_value = "dev")]
    pub profile: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Render the OpenID Connect settings panel
    Show {
        /// Print the rendered panel as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change a single setting and save
    Set {
        /// Field id (enable, id, secret, userApiEndpoint, authEndpoint, tokenEndpoint)
        field: String,
        /// New value (`true`/`false` for enable)
        value: String,
    },
    /// Enable authentication with OpenID Connect
    Enable,
    /// Disable authentication with OpenID Connect
    Disable,
}
