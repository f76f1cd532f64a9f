//! # sysconsole-cli
//!
//! Command-line host for the sysconsole settings panels.
//!
//! This crate provides the `sysconsole` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sysconsole show [--json]` | Render the OpenID Connect panel |
//! | `sysconsole set <field> <value>` | Edit one setting and save |
//! | `sysconsole enable` | Turn OpenID Connect on and save |
//! | `sysconsole disable` | Turn OpenID Connect off and save |
//!
//! The console configuration file and the message catalog come from
//! `--config` / `--locale`, falling back to the `sysconsole.config.path` and
//! `sysconsole.locale.path` keys of the application config
//! (`sysconsole.yaml`, profile overlays, and `SYSCONSOLE_*` env vars).

pub mod cli;
pub mod commands;
pub mod settings;

pub use cli::{Cli, Commands};
pub use settings::ConsoleSettings;
