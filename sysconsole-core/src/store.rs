//! Where the console configuration lives between sessions.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{ConfigDocument, ConfigError};

/// Error raised by a [`ConfigStore`].
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    Io(String),
    /// The stored document could not be parsed or serialized.
    Parse(ConfigError),
    /// The store refused the document.
    Rejected(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Config store I/O error: {msg}"),
            StoreError::Parse(err) => write!(f, "Config store parse error: {err}"),
            StoreError::Rejected(msg) => write!(f, "Config store rejected the update: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for StoreError {
    fn from(err: ConfigError) -> Self {
        StoreError::Parse(err)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Pluggable persistence for the console configuration.
pub trait ConfigStore {
    /// Load the current configuration.
    fn load(&self) -> Result<ConfigDocument, StoreError>;

    /// Persist `config` and return the document as stored.
    fn save(&mut self, config: &ConfigDocument) -> Result<ConfigDocument, StoreError>;
}

/// In-memory store for development and testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    current: ConfigDocument,
    saves: usize,
    reject_with: Option<String>,
}

impl InMemoryConfigStore {
    pub fn new(initial: ConfigDocument) -> Self {
        Self {
            current: initial,
            saves: 0,
            reject_with: None,
        }
    }

    /// Make every subsequent save fail with the given message.
    pub fn reject_saves(mut self, message: impl Into<String>) -> Self {
        self.reject_with = Some(message.into());
        self
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn current(&self) -> &ConfigDocument {
        &self.current
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load(&self) -> Result<ConfigDocument, StoreError> {
        Ok(self.current.clone())
    }

    fn save(&mut self, config: &ConfigDocument) -> Result<ConfigDocument, StoreError> {
        if let Some(message) = &self.reject_with {
            return Err(StoreError::Rejected(message.clone()));
        }
        self.current = config.clone();
        self.saves += 1;
        Ok(self.current.clone())
    }
}

/// JSON file store (the console's `config.json`).
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a crash never leaves a half-written configuration behind.
/// The temporary file is private to the owner until it takes over the
/// target's permissions; a file created by the first save stays owner-only.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<ConfigDocument, StoreError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Io(format!("{}: {e}", self.path.display())))?;
        let config = ConfigDocument::from_json_str(&content)?;
        tracing::debug!(path = %self.path.display(), "Loaded console configuration");
        Ok(config)
    }

    fn save(&mut self, config: &ConfigDocument) -> Result<ConfigDocument, StoreError> {
        let mut content = config.to_json_string_pretty()?;
        content.push('\n');

        // Dropping `temp` on any early return deletes it.
        let mut temp = tempfile::Builder::new()
            .prefix(".sysconsole-")
            .suffix(".tmp")
            .tempfile_in(self.dir())?;
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;
        match std::fs::metadata(&self.path) {
            Ok(existing) => temp.as_file().set_permissions(existing.permissions())?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        temp.persist(&self.path)
            .map_err(|e| StoreError::Io(format!("{}: {}", self.path.display(), e.error)))?;
        tracing::info!(path = %self.path.display(), "Saved console configuration");
        Ok(config.clone())
    }
}
