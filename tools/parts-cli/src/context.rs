//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use parts_commerce::catalog::Catalog;
use parts_commerce::session::Session;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Why a discovered config file was ignored in favour of defaults.
    pub config_error: Option<String>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    ///
    /// An explicit `--config` must parse. A discovered file that does not
    /// parse is reported and the defaults are used instead.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path, config_error) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)), None)
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some(path) => match load_path(&path) {
                    Ok(config) => (config, Some(path), None),
                    Err(e) => {
                        let message = format!("{:#}", e);
                        output.warn(&format!("Ignoring {}: {}", path.display(), message));
                        (CliConfig::default(), Some(path), Some(message))
                    }
                },
                None => (CliConfig::default(), None, None),
            }
        };

        Ok(Self {
            config,
            config_path,
            config_error,
            output,
            cwd,
        })
    }

    /// Nearest config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Load the configured catalog, or the bundled one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                self.output
                    .debug(&format!("Loading catalog from {}", path.display()));
                Catalog::load(&path)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Catalog::bundled().context("Failed to load bundled catalog"),
        }
    }

    /// Start a session configured for `catalog`.
    pub fn new_session(&self, catalog: &Catalog) -> Session {
        Session::new(self.config.session_settings(catalog.currency()))
    }

    /// Resolve a path relative to the config file, or the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            return path;
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone());
        base.join(path)
    }
}

fn load_path(path: &Path) -> Result<CliConfig> {
    let path = path
        .to_str()
        .with_context(|| format!("Config path is not valid UTF-8: {}", path.display()))?;
    CliConfig::load(path)
}
