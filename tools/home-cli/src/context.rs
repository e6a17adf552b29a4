//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};

use home_core::{AppContext, SiteConfig};
use home_events::{EventLog, FileStore, LogFormat, LogLevel, SessionId, StructuredLogger};

use crate::config::{self, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Site configuration.
    pub config: SiteConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (config::load(&path)?, Some(path))
            }
            // Try to find config in current directory or parent directories
            None => match find_config(&cwd) {
                Some(path) => (config::load(&path)?, Some(path)),
                None => (SiteConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Seed data and links, with seed override paths resolved against the
    /// working directory.
    pub fn app_context(&self) -> Result<AppContext> {
        let mut config = self.config.clone();
        config.catalog.products_path = config
            .catalog
            .products_path
            .map(|p| self.resolve_path(&p));
        config.catalog.posts_path = config.catalog.posts_path.map(|p| self.resolve_path(&p));
        AppContext::load(config).context("Failed to load seed data")
    }

    /// Event log in the configured store directory.
    pub fn event_log(&self) -> EventLog {
        let mut events = self.config.events.clone();
        events.store_dir = self.resolve_path(&events.store_dir);
        events.sink_path = events.sink_path.map(|p| self.resolve_path(&p));

        let level = if self.output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
        let logger = StructuredLogger::new(SessionId::generate())
            .with_component("cli")
            .with_format(LogFormat::from_name(&events.log_format))
            .with_min_level(level);

        let store = Arc::new(FileStore::new(&events.store_dir));
        EventLog::from_config(&events, store).with_logger(logger)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(tmp.path().join(".home.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(tmp.path().join(".home.toml")));
    }

    #[test]
    fn test_find_config_prefers_home_toml() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("home.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("home.toml"), "").unwrap();

        assert_eq!(find_config(tmp.path()), Some(tmp.path().join("home.toml")));
    }

    #[test]
    fn test_event_log_writes_under_cwd() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = Context {
            config: SiteConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: tmp.path().to_path_buf(),
        };

        ctx.event_log()
            .record("page_view", home_events::EventData::new())
            .unwrap();
        assert!(tmp.path().join(".home/events/site_events.json").is_file());
    }
}
