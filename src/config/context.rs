// Server context module
// Immutable per-process state handed to the request handler

use std::io;
use std::path::PathBuf;

use super::types::Config;

/// Read-only state shared by every request.
///
/// Built once at startup and never mutated afterwards, so it can be
/// `Arc`-shared across connection tasks without any locking.
pub struct ServerContext {
    pub config: Config,
    /// Absolute server root; every served path is this or a descendant
    pub root: PathBuf,
    /// Cached so the per-request hot path skips the config structure
    pub access_log: bool,
}

impl ServerContext {
    /// Resolve the configured root to an absolute path and freeze the
    /// context. Fails when the root does not exist or is unreadable.
    pub fn new(config: Config) -> io::Result<Self> {
        let root = std::fs::canonicalize(&config.files.root)?;
        let access_log = config.logging.access_log;

        Ok(Self {
            config,
            root,
            access_log,
        })
    }

    /// Context over an arbitrary root with logging quiet, for tests that
    /// drive the handler directly.
    #[cfg(test)]
    pub fn for_tests(root: PathBuf) -> Self {
        use super::types::{FilesConfig, LoggingConfig, ServerConfig};

        Self {
            config: Config {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                    workers: None,
                },
                files: FilesConfig {
                    root: root.display().to_string(),
                },
                logging: LoggingConfig {
                    access_log: false,
                    access_log_format: "combined".to_string(),
                    access_log_file: None,
                    error_log_file: None,
                },
            },
            root,
            access_log: false,
        }
    }
}
