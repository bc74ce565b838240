//! Settings read from the environment

use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// npm executable, optionally with leading arguments (`AWS_REPRO_NPM="npx npm@10"`)
pub const NPM_ENV: &str = "AWS_REPRO_NPM";

/// Package fetch timeout in seconds
pub const DISCOVERY_TIMEOUT_ENV: &str = "AWS_REPRO_DISCOVERY_TIMEOUT";

/// Directory that sandbox workspaces are created in
pub const SANDBOX_DIR_ENV: &str = "AWS_REPRO_SANDBOX_DIR";

/// Log filter used by the CLI binary
pub const LOG_ENV: &str = "AWS_REPRO_LOG";

/// Default bound on a single package fetch
pub const DEFAULT_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(60);

const DEFAULT_NPM: &str = "npm";

/// Runtime settings for discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program and leading arguments used to install packages
    pub npm_command: Vec<String>,
    pub discovery_timeout: Duration,
    pub workspace_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            npm_command: vec![DEFAULT_NPM.to_string()],
            discovery_timeout: DEFAULT_DISCOVERY_TIMEOUT,
            workspace_root: std::env::temp_dir(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; invalid values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = lookup(NPM_ENV) {
            let command: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
            if command.is_empty() {
                warn!("{} is empty, using '{}'", NPM_ENV, DEFAULT_NPM);
            } else {
                settings.npm_command = command;
            }
        }

        if let Some(raw) = lookup(DISCOVERY_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => settings.discovery_timeout = Duration::from_secs(secs),
                _ => warn!(
                    "Ignoring {}='{}': expected a positive number of seconds",
                    DISCOVERY_TIMEOUT_ENV, raw
                ),
            }
        }

        if let Some(raw) = lookup(SANDBOX_DIR_ENV).filter(|s| !s.trim().is_empty()) {
            settings.workspace_root = PathBuf::from(raw);
        }

        settings
    }

    /// Override the fetch timeout (e.g. from a CLI flag)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout = timeout;
        self
    }

    /// The npm program without leading arguments
    pub fn npm_program(&self) -> &str {
        self.npm_command
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_NPM)
    }
}
