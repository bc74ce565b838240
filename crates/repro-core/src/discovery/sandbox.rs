//! Ephemeral package sandboxes
//!
//! A [`PackageSource`] hands out a local view of a remote package and takes
//! it back when discovery is done. [`NpmSandbox`] is the real one: it installs
//! the package into a fresh temporary directory with npm and deletes that
//! directory again on release or on any failure along the way.

use super::error::DiscoveryError;
use super::strategies::PackageContents;
use crate::config::Settings;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Directory name prefix for sandbox workspaces
pub const WORKSPACE_PREFIX: &str = "aws-sdk-inspect";

/// Keep npm quiet, non-interactive, and away from the workspace manifest
const INSTALL_FLAGS: &[&str] = &[
    "--no-save",
    "--silent",
    "--no-audit",
    "--no-fund",
    "--loglevel=error",
];

/// Capability to fetch a package into a local, inspectable form
pub trait PackageSource {
    type Handle: PackageContents + Send;

    /// Fetch `package` and return a handle to its local copy
    fn acquire(
        &self,
        package: &str,
    ) -> impl Future<Output = Result<Self::Handle, DiscoveryError>> + Send;

    /// Dispose of everything `acquire` created for this handle
    fn release(&self, handle: Self::Handle) -> Result<(), DiscoveryError>;
}

/// A package installed inside a sandbox workspace
#[derive(Debug)]
pub struct InstalledPackage {
    workspace: TempDir,
    root: PathBuf,
}

impl InstalledPackage {
    /// Package root (`<workspace>/node_modules/<scope>/<name>`)
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The sandbox workspace that owns the install
    pub fn workspace(&self) -> &Path {
        self.workspace.path()
    }
}

impl PackageContents for InstalledPackage {
    fn manifest(&self) -> io::Result<String> {
        std::fs::read_to_string(self.root.join("package.json"))
    }

    fn list_dir(&self, relative_dir: &Path) -> io::Result<Vec<String>> {
        let mut files: Vec<String> = std::fs::read_dir(self.root.join(relative_dir))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        files.sort();
        Ok(files)
    }
}

/// Installs packages with npm into throwaway workspaces
#[derive(Debug, Clone)]
pub struct NpmSandbox {
    /// Program followed by any leading arguments (e.g. `["npm"]`)
    command: Vec<String>,
    timeout: Duration,
    workspace_root: PathBuf,
}

impl NpmSandbox {
    pub fn new(command: Vec<String>, timeout: Duration) -> Self {
        Self {
            command,
            timeout,
            workspace_root: std::env::temp_dir(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.npm_command.clone(), settings.discovery_timeout)
            .with_workspace_root(settings.workspace_root.clone())
    }

    /// Create workspaces under `root` instead of the system temp directory
    pub fn with_workspace_root(mut self, root: PathBuf) -> Self {
        self.workspace_root = root;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The install command line, for messages
    pub fn command_line(&self, package: &str) -> String {
        let mut parts = self.command.clone();
        parts.push("install".to_string());
        parts.push(format!("{}@latest", package));
        parts.extend(INSTALL_FLAGS.iter().map(|f| f.to_string()));
        parts.join(" ")
    }

    /// Create a uniquely named workspace seeded with an isolated manifest
    fn create_workspace(&self) -> Result<TempDir, DiscoveryError> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let workspace = tempfile::Builder::new()
            .prefix(&format!("{}-{}-", WORKSPACE_PREFIX, nanos))
            .tempdir_in(&self.workspace_root)
            .map_err(DiscoveryError::Workspace)?;

        let manifest = serde_json::json!({
            "name": "temp-inspector",
            "version": "1.0.0",
            "private": true,
        });
        std::fs::write(workspace.path().join("package.json"), manifest.to_string())
            .map_err(DiscoveryError::Workspace)?;

        debug!(workspace = %workspace.path().display(), "created sandbox workspace");
        Ok(workspace)
    }

    async fn fetch(&self, workspace: &Path, package: &str) -> Result<(), DiscoveryError> {
        let (program, leading_args) = self.command.split_first().ok_or_else(|| {
            DiscoveryError::Spawn {
                command: String::new(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty npm command"),
            }
        })?;

        let mut cmd = TokioCommand::new(program);
        cmd.args(leading_args)
            .arg("install")
            .arg(format!("{}@latest", package))
            .args(INSTALL_FLAGS)
            .current_dir(workspace)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Dropping the output future on timeout kills the child
        let output = match timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(DiscoveryError::Spawn {
                    command: self.command_line(package),
                    source,
                })
            }
            Err(_) => return Err(DiscoveryError::Timeout(self.timeout)),
        };

        if !output.status.success() {
            return Err(DiscoveryError::FetchFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }

    /// `<workspace>/node_modules/@scope/name`
    fn locate(workspace: &Path, package: &str) -> Result<PathBuf, DiscoveryError> {
        let mut path = workspace.join("node_modules");
        path.extend(package.split('/'));
        if path.is_dir() {
            Ok(path)
        } else {
            Err(DiscoveryError::PackageMissing(path))
        }
    }
}

impl PackageSource for NpmSandbox {
    type Handle = InstalledPackage;

    async fn acquire(&self, package: &str) -> Result<InstalledPackage, DiscoveryError> {
        let workspace = self.create_workspace()?;

        info!("Installing {}...", package);
        let located = match self.fetch(workspace.path(), package).await {
            Ok(()) => Self::locate(workspace.path(), package),
            Err(e) => Err(e),
        };

        match located {
            Ok(root) => Ok(InstalledPackage { workspace, root }),
            Err(e) => {
                if let Err(cleanup) = remove_workspace(workspace) {
                    warn!("{}", cleanup);
                }
                Err(e)
            }
        }
    }

    fn release(&self, handle: InstalledPackage) -> Result<(), DiscoveryError> {
        remove_workspace(handle.workspace)
    }
}

fn remove_workspace(workspace: TempDir) -> Result<(), DiscoveryError> {
    let path = workspace.path().to_path_buf();
    match workspace.close() {
        Ok(()) => {
            debug!(workspace = %path.display(), "removed sandbox workspace");
            Ok(())
        }
        Err(source) => Err(DiscoveryError::Cleanup { path, source }),
    }
}
