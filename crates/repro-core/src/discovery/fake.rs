//! In-memory package sources for discovery tests

use super::error::DiscoveryError;
use super::sandbox::PackageSource;
use super::strategies::PackageContents;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A package that exists only in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryPackage {
    manifest: Option<String>,
    dirs: HashMap<PathBuf, Vec<String>>,
}

impl MemoryPackage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, manifest: &str) -> Self {
        self.manifest = Some(manifest.to_string());
        self
    }

    pub fn with_files(mut self, dir: &str, files: &[&str]) -> Self {
        self.dirs
            .entry(PathBuf::from(dir))
            .or_default()
            .extend(files.iter().map(|f| f.to_string()));
        self
    }
}

impl PackageContents for MemoryPackage {
    fn manifest(&self) -> io::Result<String> {
        self.manifest
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no package.json"))
    }

    fn list_dir(&self, relative_dir: &Path) -> io::Result<Vec<String>> {
        self.dirs
            .get(relative_dir)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
    }
}

/// What the fake does when asked for a package
#[derive(Debug, Clone)]
pub enum Behavior {
    Install(MemoryPackage),
    NotFound,
    TimeOut,
}

/// Package source that simulates fetch outcomes and counts workspace use
#[derive(Debug)]
pub struct FakeSource {
    behavior: Behavior,
    fail_release: bool,
    pub acquired: AtomicUsize,
    pub released: AtomicUsize,
}

impl FakeSource {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            fail_release: false,
            acquired: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    pub fn failing_release(mut self) -> Self {
        self.fail_release = true;
        self
    }

    /// Workspaces acquired but never released
    pub fn outstanding(&self) -> usize {
        self.acquired.load(Ordering::SeqCst) - self.released.load(Ordering::SeqCst)
    }
}

impl PackageSource for FakeSource {
    type Handle = MemoryPackage;

    async fn acquire(&self, package: &str) -> Result<MemoryPackage, DiscoveryError> {
        match &self.behavior {
            Behavior::Install(contents) => {
                self.acquired.fetch_add(1, Ordering::SeqCst);
                Ok(contents.clone())
            }
            Behavior::NotFound => Err(DiscoveryError::FetchFailed {
                status: "exit status: 1".to_string(),
                stderr: format!("npm error 404 Not Found - GET https://registry.npmjs.org/{package}"),
            }),
            Behavior::TimeOut => Err(DiscoveryError::Timeout(Duration::from_secs(60))),
        }
    }

    fn release(&self, _handle: MemoryPackage) -> Result<(), DiscoveryError> {
        self.released.fetch_add(1, Ordering::SeqCst);
        if self.fail_release {
            return Err(DiscoveryError::Cleanup {
                path: PathBuf::from("/tmp/aws-sdk-inspect-fake"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "busy"),
            });
        }
        Ok(())
    }
}
