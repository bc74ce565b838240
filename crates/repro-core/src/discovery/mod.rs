//! Dynamic operation discovery
//!
//! Works out which operations an AWS SDK client package exposes by fetching
//! the package into a throwaway sandbox and reading its layout. Discovery is
//! best-effort: every failure degrades to an empty [`OperationSet`], which
//! callers treat as "unknown" and answer with format-only validation.
//!
//! The flow for one call is create workspace, fetch, locate, extract, clean
//! up. There are no retries; a caller that wants another attempt calls again.

pub mod error;
pub mod naming;
pub mod sandbox;
pub mod strategies;

#[cfg(test)]
pub(crate) mod fake;

pub use error::DiscoveryError;
pub use sandbox::{InstalledPackage, NpmSandbox, PackageSource};
pub use strategies::{PackageContents, Strategy, DEFAULT_STRATEGIES};

use crate::config::Settings;
use crate::operations::OperationSet;
use crate::validate::is_valid_service_format;
use semver::Version;
use tracing::{debug, info};

/// Result of one discovery call
///
/// `operations` may be empty either because discovery failed (then
/// `diagnostic` says why) or because the package was fetched and no
/// strategy recognized its layout. Both cases mean "validate by format".
#[derive(Debug)]
pub struct Discovered {
    pub package: String,
    pub operations: OperationSet,
    /// Version of the package that was inspected
    pub package_version: Option<Version>,
    /// Why no operations could be discovered
    pub diagnostic: Option<DiscoveryError>,
    /// Sandbox removal failure; never affects `operations`
    pub cleanup_error: Option<DiscoveryError>,
}

impl Discovered {
    fn degraded(package: &str, diagnostic: DiscoveryError) -> Self {
        Self {
            package: package.to_string(),
            operations: OperationSet::new(),
            package_version: None,
            diagnostic: Some(diagnostic),
            cleanup_error: None,
        }
    }

    /// True when discovery failed before any extraction happened
    pub fn is_degraded(&self) -> bool {
        self.diagnostic.is_some()
    }

    pub fn into_operations(self) -> OperationSet {
        self.operations
    }
}

/// Operation discovery over a [`PackageSource`]
pub struct Discovery<S> {
    source: S,
    strategies: Vec<Strategy>,
}

impl<S: PackageSource> Discovery<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            strategies: DEFAULT_STRATEGIES.to_vec(),
        }
    }

    /// Append an extraction strategy for another package layout
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Discover the operations of `package`; never fails
    pub async fn discover(&self, package: &str) -> Discovered {
        if !is_valid_service_format(package) {
            let error = DiscoveryError::InvalidPackage(package.to_string());
            info!("Could not fetch operations: {}", error);
            return Discovered::degraded(package, error);
        }

        let handle = match self.source.acquire(package).await {
            Ok(handle) => handle,
            Err(e) => {
                info!("Could not fetch operations: {}", e);
                return Discovered::degraded(package, e);
            }
        };

        let operations = strategies::extract_operations(&handle, &self.strategies);
        let package_version = read_version(&handle);

        let cleanup_error = match self.source.release(handle) {
            Ok(()) => None,
            Err(e) => {
                info!("{}", e);
                Some(e)
            }
        };

        match &package_version {
            Some(version) => info!("Found {} operations in {}@{}", operations.len(), package, version),
            None => info!("Found {} operations in {}", operations.len(), package),
        }

        Discovered {
            package: package.to_string(),
            operations,
            package_version,
            diagnostic: None,
            cleanup_error,
        }
    }
}

/// Discover operations with an npm sandbox configured from the environment
pub async fn discover_operations(package: &str) -> OperationSet {
    let settings = Settings::from_env();
    Discovery::new(NpmSandbox::from_settings(&settings))
        .discover(package)
        .await
        .into_operations()
}

fn read_version(package: &dyn PackageContents) -> Option<Version> {
    let manifest = package.manifest().ok()?;
    let json: serde_json::Value = serde_json::from_str(&manifest).ok()?;
    let raw = json.get("version")?.as_str()?;
    match Version::parse(raw) {
        Ok(version) => Some(version),
        Err(e) => {
            debug!("unparseable package version '{}': {}", raw, e);
            None
        }
    }
}
