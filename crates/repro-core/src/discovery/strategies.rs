//! Operation extraction strategies over a fetched package
//!
//! AWS SDK packages are not laid out consistently across releases, so each
//! known layout gets its own strategy. Every strategy runs independently and
//! the results are unioned; supporting a new layout means appending to
//! [`DEFAULT_STRATEGIES`].

use super::naming::command_to_operation;
use crate::operations::OperationSet;
use regex::Regex;
use std::collections::BTreeSet;
use std::io;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static EXPORT_COMMAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/commands/([A-Z][a-zA-Z0-9]+Command)").expect("valid regex")
});

/// Read-only view of a fetched package
pub trait PackageContents {
    /// Raw text of the package's own `package.json`
    fn manifest(&self) -> io::Result<String>;

    /// Names of the files directly inside `relative_dir` (relative to the
    /// package root)
    fn list_dir(&self, relative_dir: &Path) -> io::Result<Vec<String>>;
}

/// A named extraction function
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    pub name: &'static str,
    pub extract: fn(&dyn PackageContents) -> BTreeSet<String>,
}

/// Strategies tried on every package
pub const DEFAULT_STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "exports",
        extract: from_exports_map,
    },
    Strategy {
        name: "dist-cjs",
        extract: from_cjs_build,
    },
    Strategy {
        name: "dist-es",
        extract: from_esm_build,
    },
];

/// Run every strategy and union the results
pub fn extract_operations(package: &dyn PackageContents, strategies: &[Strategy]) -> OperationSet {
    let mut operations = BTreeSet::new();
    for strategy in strategies {
        let found = (strategy.extract)(package);
        debug!(strategy = strategy.name, count = found.len(), "extraction strategy finished");
        operations.extend(found);
    }
    OperationSet::from_names(operations)
}

/// Keys of the manifest `exports` map shaped like `./commands/<Name>Command`
pub fn from_exports_map(package: &dyn PackageContents) -> BTreeSet<String> {
    let manifest = match package.manifest() {
        Ok(text) => text,
        Err(e) => {
            debug!("package manifest unreadable: {}", e);
            return BTreeSet::new();
        }
    };

    let json: serde_json::Value = match serde_json::from_str(&manifest) {
        Ok(json) => json,
        Err(e) => {
            debug!("package manifest is not valid JSON: {}", e);
            return BTreeSet::new();
        }
    };

    let Some(exports) = json.get("exports").and_then(|e| e.as_object()) else {
        return BTreeSet::new();
    };

    exports
        .keys()
        .filter_map(|key| EXPORT_COMMAND_PATTERN.captures(key))
        .filter_map(|captures| command_to_operation(&captures[1]))
        .collect()
}

/// `dist-cjs/commands/<Name>Command.js`
pub fn from_cjs_build(package: &dyn PackageContents) -> BTreeSet<String> {
    scan_commands_dir(package, Path::new("dist-cjs/commands"), &[".js"])
}

/// `dist-es/commands/<Name>Command.js` or `.mjs`
pub fn from_esm_build(package: &dyn PackageContents) -> BTreeSet<String> {
    scan_commands_dir(package, Path::new("dist-es/commands"), &[".js", ".mjs"])
}

fn scan_commands_dir(
    package: &dyn PackageContents,
    dir: &Path,
    extensions: &[&str],
) -> BTreeSet<String> {
    let files = match package.list_dir(dir) {
        Ok(files) => files,
        Err(e) => {
            debug!("no {} directory: {}", dir.display(), e);
            return BTreeSet::new();
        }
    };

    files
        .iter()
        .filter_map(|file| extensions.iter().find_map(|ext| file.strip_suffix(ext)))
        .filter_map(command_to_operation)
        .collect()
}
