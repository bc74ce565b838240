//! Static catalogs of AWS services and regions
//!
//! Catalog rows are hand-curated YAML files embedded in the binary. They are
//! parsed once at startup into immutable [`Catalog`] values and shared by
//! reference from then on; nothing mutates a catalog after it is loaded.

pub mod regions;
pub mod services;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A single catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical code (package identifier or region code)
    pub code: String,

    /// Human-readable name shown next to the code in prompts
    #[serde(rename = "name")]
    pub display_name: String,

    /// AWS SDK for Java v2 module name (service rows only)
    #[serde(default, rename = "java", skip_serializing_if = "Option::is_none")]
    pub java_name: Option<String>,
}

/// How `contains`/`lookup` compare a query against catalog codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMatch {
    /// Byte-for-byte comparison
    Exact,
    /// ASCII case-insensitive comparison against the canonical lowercase codes
    IgnoreCase,
}

/// Errors raised while loading catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate catalog code '{0}'")]
    DuplicateCode(String),
}

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    entries: Vec<CatalogEntry>,
}

/// Immutable, insertion-ordered mapping of codes to display names
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    matching: CodeMatch,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate codes
    pub fn new(entries: Vec<CatalogEntry>, matching: CodeMatch) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            let key = match matching {
                CodeMatch::Exact => entry.code.clone(),
                CodeMatch::IgnoreCase => entry.code.to_ascii_lowercase(),
            };
            if !seen.insert(key) {
                return Err(CatalogError::DuplicateCode(entry.code.clone()));
            }
        }
        Ok(Self { entries, matching })
    }

    /// Parse a catalog from YAML (`entries: [{ code, name, java? }]`)
    pub fn from_yaml(source: &str, matching: CodeMatch) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(source)?;
        Self::new(file.entries, matching)
    }

    /// Display name for a code, or the code itself when it is unknown
    pub fn lookup<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code)
            .map(|entry| entry.display_name.as_str())
            .unwrap_or(code)
    }

    /// All entries in catalog order
    pub fn all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All codes in catalog order
    pub fn codes(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.code.clone()).collect()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Find the entry for a code, honoring the catalog's matching rule
    pub fn get(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| match self.matching {
            CodeMatch::Exact => entry.code == code,
            CodeMatch::IgnoreCase => entry.code.eq_ignore_ascii_case(code),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The service and region catalogs, loaded together at startup
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub services: Catalog,
    pub regions: Catalog,
}

impl Catalogs {
    /// Load the catalogs embedded in the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            services: services::builtin()?,
            regions: regions::builtin()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, name: &str) -> CatalogEntry {
        CatalogEntry {
            code: code.to_string(),
            display_name: name.to_string(),
            java_name: None,
        }
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let catalog = Catalog::new(
            vec![entry("us-east-1", "US East (N. Virginia)")],
            CodeMatch::Exact,
        )
        .unwrap();

        assert_eq!(catalog.lookup("us-east-1"), "US East (N. Virginia)");
        assert_eq!(catalog.lookup("mars-north-1"), "mars-north-1");
        assert_eq!(catalog.lookup(""), "");
    }

    #[test]
    fn test_contains_respects_matching_rule() {
        let entries = vec![entry("us-east-1", "US East (N. Virginia)")];
        let exact = Catalog::new(entries.clone(), CodeMatch::Exact).unwrap();
        let relaxed = Catalog::new(entries, CodeMatch::IgnoreCase).unwrap();

        assert!(exact.contains("us-east-1"));
        assert!(!exact.contains("US-EAST-1"));
        assert!(relaxed.contains("US-EAST-1"));
        assert!(!relaxed.contains("us-east-2"));
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let result = Catalog::new(
            vec![entry("eu-west-1", "Ireland"), entry("EU-WEST-1", "Ireland")],
            CodeMatch::IgnoreCase,
        );
        assert!(matches!(result, Err(CatalogError::DuplicateCode(code)) if code == "EU-WEST-1"));
    }

    #[test]
    fn test_from_yaml_preserves_order() {
        let yaml = r#"
entries:
  - { code: b, name: Bee }
  - { code: a, name: Ay, java: ay }
"#;
        let catalog = Catalog::from_yaml(yaml, CodeMatch::Exact).unwrap();
        assert_eq!(catalog.codes(), vec!["b", "a"]);
        assert_eq!(catalog.all()[1].java_name.as_deref(), Some("ay"));
    }

    #[test]
    fn test_from_yaml_rejects_garbage() {
        assert!(matches!(
            Catalog::from_yaml("entries: 12", CodeMatch::Exact),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_builtin_catalogs_load() {
        let catalogs = Catalogs::builtin().unwrap();
        assert!(catalogs.services.contains("@aws-sdk/client-s3"));
        assert!(catalogs.regions.contains("us-west-2"));
    }
}
