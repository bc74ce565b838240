//! AWS region catalog and region-notation helpers

use super::{Catalog, CatalogError, CodeMatch};

const REGIONS_YAML: &str = include_str!("../../catalogs/regions.yaml");

/// Region suggested when the user has no preference
pub const DEFAULT_REGION: &str = "us-west-1";

/// Load the embedded region catalog (codes match case-insensitively)
pub fn builtin() -> Result<Catalog, CatalogError> {
    Catalog::from_yaml(REGIONS_YAML, CodeMatch::IgnoreCase)
}

/// Convert Java SDK notation (`US_WEST_1`) to a standard region code (`us-west-1`)
pub fn java_region_to_standard(region: &str) -> String {
    region.to_lowercase().replace('_', "-")
}

/// Convert a standard region code (`us-west-1`) to Java SDK notation (`US_WEST_1`)
pub fn standard_region_to_java(region: &str) -> String {
    region.to_uppercase().replace('-', "_")
}
