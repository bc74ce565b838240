//! Syntactic format rules for operations, regions and service packages
//!
//! These checks never consult a catalog: a string can be well-formed and
//! still unknown. Callers that care about membership check both.

use regex::Regex;
use std::sync::LazyLock;

static OPERATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").expect("valid regex"));

static REGION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z]{2,3}-(north|south|east|west|central|northeast|northwest|southeast|southwest)-\d+$",
    )
    .expect("valid regex")
});

static GOV_CLOUD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^us-gov-(east|west)-\d+$").expect("valid regex"));

static CHINA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^cn-(north|northwest)-\d+$").expect("valid regex"));

static SERVICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^@[a-z0-9][a-z0-9._-]*/client-[a-z0-9][a-z0-9-]*$").expect("valid regex")
});

/// Kebab-case operation name: lowercase, starts with a letter, single hyphens
pub fn is_valid_operation_format(operation: &str) -> bool {
    OPERATION_PATTERN.is_match(operation)
}

/// Region code shape: `prefix-direction-number`, plus GovCloud and China
pub fn is_valid_region_format(region: &str) -> bool {
    REGION_PATTERN.is_match(region)
        || GOV_CLOUD_PATTERN.is_match(region)
        || CHINA_PATTERN.is_match(region)
}

/// Service package identifier: `@<namespace>/client-<service-name>`
pub fn is_valid_service_format(service: &str) -> bool {
    SERVICE_PATTERN.is_match(service)
}
