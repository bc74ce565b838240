//! SDK flavors and the final set of choices for a repro project

use crate::catalog::regions::{java_region_to_standard, standard_region_to_java};
use crate::catalog::services::java_service_name;
use crate::catalog::Catalogs;
use crate::discovery::naming::{command_name, java_method_name};
use std::fmt;

/// Which AWS SDK the repro project targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Sdk {
    /// AWS SDK for JavaScript v3
    #[default]
    #[value(name = "js")]
    JavaScript,
    /// AWS SDK for Java 2.x
    Java,
}

impl Sdk {
    pub fn display_name(&self) -> &'static str {
        match self {
            Sdk::JavaScript => "JavaScript (v3)",
            Sdk::Java => "Java (v2)",
        }
    }

    pub fn all() -> &'static [Sdk] {
        &[Sdk::JavaScript, Sdk::Java]
    }

    /// Region code as typed by a user of this SDK, in standard notation
    ///
    /// Java users write `US_WEST_1`; that is accepted as `us-west-1`. Other
    /// input is only trimmed so the region checks can still point out
    /// underscores to JavaScript users.
    pub fn standard_region(&self, input: &str) -> String {
        let input = input.trim();
        match self {
            Sdk::Java => java_region_to_standard(input),
            Sdk::JavaScript => input.to_string(),
        }
    }

    /// A standard region code in this SDK's notation
    pub fn region_notation(&self, region: &str) -> String {
        match self {
            Sdk::Java => standard_region_to_java(region),
            Sdk::JavaScript => region.to_string(),
        }
    }
}

impl fmt::Display for Sdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A validated set of answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub sdk: Sdk,
    /// Client package, e.g. `@aws-sdk/client-s3`
    pub service: String,
    /// Kebab-case operation, e.g. `list-buckets`
    pub operation: String,
    /// Standard region code, e.g. `us-west-1`
    pub region: String,
}

impl Selection {
    /// Label/value rows in the notation of the chosen SDK
    pub fn summary(&self, catalogs: &Catalogs) -> Vec<(&'static str, String)> {
        let service_name = catalogs.services.lookup(&self.service);
        let region_name = catalogs.regions.lookup(&self.region);

        match self.sdk {
            Sdk::JavaScript => vec![
                ("SDK", self.sdk.to_string()),
                ("Service", format!("{} ({})", self.service, service_name)),
                ("Operation", command_name(&self.operation)),
                ("Region", format!("{} ({})", self.region, region_name)),
            ],
            Sdk::Java => vec![
                ("SDK", self.sdk.to_string()),
                (
                    "Service",
                    format!(
                        "{} ({})",
                        java_service_name(&catalogs.services, &self.service),
                        service_name
                    ),
                ),
                ("Operation", java_method_name(&self.operation)),
                (
                    "Region",
                    format!("Region.{} ({})", standard_region_to_java(&self.region), region_name),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(sdk: Sdk) -> Selection {
        Selection {
            sdk,
            service: "@aws-sdk/client-s3".to_string(),
            operation: "list-buckets".to_string(),
            region: "us-west-1".to_string(),
        }
    }

    #[test]
    fn test_javascript_summary() {
        let catalogs = Catalogs::builtin().unwrap();
        let rows = selection(Sdk::JavaScript).summary(&catalogs);
        assert_eq!(rows[1].1, "@aws-sdk/client-s3 (S3)");
        assert_eq!(rows[2].1, "ListBucketsCommand");
        assert_eq!(rows[3].1, "us-west-1 (US West (N. California))");
    }

    #[test]
    fn test_java_summary_uses_java_notation() {
        let catalogs = Catalogs::builtin().unwrap();
        let rows = selection(Sdk::Java).summary(&catalogs);
        assert_eq!(rows[0].1, "Java (v2)");
        assert_eq!(rows[1].1, "s3 (S3)");
        assert_eq!(rows[2].1, "listBuckets");
        assert_eq!(rows[3].1, "Region.US_WEST_1 (US West (N. California))");
    }

    #[test]
    fn test_java_region_input_is_accepted() {
        let assistant = crate::Assistant::new(std::sync::Arc::new(Catalogs::builtin().unwrap()));

        let region = Sdk::Java.standard_region(" US_WEST_1 ");
        assert_eq!(region, "us-west-1");
        assert!(assistant.is_valid(crate::Domain::Region, &region));

        let region = Sdk::JavaScript.standard_region("US_WEST_1");
        assert!(!assistant.is_valid(crate::Domain::Region, &region));
    }

    #[test]
    fn test_region_notation() {
        assert_eq!(Sdk::Java.region_notation("us-west-1"), "US_WEST_1");
        assert_eq!(Sdk::JavaScript.region_notation("us-west-1"), "us-west-1");
    }

    #[test]
    fn test_default_sdk() {
        assert_eq!(Sdk::default(), Sdk::JavaScript);
        assert_eq!(Sdk::all().len(), 2);
    }
}
