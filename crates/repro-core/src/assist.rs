//! Suggestion and correction for service, operation and region input
//!
//! Each domain composes a candidate list (a catalog or a discovered
//! [`OperationSet`]) with its format rule and the similarity engine.
//!
//! Validation strictness depends on the candidates: with an empty list
//! (discovery failed or was skipped) only the format is checked, otherwise
//! the value must be a member. This is a deliberate relaxation so that an
//! offline machine can still use the tool.

use crate::catalog::{Catalog, Catalogs};
use crate::operations::OperationSet;
use crate::similarity::{SuggestionQuery, SUGGESTION_LIMIT};
use crate::validate::{is_valid_operation_format, is_valid_region_format, is_valid_service_format};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// How many known values a "not found" message lists
const LISTING_LIMIT: usize = 5;

/// Kind of user input being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Domain {
    Service,
    Operation,
    Region,
}

impl Domain {
    fn noun(&self) -> &'static str {
        match self {
            Domain::Service => "Service",
            Domain::Operation => "Operation",
            Domain::Region => "Region",
        }
    }

    fn plural(&self) -> &'static str {
        match self {
            Domain::Service => "services",
            Domain::Operation => "operations",
            Domain::Region => "regions",
        }
    }

    /// Maximum number of "did you mean" entries
    fn correction_limit(&self) -> usize {
        match self {
            Domain::Region => 5,
            Domain::Service | Domain::Operation => 3,
        }
    }

    fn format_hint(&self) -> &'static str {
        match self {
            Domain::Service => {
                "Service must be an AWS SDK client package (e.g., @aws-sdk/client-s3, @aws-sdk/client-dynamodb)"
            }
            Domain::Operation => {
                "Operation must be in kebab-case format (e.g., list-buckets, get-object)"
            }
            Domain::Region => {
                "Invalid region format. AWS regions follow the pattern: prefix-direction-number (e.g., us-west-2, eu-central-1)"
            }
        }
    }

    fn is_well_formed(&self, value: &str) -> bool {
        match self {
            Domain::Service => is_valid_service_format(value),
            Domain::Operation => is_valid_operation_format(value),
            Domain::Region => is_valid_region_format(value),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.noun().to_lowercase())
    }
}

/// Suggestion and validation for one domain
#[derive(Debug, Clone)]
pub struct DomainFacade<'a> {
    domain: Domain,
    candidates: Cow<'a, [String]>,
    catalog: Option<&'a Catalog>,
}

impl<'a> DomainFacade<'a> {
    pub fn services(catalog: &'a Catalog) -> Self {
        Self::from_catalog(Domain::Service, catalog)
    }

    pub fn regions(catalog: &'a Catalog) -> Self {
        Self::from_catalog(Domain::Region, catalog)
    }

    pub fn operations(operations: &'a OperationSet) -> Self {
        Self {
            domain: Domain::Operation,
            candidates: Cow::Borrowed(operations.as_slice()),
            catalog: None,
        }
    }

    fn from_catalog(domain: Domain, catalog: &'a Catalog) -> Self {
        Self {
            domain,
            candidates: Cow::Owned(catalog.codes()),
            catalog: Some(catalog),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Type-ahead: everything for empty input, otherwise substring matches
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let input = input.trim();
        if input.is_empty() {
            return self.candidates.to_vec();
        }
        SuggestionQuery::new(input, &self.candidates).substring_matches(SUGGESTION_LIMIT)
    }

    /// Membership when candidates are known, format only otherwise
    pub fn is_valid(&self, value: &str) -> bool {
        let value = self.normalize(value);
        if self.candidates.is_empty() {
            return self.domain.is_well_formed(&value);
        }
        match self.catalog {
            Some(catalog) => catalog.contains(&value),
            None => self.candidates.iter().any(|c| *c == value),
        }
    }

    /// Human-readable explanation of why `value` was rejected
    pub fn error_message(&self, value: &str) -> String {
        let value = self.normalize(value);

        if self.domain == Domain::Region {
            if let Some(rewritten) = self.underscore_rewrite(&value) {
                return format!(
                    "Invalid format. Did you mean: {}? (use hyphens, not underscores)",
                    rewritten
                );
            }
        }

        if !self.domain.is_well_formed(&value) {
            return self.domain.format_hint().to_string();
        }

        if self.candidates.is_empty() {
            return format!(
                "Could not validate {noun}. Please ensure the {noun} name is correct.",
                noun = self.domain
            );
        }

        let similar = SuggestionQuery::new(&value, &self.candidates)
            .corrections(self.domain.correction_limit());

        if !similar.is_empty() {
            let labelled: Vec<String> = similar.iter().map(|code| self.label(code)).collect();
            return format!(
                "{} not found. Did you mean: {}?",
                self.domain.noun(),
                labelled.join(", ")
            );
        }

        let listing: Vec<&str> = self
            .candidates
            .iter()
            .take(LISTING_LIMIT)
            .map(String::as_str)
            .collect();
        let more = if self.candidates.len() > LISTING_LIMIT {
            "..."
        } else {
            ""
        };
        format!(
            "{} not found. Available {}: {}{}",
            self.domain.noun(),
            self.domain.plural(),
            listing.join(", "),
            more
        )
    }

    /// Validate, returning the error message on rejection
    pub fn check(&self, value: &str) -> Result<(), String> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(self.error_message(value))
        }
    }

    fn normalize<'v>(&self, value: &'v str) -> Cow<'v, str> {
        let value = value.trim();
        match self.domain {
            Domain::Region => Cow::Owned(value.to_lowercase()),
            Domain::Service | Domain::Operation => Cow::Borrowed(value),
        }
    }

    /// `us_west_1` -> `us-west-1` when the hyphenated form is acceptable
    fn underscore_rewrite(&self, value: &str) -> Option<String> {
        if !value.contains('_') {
            return None;
        }
        let rewritten = value.replace('_', "-");
        self.is_valid(&rewritten).then_some(rewritten)
    }

    /// Regions carry their display name in corrections
    fn label(&self, code: &str) -> String {
        match (self.domain, self.catalog) {
            (Domain::Region, Some(catalog)) => format!("{} ({})", code, catalog.lookup(code)),
            _ => code.to_string(),
        }
    }
}

/// The facade for all three domains, bound to the catalogs and the
/// operations discovered for the selected service
#[derive(Debug, Clone)]
pub struct Assistant {
    catalogs: Arc<Catalogs>,
    operations: OperationSet,
}

impl Assistant {
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self {
            catalogs,
            operations: OperationSet::new(),
        }
    }

    pub fn with_operations(mut self, operations: OperationSet) -> Self {
        self.operations = operations;
        self
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn operations(&self) -> &OperationSet {
        &self.operations
    }

    pub fn facade(&self, domain: Domain) -> DomainFacade<'_> {
        match domain {
            Domain::Service => DomainFacade::services(&self.catalogs.services),
            Domain::Operation => DomainFacade::operations(&self.operations),
            Domain::Region => DomainFacade::regions(&self.catalogs.regions),
        }
    }

    pub fn suggest(&self, domain: Domain, input: &str) -> Vec<String> {
        self.facade(domain).suggest(input)
    }

    pub fn is_valid(&self, domain: Domain, value: &str) -> bool {
        self.facade(domain).is_valid(value)
    }

    pub fn error_message(&self, domain: Domain, value: &str) -> String {
        self.facade(domain).error_message(value)
    }

    pub fn check(&self, domain: Domain, value: &str) -> Result<(), String> {
        self.facade(domain).check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, CodeMatch};

    fn assistant() -> Assistant {
        Assistant::new(Arc::new(Catalogs::builtin().unwrap()))
    }

    fn s3_ops() -> OperationSet {
        OperationSet::from_names(["list-buckets", "get-bucket-acl", "get-bucket-policy"])
    }

    #[test]
    fn test_operation_suggest() {
        let a = assistant().with_operations(s3_ops());
        assert_eq!(a.suggest(Domain::Operation, "get-bucket-p"), vec!["get-bucket-policy"]);
        assert_eq!(a.suggest(Domain::Operation, "").len(), 3);
        assert!(a.suggest(Domain::Operation, "zzz").is_empty());
    }

    #[test]
    fn test_operation_suggest_without_discovery_is_empty() {
        let a = assistant();
        assert!(a.suggest(Domain::Operation, "list").is_empty());
    }

    #[test]
    fn test_operation_validation_tiers() {
        let offline = assistant();
        assert!(offline.is_valid(Domain::Operation, "anything-well-formed"));
        assert!(!offline.is_valid(Domain::Operation, "ListBuckets"));

        let online = assistant().with_operations(s3_ops());
        assert!(online.is_valid(Domain::Operation, "list-buckets"));
        assert!(!online.is_valid(Domain::Operation, "anything-well-formed"));
    }

    #[test]
    fn test_operation_error_messages() {
        let offline = assistant();
        assert_eq!(
            offline.error_message(Domain::Operation, "ListBuckets"),
            "Operation must be in kebab-case format (e.g., list-buckets, get-object)"
        );
        assert_eq!(
            offline.error_message(Domain::Operation, "list-bukets"),
            "Could not validate operation. Please ensure the operation name is correct."
        );

        let online = assistant().with_operations(s3_ops());
        assert_eq!(
            online.error_message(Domain::Operation, "get-buckets-policy"),
            "Operation not found. Did you mean: get-bucket-policy?"
        );
        assert_eq!(
            online.error_message(Domain::Operation, "delete-everything"),
            "Operation not found. Available operations: get-bucket-acl, get-bucket-policy, list-buckets"
        );
    }

    #[test]
    fn test_operation_listing_truncates() {
        let ops = OperationSet::from_names((0..8).map(|i| format!("op-{}", i)));
        let a = assistant().with_operations(ops);
        assert_eq!(
            a.error_message(Domain::Operation, "unrelated-name"),
            "Operation not found. Available operations: op-0, op-1, op-2, op-3, op-4..."
        );
    }

    #[test]
    fn test_region_underscore_rewrite() {
        let a = assistant();
        assert!(!a.is_valid(Domain::Region, "us_west_1"));
        assert_eq!(
            a.error_message(Domain::Region, "us_west_1"),
            "Invalid format. Did you mean: us-west-1? (use hyphens, not underscores)"
        );
        assert_eq!(
            a.error_message(Domain::Region, "US_WEST_1"),
            "Invalid format. Did you mean: us-west-1? (use hyphens, not underscores)"
        );
    }

    #[test]
    fn test_region_underscore_rewrite_must_be_known() {
        let a = assistant();
        assert_eq!(
            a.error_message(Domain::Region, "xx_west_9"),
            Domain::Region.format_hint()
        );
    }

    #[test]
    fn test_region_case_insensitive_membership() {
        let a = assistant();
        assert!(a.is_valid(Domain::Region, "US-WEST-2"));
        assert!(a.is_valid(Domain::Region, " eu-central-1 "));
        assert!(!a.is_valid(Domain::Region, "us-west-3"));
    }

    #[test]
    fn test_region_corrections_carry_display_names() {
        let a = assistant();
        let message = a.error_message(Domain::Region, "us-west-3");
        assert!(message.starts_with("Region not found. Did you mean: "));
        assert!(message.contains("us-west-1 (US West (N. California))"));
        assert!(message.contains("us-west-2 (US West (Oregon))"));
    }

    #[test]
    fn test_corrections_capped_per_domain() {
        let entries = (1..=8)
            .map(|i| CatalogEntry {
                code: format!("xx-west-{}", i),
                display_name: format!("Test {}", i),
                java_name: None,
            })
            .collect();
        let regions = Catalog::new(entries, CodeMatch::IgnoreCase).unwrap();
        assert_eq!(
            DomainFacade::regions(&regions).error_message("xx-west-0"),
            "Region not found. Did you mean: xx-west-1 (Test 1), xx-west-2 (Test 2), \
             xx-west-3 (Test 3), xx-west-4 (Test 4), xx-west-5 (Test 5)?"
        );

        let ops = OperationSet::from_names((1..=8).map(|i| format!("get-thing{}", i)));
        assert_eq!(
            DomainFacade::operations(&ops).error_message("get-thing0"),
            "Operation not found. Did you mean: get-thing1, get-thing2, get-thing3?"
        );
    }

    #[test]
    fn test_region_format_and_listing() {
        let a = assistant();
        assert_eq!(a.error_message(Domain::Region, "mars"), Domain::Region.format_hint());
        assert_eq!(
            a.error_message(Domain::Region, "zz-northwest-42"),
            "Region not found. Available regions: us-east-1, us-east-2, us-west-1, us-west-2, af-south-1..."
        );
    }

    #[test]
    fn test_region_suggest_defaults_to_full_catalog() {
        let a = assistant();
        assert_eq!(a.suggest(Domain::Region, "").len(), 32);
        assert_eq!(
            a.suggest(Domain::Region, "GOV"),
            vec!["us-gov-east-1", "us-gov-west-1"]
        );
    }

    #[test]
    fn test_service_domain() {
        let a = assistant();
        assert!(a.is_valid(Domain::Service, "@aws-sdk/client-s3"));
        assert!(!a.is_valid(Domain::Service, "@aws-sdk/client-glue"));
        assert_eq!(a.suggest(Domain::Service, "dynamo"), vec!["@aws-sdk/client-dynamodb"]);
        assert_eq!(a.error_message(Domain::Service, "s3"), Domain::Service.format_hint());
        assert_eq!(
            a.error_message(Domain::Service, "@aws-sdk/client-dynamodbb"),
            "Service not found. Did you mean: @aws-sdk/client-dynamodb?"
        );
    }

    #[test]
    fn test_check_wraps_error_message() {
        let a = assistant().with_operations(s3_ops());
        assert_eq!(a.check(Domain::Operation, "list-buckets"), Ok(()));
        assert_eq!(
            a.check(Domain::Operation, "list-bucket"),
            Err("Operation not found. Did you mean: list-buckets?".to_string())
        );
    }

    #[test]
    fn test_domain_display() {
        assert_eq!(Domain::Operation.to_string(), "operation");
        assert_eq!(Domain::Region.to_string(), "region");
    }
}
