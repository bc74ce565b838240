//! AWS SDK service package catalog

use super::{Catalog, CatalogError, CodeMatch};

const SERVICES_YAML: &str = include_str!("../../catalogs/services.yaml");

/// Package prefix shared by every AWS SDK for JavaScript v3 client
pub const CLIENT_PACKAGE_PREFIX: &str = "@aws-sdk/client-";

/// Load the embedded service catalog
pub fn builtin() -> Result<Catalog, CatalogError> {
    Catalog::from_yaml(SERVICES_YAML, CodeMatch::Exact)
}

/// Java SDK module name for a service package
///
/// Uses the catalog row when there is one, otherwise strips the client
/// package prefix (`@aws-sdk/client-s3` -> `s3`).
pub fn java_service_name(catalog: &Catalog, package: &str) -> String {
    if let Some(java) = catalog.get(package).and_then(|e| e.java_name.as_deref()) {
        return java.to_string();
    }

    let lower = package.to_lowercase();
    lower
        .strip_prefix(CLIENT_PACKAGE_PREFIX)
        .unwrap_or(&lower)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_services() {
        let services = builtin().unwrap();
        assert_eq!(services.all()[0].code, "@aws-sdk/client-s3");
        assert_eq!(services.lookup("@aws-sdk/client-dynamodb"), "DynamoDB");
        assert!(!services.contains("@AWS-SDK/client-s3"));
    }

    #[test]
    fn test_java_service_name_from_catalog() {
        let services = builtin().unwrap();
        assert_eq!(
            java_service_name(&services, "@aws-sdk/client-secrets-manager"),
            "secretsmanager"
        );
    }

    #[test]
    fn test_java_service_name_fallback() {
        let services = builtin().unwrap();
        assert_eq!(java_service_name(&services, "@AWS-SDK/client-Glue"), "glue");
        assert_eq!(java_service_name(&services, "athena"), "athena");
    }
}
