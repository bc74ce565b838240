//! Detection of the package manager used for discovery

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether npm (or the configured replacement) can be executed
pub fn check_npm(program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: "npm",
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "npm",
            version: None,
            available: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_unavailable() {
        let info = check_npm("/nonexistent/bin/npm-for-tests");
        assert!(!info.available);
        assert!(info.version.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_available_program_reports_version() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("npm");
        std::fs::write(&stub, "#!/bin/sh\necho 10.2.0\n").unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

        let info = check_npm(stub.to_str().unwrap());
        assert!(info.available);
        assert_eq!(info.version.as_deref(), Some("10.2.0"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_is_unavailable() {
        let info = check_npm("false");
        assert!(!info.available);
    }
}
