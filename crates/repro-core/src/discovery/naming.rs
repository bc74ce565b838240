//! Conversions between SDK command names and kebab-case operation names

use crate::validate::is_valid_operation_format;

const COMMAND_SUFFIX: &str = "Command";

/// PascalCase to kebab-case: a hyphen before every internal uppercase
/// letter, then lowercase everything (`GetBucketAcl` -> `get-bucket-acl`)
///
/// Idempotent on kebab-case input.
pub fn normalize_operation_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `ListBucketsCommand` -> `list-buckets`
///
/// Returns `None` unless the name is `<PascalCase>Command` and normalizes to
/// a well-formed operation.
pub fn command_to_operation(command: &str) -> Option<String> {
    let base = command.strip_suffix(COMMAND_SUFFIX)?;
    let mut chars = base.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let operation = normalize_operation_name(base);
    is_valid_operation_format(&operation).then_some(operation)
}

/// Operation name in PascalCase, accepting kebab-case or PascalCase input
/// (`list-buckets` -> `ListBuckets`)
pub fn pascal_case(operation: &str) -> String {
    operation
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// SDK command class for an operation (`list-buckets` -> `ListBucketsCommand`)
pub fn command_name(operation: &str) -> String {
    format!("{}{}", pascal_case(operation), COMMAND_SUFFIX)
}

/// Java SDK v2 client method for an operation (`list-buckets` -> `listBuckets`)
pub fn java_method_name(operation: &str) -> String {
    let pascal = pascal_case(operation);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
