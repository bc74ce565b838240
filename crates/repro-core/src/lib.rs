//! Repro Core - catalogs, operation discovery and fuzzy validation for
//! AWS SDK reproduction projects
//!
//! This library answers the questions a repro scaffolder asks while the
//! user picks a service, an operation and a region: which values exist,
//! which ones look like what the user typed, and what to say when the
//! input is wrong.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Data** - Embedded service and region catalogs, format rules
//! - **Layer 2: Matching** - Edit distance, type-ahead and "did you mean" via [`Assistant`]
//! - **Layer 3: Discovery** - Fetching a client package into a sandbox and reading its operations
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use repro_core::{discover_operations, Assistant, Catalogs, Domain};
//! use std::sync::Arc;
//!
//! let catalogs = Arc::new(Catalogs::builtin()?);
//! let operations = discover_operations("@aws-sdk/client-s3").await;
//! let assistant = Assistant::new(catalogs).with_operations(operations);
//!
//! if let Err(hint) = assistant.check(Domain::Operation, "list-bucket") {
//!     eprintln!("{hint}"); // Operation not found. Did you mean: list-buckets?
//! }
//! ```

pub mod assist;
pub mod catalog;
pub mod config;
pub mod discovery;
pub mod operations;
pub mod runtime;
pub mod sdk;
pub mod similarity;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use assist::{Assistant, Domain, DomainFacade};
pub use catalog::{Catalog, CatalogEntry, Catalogs};
pub use config::Settings;
pub use discovery::{discover_operations, Discovered, Discovery, DiscoveryError, NpmSandbox};
pub use operations::OperationSet;
pub use runtime::{check_npm, RuntimeInfo};
pub use sdk::{Sdk, Selection};

#[cfg(feature = "tui")]
pub use tui::run;
