//! Charm-style CLI prompts using cliclack

use crate::assist::{Assistant, Domain};
use crate::catalog::regions::DEFAULT_REGION;
use crate::catalog::Catalogs;
use crate::config::Settings;
use crate::discovery::{Discovery, NpmSandbox};
use crate::operations::OperationSet;
use crate::runtime::check_npm;
use crate::sdk::{Sdk, Selection};
use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;

/// How many discovered operations are shown before the operation prompt
const PREVIEW_LIMIT: usize = 5;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// SDK flavor; prompted when absent
    pub sdk: Option<Sdk>,

    /// Client package, e.g. `@aws-sdk/client-s3`
    pub service: Option<String>,

    /// Kebab-case operation name
    pub operation: Option<String>,

    /// Region code
    pub region: Option<String>,

    /// Skip fetching the package; operations are checked by format only
    pub no_discovery: bool,

    /// Override for the package fetch timeout
    pub discovery_timeout: Option<Duration>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the interactive selection flow
pub async fn run(args: CreateArgs) -> Result<Selection> {
    cliclack::intro("AWS SDK repro")?;

    let catalogs = Arc::new(Catalogs::builtin().context("Failed to load built-in catalogs")?);
    let assistant = Assistant::new(Arc::clone(&catalogs));

    // Step 1: SDK flavor
    let sdk = select_sdk(&args)?;

    // Step 2: Service package
    let service = select_service(&assistant, &args)?;

    // Step 3: Discover the operations the package exposes
    let operations = discover(&service, &args).await?;
    let assistant = assistant.with_operations(operations);

    // Step 4: Operation
    let operation = select_operation(&assistant, &args)?;

    // Step 5: Region
    let region = select_region(&assistant, sdk, &args)?;

    let selection = Selection {
        sdk,
        service,
        operation,
        region,
    };

    print_summary(&selection, &catalogs)?;

    Ok(selection)
}

fn select_sdk(args: &CreateArgs) -> Result<Sdk> {
    if let Some(sdk) = args.sdk {
        cliclack::log::info(format!("Using SDK: {}", sdk))?;
        return Ok(sdk);
    }

    if args.yes {
        return Ok(Sdk::default());
    }

    let mut select = cliclack::select("Select an SDK");
    for sdk in Sdk::all() {
        select = select.item(*sdk, sdk.display_name(), "");
    }

    Ok(select.interact()?)
}

fn select_service(assistant: &Assistant, args: &CreateArgs) -> Result<String> {
    if let Some(service) = preset(assistant, Domain::Service, args.service.as_deref())? {
        return Ok(service);
    }

    if args.yes {
        anyhow::bail!("--service is required with --yes");
    }

    let services = &assistant.catalogs().services;
    let mut select = cliclack::select("Select a service").filter_mode();
    for entry in services.all() {
        select = select.item(entry.code.clone(), &entry.display_name, &entry.code);
    }

    Ok(select.interact()?)
}

async fn discover(service: &str, args: &CreateArgs) -> Result<OperationSet> {
    if args.no_discovery {
        cliclack::log::info("Skipping operation discovery; operations are checked by format only")?;
        return Ok(OperationSet::new());
    }

    let mut settings = Settings::from_env();
    if let Some(timeout) = args.discovery_timeout {
        settings = settings.with_timeout(timeout);
    }

    let npm = check_npm(settings.npm_program());
    if !npm.available {
        cliclack::log::warning(format!(
            "{} is not available; operations are checked by format only",
            settings.npm_program()
        ))?;
        return Ok(OperationSet::new());
    }

    let spinner = cliclack::spinner();
    spinner.start(format!("Discovering operations in {}...", service));

    let discovered = Discovery::new(NpmSandbox::from_settings(&settings))
        .discover(service)
        .await;

    if let Some(e) = &discovered.diagnostic {
        spinner.stop("Could not discover operations");
        cliclack::log::warning(format!("{}; operations are checked by format only", e))?;
    } else if discovered.operations.is_empty() {
        spinner.stop("No operations recognized in the package");
        cliclack::log::warning("Operations are checked by format only")?;
    } else {
        let version = discovered
            .package_version
            .as_ref()
            .map(|v| format!("@{}", v))
            .unwrap_or_default();
        spinner.stop(format!(
            "Found {} operations in {}{}",
            discovered.operations.len(),
            service,
            version
        ));
    }

    if let Some(e) = &discovered.cleanup_error {
        cliclack::log::warning(e)?;
    }

    Ok(discovered.into_operations())
}

fn select_operation(assistant: &Assistant, args: &CreateArgs) -> Result<String> {
    if let Some(operation) = preset(assistant, Domain::Operation, args.operation.as_deref())? {
        return Ok(operation);
    }

    if args.yes {
        anyhow::bail!("--operation is required with --yes");
    }

    let preview = assistant.suggest(Domain::Operation, "");
    let placeholder = preview
        .first()
        .cloned()
        .unwrap_or_else(|| "list-buckets".to_string());

    if !preview.is_empty() {
        let shown: Vec<&str> = preview.iter().take(PREVIEW_LIMIT).map(String::as_str).collect();
        let more = preview.len().saturating_sub(PREVIEW_LIMIT);
        let tail = if more > 0 {
            format!(" and {} more", more)
        } else {
            String::new()
        };
        cliclack::log::info(format!("Operations: {}{}", shown.join(", "), tail))?;
    }

    let validator = assistant.clone();
    let operation: String = cliclack::input("Operation")
        .placeholder(&placeholder)
        .validate(move |input: &String| validator.check(Domain::Operation, input))
        .interact()?;

    Ok(operation.trim().to_string())
}

fn select_region(assistant: &Assistant, sdk: Sdk, args: &CreateArgs) -> Result<String> {
    let given = args.region.as_deref().map(|region| sdk.standard_region(region));
    if let Some(region) = preset(assistant, Domain::Region, given.as_deref())? {
        return Ok(region.to_lowercase());
    }

    if args.yes {
        return Ok(DEFAULT_REGION.to_string());
    }

    let default = sdk.region_notation(DEFAULT_REGION);
    let validator = assistant.clone();
    let region: String = cliclack::input("Region")
        .placeholder(&default)
        .default_input(&default)
        .validate(move |input: &String| {
            validator.check(Domain::Region, &sdk.standard_region(input))
        })
        .interact()?;

    Ok(sdk.standard_region(&region).to_lowercase())
}

/// Validate a value given on the command line the same way a typed one is
fn preset(assistant: &Assistant, domain: Domain, value: Option<&str>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };

    match assistant.check(domain, value) {
        Ok(()) => {
            let value = value.trim().to_string();
            cliclack::log::info(format!("Using {}: {}", domain, value))?;
            Ok(Some(value))
        }
        Err(hint) => {
            cliclack::log::error(&hint)?;
            anyhow::bail!("Invalid {} '{}'", domain, value);
        }
    }
}

fn print_summary(selection: &Selection, catalogs: &Catalogs) -> Result<()> {
    println!();
    println!("  {}", "Selection".bold());
    println!();

    for (label, value) in selection.summary(catalogs) {
        println!("  {:<10} {}", label.dimmed(), value);
    }

    cliclack::outro("Ready to scaffold")?;

    Ok(())
}
