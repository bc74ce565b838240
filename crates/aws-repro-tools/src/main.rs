//! AWS Repro Tools - pick a service, operation and region for an SDK repro project

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use colored::Colorize;
use repro_core::config::LOG_ENV;
use repro_core::tui::CreateArgs;
use repro_core::{
    Assistant, Catalog, Catalogs, Discovered, Discovery, Domain, NpmSandbox, Sdk, Settings,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aws-repro-tools")]
#[command(about = "CLI for scaffolding AWS SDK reproduction projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose an SDK, service, operation and region interactively
    Create(CliCreateArgs),
    /// List the operations a service package exposes
    Operations(OperationsArgs),
    /// Validate a service, operation or region
    Check(CheckArgs),
    /// Type-ahead suggestions for a partial value
    Suggest(SuggestArgs),
    /// List known services
    Services,
    /// List known regions
    Regions,
}

/// Flags shared by every command that may fetch a package
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct DiscoveryArgs {
    /// Package fetch timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Do not fetch the package; operations are checked by format only
    #[arg(long = "no-discovery")]
    pub no_discovery: bool,
}

impl DiscoveryArgs {
    fn timeout(&self) -> Option<Duration> {
        self.timeout.filter(|secs| *secs > 0).map(Duration::from_secs)
    }

    fn settings(&self) -> Settings {
        let settings = Settings::from_env();
        match self.timeout() {
            Some(timeout) => settings.with_timeout(timeout),
            None => settings,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// SDK to target
    #[arg(long, value_enum)]
    pub sdk: Option<Sdk>,

    /// Client package (e.g. @aws-sdk/client-s3)
    #[arg(short, long)]
    pub service: Option<String>,

    /// Operation in kebab-case (e.g. list-buckets)
    #[arg(short, long)]
    pub operation: Option<String>,

    /// Region code (e.g. us-west-1)
    #[arg(short, long)]
    pub region: Option<String>,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            sdk: args.sdk,
            service: args.service,
            operation: args.operation,
            region: args.region,
            no_discovery: args.discovery.no_discovery,
            discovery_timeout: args.discovery.timeout(),
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct OperationsArgs {
    /// Client package (e.g. @aws-sdk/client-s3)
    pub service: String,

    /// Package fetch timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[arg(value_enum)]
    pub domain: Domain,

    pub value: String,

    /// Service whose operations an operation is checked against
    #[arg(long)]
    pub service: Option<String>,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,
}

#[derive(Parser, Debug)]
pub struct SuggestArgs {
    #[arg(value_enum)]
    pub domain: Domain,

    /// Partial input; everything is listed when omitted
    #[arg(default_value = "")]
    pub input: String,

    /// Service whose operations are suggested
    #[arg(long)]
    pub service: Option<String>,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_logging();

    let args = Args::parse();

    match args.command {
        Some(Command::Create(create_args)) => create(create_args.into()).await,
        Some(Command::Operations(ops_args)) => list_operations(ops_args).await,
        Some(Command::Check(check_args)) => check(check_args).await,
        Some(Command::Suggest(suggest_args)) => suggest(suggest_args).await,
        Some(Command::Services) => list_catalog(|catalogs| &catalogs.services),
        Some(Command::Regions) => list_catalog(|catalogs| &catalogs.regions),
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            create(CreateArgs::default()).await
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn create(args: CreateArgs) -> Result<()> {
    let result = repro_core::run(args).await.map(|_| ());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

async fn discover(service: &str, settings: &Settings) -> Discovered {
    Discovery::new(NpmSandbox::from_settings(settings))
        .discover(service)
        .await
}

/// Catalog-backed assistant, with operations when a service is given
async fn assistant_for(service: Option<&str>, discovery: &DiscoveryArgs) -> Result<Assistant> {
    let catalogs = Catalogs::builtin().context("Failed to load built-in catalogs")?;
    let assistant = Assistant::new(Arc::new(catalogs));

    match service {
        Some(service) if !discovery.no_discovery => {
            let discovered = discover(service, &discovery.settings()).await;
            for message in discovery_warnings(&discovered) {
                warn!("{}", message);
            }
            Ok(assistant.with_operations(discovered.into_operations()))
        }
        _ => Ok(assistant),
    }
}

/// What a degraded or untidy discovery should tell the user
fn discovery_warnings(discovered: &Discovered) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(e) = &discovered.diagnostic {
        warnings.push(format!("{}; operations are checked by format only", e));
    }
    if let Some(e) = &discovered.cleanup_error {
        warnings.push(e.to_string());
    }
    warnings
}

async fn list_operations(args: OperationsArgs) -> Result<()> {
    let discovery = DiscoveryArgs {
        timeout: args.timeout,
        no_discovery: false,
    };
    let discovered = discover(&args.service, &discovery.settings()).await;

    if let Some(e) = &discovered.diagnostic {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }

    for operation in discovered.operations.iter() {
        println!("{}", operation);
    }

    if discovered.operations.is_empty() {
        eprintln!(
            "{} no operations recognized in {}",
            "warning:".yellow().bold(),
            args.service
        );
    }

    Ok(())
}

async fn check(args: CheckArgs) -> Result<()> {
    let assistant = assistant_for(args.service.as_deref(), &args.discovery).await?;

    match assistant.check(args.domain, &args.value) {
        Ok(()) => {
            println!("{} {}", "✓".green(), args.value.trim());
            Ok(())
        }
        Err(hint) => {
            eprintln!("{} {}", "✗".red(), hint);
            std::process::exit(1);
        }
    }
}

async fn suggest(args: SuggestArgs) -> Result<()> {
    let assistant = assistant_for(args.service.as_deref(), &args.discovery).await?;

    for suggestion in assistant.suggest(args.domain, &args.input) {
        println!("{}", suggestion);
    }

    Ok(())
}

fn list_catalog(pick: fn(&Catalogs) -> &Catalog) -> Result<()> {
    let catalogs = Catalogs::builtin().context("Failed to load built-in catalogs")?;
    let catalog = pick(&catalogs);

    let width = catalog.all().iter().map(|e| e.code.len()).max().unwrap_or(0);
    for entry in catalog.all() {
        println!("{:<width$}  {}", entry.code, entry.display_name.dimmed(), width = width);
    }

    Ok(())
}
