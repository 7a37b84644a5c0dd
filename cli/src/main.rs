//! CLI entrypoint for hvac-site
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use hvac_application::{LeadApi, SiteSession, SubmitOutcome};
use hvac_domain::{LeadKind, SiteContent};
use hvac_infrastructure::{ConfigLoader, FileConfig, HttpLeadApi};
use hvac_presentation::{Cli, Command, PageRenderer, SiteRepl, StatusBanner};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    info!("Starting hvac-site");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let config = load_config(&cli)?;
        println!();
        println!("Effective configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    // Create infrastructure adapter (HTTP backend client)
    let api = Arc::new(
        HttpLeadApi::new(&config.api.base_url, config.api.timeout())
            .context("Failed to create backend client")?,
    );

    match cli.command.unwrap_or(Command::Page) {
        Command::Page => {
            let session = SiteSession::new(api);
            let _ = session.load().await;
            println!(
                "{}",
                PageRenderer::render(
                    SiteContent::continental(),
                    &session.testimonials(),
                    &session.status()
                )
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Testimonials => {
            let session = SiteSession::new(api);
            let _ = session.load().await;
            let testimonials = session.testimonials();
            if testimonials.is_empty() {
                println!("No testimonials yet");
            } else {
                print!("{}", PageRenderer::render_testimonials(&testimonials));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Quote(args) => submit_once(api, LeadKind::Quote, args.fields()).await,
        Command::Contact(args) => submit_once(api, LeadKind::Contact, args.fields()).await,
        Command::Interactive => {
            let mut repl = SiteRepl::new(api);
            repl.run().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(cli: &Cli) -> Result<WorkerGuard> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (writer, guard) = match &cli.log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
            tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(cli.log_file.is_none())
        .with_writer(writer)
        .init();

    Ok(guard)
}

/// Merge config files, environment and command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let loaded = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    if let Some(url) = &cli.api_base_url {
        config.api.base_url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_seconds = timeout;
    }

    config.validate()?;
    info!("Using backend {}", config.api.base_url);
    Ok(config)
}

/// Fill one form from command-line values and submit it
async fn submit_once<A: LeadApi + 'static>(
    api: Arc<A>,
    kind: LeadKind,
    fields: Vec<(&'static str, String)>,
) -> Result<ExitCode> {
    let session = SiteSession::new(api);
    for (key, value) in &fields {
        session.edit(kind, key, value)?;
    }

    let missing = session.missing_fields(kind);
    if !missing.is_empty() {
        bail!("Please fill in: {}", missing.join(", "));
    }

    let outcome = session.submit(kind).await?;
    if let Some(banner) = StatusBanner::render(&session.status()) {
        println!("{}", banner);
    }

    Ok(match outcome {
        SubmitOutcome::Accepted => ExitCode::SUCCESS,
        SubmitOutcome::Rejected(_) => ExitCode::FAILURE,
    })
}
