//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use hvac_domain::ServiceType;
use std::path::PathBuf;

/// CLI arguments for hvac-site
#[derive(Parser, Debug)]
#[command(name = "hvac-site")]
#[command(author, version, about = "Continental HVAC site client - quotes, messages and testimonials")]
#[command(long_about = r#"
hvac-site renders the Continental HVAC site in the terminal and submits
quote requests and contact messages to the site backend.

Configuration is loaded from (in priority order):
1. HVAC_API_BASE_URL   Environment variable for the backend base URL
2. --config <path>     Explicit config file
3. ./hvac.toml         Project-level config
4. ~/.config/hvac-site/config.toml   Global config

Example:
  hvac-site page
  hvac-site quote --name "Ann" --email ann@example.com --phone 555-0100 \
      --message "New AC for a 2-bedroom" --service installation
  hvac-site contact --name "Ann" --email ann@example.com --phone 555-0100 --message "Call me"
  hvac-site interactive
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Backend base URL (overrides config and environment)
    #[arg(long, value_name = "URL", global = true)]
    pub api_base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// What to do (defaults to `page`)
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch testimonials and render the whole page
    Page,
    /// List customer testimonials
    Testimonials,
    /// Request a quote
    Quote(QuoteArgs),
    /// Send a contact message
    Contact(ContactArgs),
    /// Fill and submit the forms interactively
    Interactive,
}

/// Fields of the quote form
#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub message: String,

    /// installation, repair or maintenance
    #[arg(long, value_name = "TYPE", default_value = "installation")]
    pub service: ServiceType,
}

/// Fields of the contact form
#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub message: String,
}

impl QuoteArgs {
    /// Field/value pairs in form order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("message", self.message.clone()),
            ("service_type", self.service.to_string()),
        ]
    }
}

impl ContactArgs {
    /// Field/value pairs in form order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("message", self.message.clone()),
        ]
    }
}
