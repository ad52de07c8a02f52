//! `LaunchSpark` CLI: send lead requests to the `LaunchSpark` API.
//!
//! Each submission subcommand fills one lead form, runs the same client-side
//! validation the website does, and posts it through the HTTP endpoint.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod console;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};

use launchspark_client::{ClientConfig, HttpEndpoint};
use launchspark_core::schema::Rule;
use launchspark_core::{
    FormSchema, LeadFormController, Notifier, SubmissionEndpoint, SubmitOutcome, portfolio,
};

use crate::console::{BOLD, CYAN, ConsoleNotifier, DIM, Palette, RED, RESET};

/// Exit code for a lead that failed client-side validation.
const EXIT_INVALID: u8 = 2;

// ── CLI structure ────────────────────────────────────────────────────

/// LaunchSpark lead capture from the terminal.
#[derive(Parser)]
#[command(
    name = "launchspark",
    version,
    about = "LaunchSpark CLI: send contact, quote, and replication requests",
    long_about = None,
    after_help = "Environment variables:\n  \
         LAUNCHSPARK_API_URL       API base URL\n  \
         LAUNCHSPARK_TIMEOUT_SECS  Request timeout in seconds\n  \
         RUST_LOG                  Log filter (overrides --log-level)\n\n\
         Examples:\n  \
         launchspark forms\n  \
         launchspark quote --name 'Ada Lovelace' --email ada@example.com \\\n    \
         --mobile '+1 234-567-8901' --pages 4-6 --budget 1000-2000 \\\n    \
         --details 'Booking site for my studio'\n  \
         launchspark replicate --project-id 3 --name Ada --email ada@example.com \\\n    \
         --mobile 0123456789"
)]
struct Cli {
    /// API base URL [default: $LAUNCHSPARK_API_URL, then the production API].
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds; 0 waits indefinitely
    /// [default: $LAUNCHSPARK_TIMEOUT_SECS, then none].
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,

    /// Disable colored output.
    #[arg(long, default_value = "false")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// Contact details shared by every lead form.
#[derive(Args)]
struct Lead {
    /// Full name.
    #[arg(long, default_value = "")]
    name: String,
    /// Email address.
    #[arg(long, default_value = "")]
    email: String,
    /// Mobile number, e.g. "+1 234-567-8901".
    #[arg(long, default_value = "")]
    mobile: String,
    /// Validate and print the request body without sending it.
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a contact inquiry.
    Contact {
        #[command(flatten)]
        lead: Lead,
        /// Service of interest: launchpad, growth, scale, or other.
        #[arg(long, default_value = "launchpad")]
        service: String,
        /// Your message (at least 10 characters).
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Request a free quote.
    Quote {
        #[command(flatten)]
        lead: Lead,
        /// Number of pages: 1-3, 4-6, or 7+.
        #[arg(long, default_value = "")]
        pages: String,
        /// Budget range: <500, 500-1000, 1000-2000, or 2000+.
        #[arg(long, default_value = "")]
        budget: String,
        /// Project description (at least 10 characters).
        #[arg(long, default_value = "")]
        details: String,
    },
    /// Request a copy of a portfolio design.
    Replicate {
        /// Portfolio item id (see `launchspark portfolio`).
        #[arg(long)]
        project_id: u32,
        #[command(flatten)]
        lead: Lead,
        /// Anything else we should know.
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List every form's fields and accepted values.
    Forms,
    /// List the portfolio designs that can be replicated.
    Portfolio,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format);
    let palette = Palette::new(!cli.no_color);

    match run(cli, palette).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!(
                "{}{}✗ Error:{} {e:#}",
                palette.paint(RED),
                palette.paint(BOLD),
                palette.paint(RESET)
            );
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str, format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn run(cli: Cli, palette: Palette) -> Result<ExitCode> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
    }

    match cli.command {
        Commands::Forms => {
            print_forms(palette);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Portfolio => {
            print_portfolio(palette);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Contact {
            lead,
            service,
            message,
        } => {
            let (endpoint, notifier) = collaborators(config, palette)?;
            let form = LeadFormController::new(FormSchema::contact(), endpoint, notifier);
            let fields = [("service", service), ("inquiry", message)];
            submit_lead(&form, lead, fields, None, palette).await
        }
        Commands::Quote {
            lead,
            pages,
            budget,
            details,
        } => {
            let (endpoint, notifier) = collaborators(config, palette)?;
            let form = LeadFormController::new(FormSchema::quote(), endpoint, notifier);
            let fields = [("pages", pages), ("budget", budget), ("details", details)];
            submit_lead(&form, lead, fields, None, palette).await
        }
        Commands::Replicate {
            project_id,
            lead,
            notes,
        } => {
            let Some(item) = portfolio::find(project_id) else {
                bail!(
                    "unknown portfolio item {project_id} (run `launchspark portfolio` to list them)"
                );
            };
            let (endpoint, notifier) = collaborators(config, palette)?;
            let form = LeadFormController::replication(item, endpoint, notifier);
            submit_lead(&form, lead, [("notes", notes)], Some(item.title), palette).await
        }
    }
}

fn collaborators(
    config: ClientConfig,
    palette: Palette,
) -> Result<(Arc<dyn SubmissionEndpoint>, Arc<dyn Notifier>)> {
    let endpoint = HttpEndpoint::new(config).context("failed to configure the API client")?;
    Ok((Arc::new(endpoint), Arc::new(ConsoleNotifier::new(palette))))
}

async fn submit_lead<const N: usize>(
    form: &LeadFormController,
    lead: Lead,
    extra: [(&str, String); N],
    project: Option<&str>,
    palette: Palette,
) -> Result<ExitCode> {
    form.update_field("name", lead.name);
    form.update_field("email", lead.email);
    form.update_field("mobile", lead.mobile);
    for (name, value) in extra {
        form.update_field(name, value);
    }

    if lead.dry_run {
        if !form.validate() {
            print_field_errors(form, palette);
            return Ok(ExitCode::from(EXIT_INVALID));
        }
        let body = serde_json::to_string_pretty(&form.payload())
            .context("failed to encode request body")?;
        println!("{body}");
        return Ok(ExitCode::SUCCESS);
    }

    match form.submit().await {
        SubmitOutcome::Accepted { .. } => {
            println!();
            println!("  {}", form.schema().thank_you(project));
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Invalid => {
            print_field_errors(form, palette);
            Ok(ExitCode::from(EXIT_INVALID))
        }
        // The notifier has already reported these.
        SubmitOutcome::Rejected { .. } | SubmitOutcome::NetworkError => Ok(ExitCode::FAILURE),
        SubmitOutcome::Busy | SubmitOutcome::AlreadySubmitted => {
            bail!("{} is already being processed", form.schema().operation())
        }
    }
}

fn print_field_errors(form: &LeadFormController, palette: Palette) {
    let errors = form.errors();
    eprintln!(
        "{}{}✗ Please fix the following:{}",
        palette.paint(RED),
        palette.paint(BOLD),
        palette.paint(RESET)
    );
    for field in form.schema().fields() {
        if let Some(message) = errors.get(field.name) {
            eprintln!(
                "  {}{}{}: {message}",
                palette.paint(BOLD),
                field.label,
                palette.paint(RESET)
            );
        }
    }
}

fn print_forms(palette: Palette) {
    for schema in FormSchema::all() {
        let op = schema.operation();
        println!(
            "{}{}{op}{} {}POST {}{}",
            palette.paint(CYAN),
            palette.paint(BOLD),
            palette.paint(RESET),
            palette.paint(DIM),
            op.path(),
            palette.paint(RESET)
        );
        for field in schema.fields() {
            println!("  {:<10} -> {:<20} {}", field.name, field.payload_key, describe(field.rule));
        }
        println!();
    }
}

fn describe(rule: Rule) -> String {
    match rule {
        Rule::Required => "required".to_owned(),
        Rule::Email => "required, email address".to_owned(),
        Rule::Mobile => "required, 10-15 digits, spaces or hyphens, optional leading +".to_owned(),
        Rule::Choice(options) => {
            let values: Vec<_> = options.iter().map(|c| c.value).collect();
            format!("one of: {}", values.join(", "))
        }
        Rule::Description { min_chars } => format!("required, at least {min_chars} characters"),
        Rule::Optional => "optional".to_owned(),
    }
}

fn print_portfolio(palette: Palette) {
    for item in portfolio::catalog() {
        println!(
            "  {}{:>2}{}  {:<26} {}{:<22} {}{}",
            palette.paint(BOLD),
            item.id,
            palette.paint(RESET),
            item.title,
            palette.paint(DIM),
            item.sector,
            item.price_range,
            palette.paint(RESET)
        );
    }
}
