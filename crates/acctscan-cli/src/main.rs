//! CLI entry point for acctscan.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `acctscan-app` crate.

use acctscan_app::{
    Clock, ExplainOutput, FailOn, FixedClock, ScanService, SchemaKind, SystemClock,
    fail_on_exit_code, format_explanation, format_not_found, load_config, parse_report_json,
    render_csv, render_markdown, run_explain, schema_json, serialize_report,
};
use acctscan_render::AccountFilter;
use acctscan_settings::Overrides;
use acctscan_store::JsonFileStore;
use acctscan_types::ScanReport;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "acctscan",
    version,
    about = "Security hygiene scanner for user accounts"
)]
struct Cli {
    /// Account store: a JSON array of account records.
    #[arg(long, default_value = "data/accounts.json")]
    accounts: Utf8PathBuf,

    /// Path to acctscan config TOML. A missing file means defaults.
    #[arg(long, default_value = "acctscan.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict|relaxed).
    #[arg(long)]
    profile: Option<String>,

    /// Override days without login before an account is inactive.
    #[arg(long)]
    inactive_days: Option<u32>,

    /// Override days before a password counts as stale.
    #[arg(long)]
    password_age_days: Option<u32>,

    /// Override failed login attempts at which an account is flagged.
    #[arg(long)]
    max_failed_attempts: Option<u32>,

    /// Override whether MFA is required (true|false).
    #[arg(long, action = clap::ArgAction::Set)]
    require_mfa: Option<bool>,

    /// Evaluate as of this RFC 3339 instant instead of the current time.
    #[arg(long, value_parser = parse_now)]
    now: Option<OffsetDateTime>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan every account and write the report.
    Scan {
        /// Where to write the JSON report (stdout if not specified).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/acctscan/report.md")]
        markdown_out: Utf8PathBuf,

        /// Also export accounts as CSV.
        #[arg(long)]
        csv_out: Option<Utf8PathBuf>,

        /// Accounts to include in the CSV export (all|problematic|clean).
        #[arg(long, default_value = "all")]
        filter: AccountFilter,

        /// Case-insensitive search term for the CSV export.
        #[arg(long, default_value = "")]
        search: String,

        /// Exit with status 2 when an account is at or above this risk level.
        #[arg(long, default_value = "none")]
        fail_on: FailOn,
    },

    /// Print the scan summary as JSON.
    Summary,

    /// Print one scanned account as JSON.
    Account {
        /// Account id.
        id: String,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render CSV from an existing JSON report.
    Csv {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the CSV output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Accounts to include (all|problematic|clean).
        #[arg(long, default_value = "all")]
        filter: AccountFilter,

        /// Case-insensitive search over name, email, username, role and department.
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Explain a rule ID with remediation guidance.
    Explain {
        /// The rule ID (e.g., "account.mfa_required").
        identifier: String,
    },

    /// Print a JSON schema.
    Schema {
        #[arg(value_enum)]
        target: SchemaTarget,
    },

    /// Serve the HTTP API.
    Serve {
        #[arg(long, default_value = "127.0.0.1:5000")]
        bind: SocketAddr,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaTarget {
    /// acctscan.toml
    Config,
    /// Scan report JSON.
    Report,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("acctscan error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Commands::Scan {
            ref report_out,
            write_markdown,
            ref markdown_out,
            ref csv_out,
            filter,
            ref search,
            fail_on,
        } => {
            let service = build_service(&cli)?;
            cmd_scan(
                &service,
                report_out.as_deref(),
                write_markdown.then_some(markdown_out.as_path()),
                csv_out.as_deref(),
                filter,
                search,
                fail_on,
            )
        }
        Commands::Summary => cmd_summary(&build_service(&cli)?),
        Commands::Account { ref id } => cmd_account(&build_service(&cli)?, id),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Csv {
            report,
            output,
            filter,
            search,
        } => cmd_csv(&report, output.as_deref(), filter, &search),
        Commands::Explain { identifier } => Ok(cmd_explain(&identifier)),
        Commands::Schema { target } => cmd_schema(target),
        Commands::Serve { bind } => cmd_serve(build_service(&cli)?, bind),
    }
}

fn parse_now(s: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(s, &Rfc3339).map_err(|e| format!("invalid RFC 3339 time: {e}"))
}

fn build_service(cli: &Cli) -> anyhow::Result<ScanService> {
    let cfg_text = read_config(&cli.config)?;
    let overrides = Overrides {
        profile: cli.profile.clone(),
        inactive_threshold_days: cli.inactive_days,
        password_age_threshold_days: cli.password_age_days,
        max_failed_attempts: cli.max_failed_attempts,
        require_mfa: cli.require_mfa,
    };
    let resolved = load_config(&cfg_text, overrides)?;

    let clock: Arc<dyn Clock> = match cli.now {
        Some(now) => Arc::new(FixedClock(now)),
        None => Arc::new(SystemClock),
    };

    let store = JsonFileStore::new(cli.accounts.clone());
    tracing::debug!(store = %store.path(), "account store");

    let service = ScanService::new(Arc::new(store), resolved.rules, clock);
    let rules = service.rules();
    tracing::debug!(
        profile = %resolved.profile,
        inactive_threshold_days = rules.inactive_threshold_days,
        password_age_threshold_days = rules.password_age_threshold_days,
        max_failed_attempts = rules.max_failed_attempts,
        require_mfa = rules.require_mfa,
        "resolved config"
    );

    Ok(service)
}

/// Missing config file means defaults; any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e).with_context(|| format!("read config: {path}")),
    }
}

fn cmd_scan(
    service: &ScanService,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
    csv_out: Option<&Utf8Path>,
    filter: AccountFilter,
    search: &str,
    fail_on: FailOn,
) -> anyhow::Result<i32> {
    let report = service.trigger_scan()?;
    let data = serialize_report(&report)?;

    match report_out {
        Some(path) => write_file(path, &data).context("write report json")?,
        None => write_stdout(&data)?,
    }

    if let Some(path) = markdown_out {
        write_file(path, render_markdown(&report).as_bytes()).context("write markdown")?;
    }

    if let Some(path) = csv_out {
        let csv = render_csv(&report, filter, search);
        write_file(path, csv.as_bytes()).context("write csv")?;
    }

    Ok(fail_on_exit_code(&report, fail_on))
}

fn cmd_summary(service: &ScanService) -> anyhow::Result<i32> {
    let summary = service.summary()?;
    let mut data = serde_json::to_vec_pretty(&summary).context("serialize summary")?;
    data.push(b'\n');
    write_stdout(&data)?;
    Ok(0)
}

fn cmd_account(service: &ScanService, id: &str) -> anyhow::Result<i32> {
    let Some(account) = service.account(id)? else {
        eprintln!("account not found: {id}");
        return Ok(1);
    };
    let mut data = serde_json::to_vec_pretty(&account).context("serialize account")?;
    data.push(b'\n');
    write_stdout(&data)?;
    Ok(0)
}

fn read_report(path: &Utf8Path) -> anyhow::Result<ScanReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {path}"))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report = read_report(report_path)?;
    let md = render_markdown(&report);

    match output {
        Some(path) => write_file(path, md.as_bytes()).context("write markdown output")?,
        None => print!("{md}"),
    }
    Ok(0)
}

fn cmd_csv(
    report_path: &Utf8Path,
    output: Option<&Utf8Path>,
    filter: AccountFilter,
    search: &str,
) -> anyhow::Result<i32> {
    let report = read_report(report_path)?;
    let csv = render_csv(&report, filter, search);

    match output {
        Some(path) => write_file(path, csv.as_bytes()).context("write csv output")?,
        None => print!("{csv}"),
    }
    Ok(0)
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, available_rule_ids));
            1
        }
    }
}

fn cmd_schema(target: SchemaTarget) -> anyhow::Result<i32> {
    let kind = match target {
        SchemaTarget::Config => SchemaKind::Config,
        SchemaTarget::Report => SchemaKind::Report,
    };
    println!("{}", schema_json(kind)?);
    Ok(0)
}

fn cmd_serve(service: ScanService, bind: SocketAddr) -> anyhow::Result<i32> {
    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    runtime.block_on(acctscan_server::serve(bind, Arc::new(service)))?;
    Ok(0)
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {path}"))?;
    Ok(())
}

fn write_stdout(data: &[u8]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(data).context("write stdout")?;
    stdout.flush().context("flush stdout")
}
