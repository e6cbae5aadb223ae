//! CLI entry point for certguard.
//!
//! This module is thin: it handles argument parsing, logging setup, I/O, and exit codes.
//! All business logic lives in the `certguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use certguard_app::{
    CertifyInput, ExplainOutput, flag_exit_code, format_explanation, format_not_found,
    parse_report_json, render_markdown, run_certify, run_explain, write_artifacts, write_text,
};
use certguard_settings::{ConfigFormat, Overrides};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "certguard",
    version,
    about = "Access certification: approve, revoke, or flag every entitlement"
)]
struct Cli {
    /// Log output format (logs go to stderr; filter with RUST_LOG).
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide every entitlement in a CSV export and write the artifacts.
    Certify {
        /// Entitlement export (CSV with a header row).
        csv_path: Utf8PathBuf,

        /// Rules file: TOML, or JSON/YAML by `.json`, `.yaml` or `.yml` extension.
        #[arg(long, default_value = "rules.toml")]
        rules: Utf8PathBuf,

        /// Output directory for decisions.csv, decisions.json and report.md.
        #[arg(long, default_value = "out")]
        out: Utf8PathBuf,

        /// Override `timebound_grace_days`.
        #[arg(long)]
        grace_days: Option<u32>,

        /// Override `unused_days_threshold`.
        #[arg(long)]
        unused_days: Option<u32>,

        /// Exit with code 2 when any entitlement is flagged for review.
        #[arg(long)]
        fail_on_flag: bool,
    },

    /// Render the Markdown report from an existing decisions.json.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "out/decisions.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g. "access.sod") or code (e.g. "sod_conflict") to explain.
        identifier: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = init_tracing(cli.log_format).and_then(|()| run(cli.cmd));

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            error!(error = %format!("{err:#}"), "run failed");
            eprintln!("certguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(log_format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to init tracing: {err}"))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to init tracing: {err}"))?,
    }

    Ok(())
}

fn run(cmd: Commands) -> anyhow::Result<i32> {
    match cmd {
        Commands::Certify {
            csv_path,
            rules,
            out,
            grace_days,
            unused_days,
            fail_on_flag,
        } => cmd_certify(
            csv_path,
            rules,
            out,
            Overrides {
                timebound_grace_days: grace_days,
                unused_days_threshold: unused_days,
            },
            fail_on_flag,
        ),
        Commands::Md { report, output } => cmd_md(report, output).map(|()| 0),
        Commands::Explain { identifier } => Ok(cmd_explain(&identifier)),
    }
}

fn cmd_certify(
    csv_path: Utf8PathBuf,
    rules_path: Utf8PathBuf,
    out: Utf8PathBuf,
    overrides: Overrides,
    fail_on_flag: bool,
) -> anyhow::Result<i32> {
    info!(csv = %csv_path, rules = %rules_path, out = %out, "starting certification");

    let rules_text = std::fs::read_to_string(&rules_path)
        .with_context(|| format!("read rules file: {rules_path}"))?;

    let output = run_certify(CertifyInput {
        csv_path: &csv_path,
        rules_text: &rules_text,
        rules_format: ConfigFormat::from_path(&rules_path),
        overrides,
    })?;

    let artifacts = write_artifacts(&out, &output.report).context("write artifacts")?;

    let summary = &output.report.summary;
    println!("Processed {} rows", summary.total);
    println!(
        "Summary: {:.1}% auto-decided, {:.1}% flagged",
        summary.auto_rate_pct, summary.flag_rate_pct
    );
    println!(
        "Files: {}",
        artifacts
            .paths()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(flag_exit_code(summary, fail_on_flag))
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report)?;

    if let Some(out_path) = output {
        write_text(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            1
        }
    }
}
