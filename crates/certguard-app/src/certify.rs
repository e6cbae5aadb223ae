//! The `certify` use case: load rules and entitlements, decide every record, build the report.

use anyhow::Context;
use camino::Utf8Path;
use certguard_domain::policy::RuleSet;
use certguard_settings::{ConfigFormat, Overrides};
use certguard_types::{CertReport, SCHEMA_REPORT_V1, SourceMeta, Summary, ToolMeta};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Input for the certify use case.
#[derive(Clone, Debug)]
pub struct CertifyInput<'a> {
    /// Entitlement CSV export.
    pub csv_path: &'a Utf8Path,
    /// Rules file contents. Blank text means defaults.
    pub rules_text: &'a str,
    pub rules_format: ConfigFormat,
    /// CLI overrides, applied over the rules file.
    pub overrides: Overrides,
}

/// Output from the certify use case.
#[derive(Clone, Debug)]
pub struct CertifyOutput {
    pub report: CertReport,
    /// The rule set the decisions were made with.
    pub rules: RuleSet,
}

/// Run the certify use case. Fails before any decision on bad rules or a malformed record.
pub fn run_certify(input: CertifyInput<'_>) -> anyhow::Result<CertifyOutput> {
    let generated_at = now_utc();

    let cfg = certguard_settings::parse_config(input.rules_text, input.rules_format)
        .context("parse rules")?;
    let rules = certguard_settings::resolve_rules(cfg, input.overrides).context("resolve rules")?;
    debug!(
        grace_days = rules.timebound_grace_days,
        unused_days = rules.unused_days_threshold,
        whitelist = rules.criticality_whitelist.len(),
        sod_pairs = rules.sod_conflicts.len(),
        "resolved rules"
    );

    let table = certguard_source::read_entitlements(input.csv_path)
        .with_context(|| format!("load entitlements from {}", input.csv_path))?;
    debug!(
        records = table.records.len(),
        columns = table.columns.len(),
        "loaded entitlements"
    );

    let domain_report = certguard_domain::evaluate(&table.records, &rules);
    let summary = domain_report.summary();
    info!(
        total = summary.total,
        users = domain_report.users,
        approved = summary.approved,
        revoked = summary.revoked,
        flagged = summary.flagged,
        "certification complete"
    );

    let report = CertReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "certguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at,
        finished_at: now_utc(),
        source: SourceMeta {
            name: input.csv_path.file_name().unwrap_or_default().to_string(),
            rows: summary.total,
            columns: table.columns,
        },
        rules: rules.snapshot(),
        summary,
        decisions: domain_report.decisions,
    };

    Ok(CertifyOutput { report, rules })
}

/// Current UTC time truncated to whole seconds.
fn now_utc() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(0).unwrap_or(now)
}

/// Map a summary to an exit code: 2 when something was flagged and the caller asked to fail on
/// flags, 0 otherwise.
pub fn flag_exit_code(summary: &Summary, fail_on_flag: bool) -> i32 {
    if fail_on_flag && summary.flagged > 0 {
        2
    } else {
        0
    }
}
