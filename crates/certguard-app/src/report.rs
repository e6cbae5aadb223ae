use anyhow::Context;
use certguard_render::{RenderableItem, RenderableOutcome, RenderableReport, RenderableSummary};
use certguard_types::{CertReport, Outcome, SCHEMA_REPORT_V1};
use time::format_description::well_known::Rfc3339;

pub fn parse_report_json(text: &str) -> anyhow::Result<CertReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse certguard report")
}

pub fn serialize_report(report: &CertReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &CertReport) -> anyhow::Result<RenderableReport> {
    let s = &report.summary;
    Ok(RenderableReport {
        generated_at: report
            .generated_at
            .format(&Rfc3339)
            .context("format generated_at")?,
        source: report.source.name.clone(),
        summary: RenderableSummary {
            total: s.total,
            approved: s.approved,
            revoked: s.revoked,
            flagged: s.flagged,
            auto_decided: s.auto_decided,
            auto_rate_pct: s.auto_rate_pct,
            flag_rate_pct: s.flag_rate_pct,
        },
        items: report
            .decisions
            .iter()
            .map(|d| RenderableItem {
                user: d.user.clone(),
                entitlement: d.entitlement.clone(),
                outcome: match d.decision {
                    Outcome::Approve => RenderableOutcome::Approve,
                    Outcome::Revoke => RenderableOutcome::Revoke,
                    Outcome::Flag => RenderableOutcome::Flag,
                },
                reason: d.reason.clone(),
            })
            .collect(),
    })
}

pub fn render_markdown(report: &CertReport) -> anyhow::Result<String> {
    Ok(certguard_render::render_markdown(&to_renderable(report)?))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use certguard_types::{DecisionRecord, RulesSnapshot, SourceMeta, Summary, ToolMeta};
    use time::macros::datetime;

    pub(crate) fn sample_report() -> CertReport {
        let decision = |row: u64, user: &str, outcome: Outcome, reason: &str| DecisionRecord {
            row,
            user: user.to_string(),
            entitlement: "E1".to_string(),
            user_status: "ACTIVE".to_string(),
            criticality: "LOW".to_string(),
            last_used_days: Some(3),
            timebound_days_left: None,
            source_fields: Vec::new(),
            decision: outcome,
            reason: reason.to_string(),
            auto_decided: outcome.is_auto(),
            check_id: "access.default".to_string(),
            code: "no_violation".to_string(),
            fingerprint: "ab".to_string(),
        };
        CertReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "certguard".to_string(),
                version: "0.1.0".to_string(),
            },
            generated_at: datetime!(2026-03-01 09:30:00 UTC),
            finished_at: datetime!(2026-03-01 09:30:01 UTC),
            source: SourceMeta {
                name: "entitlements.csv".to_string(),
                rows: 2,
                columns: Vec::new(),
            },
            rules: RulesSnapshot::default(),
            summary: Summary {
                total: 2,
                approved: 1,
                revoked: 0,
                flagged: 1,
                auto_decided: 1,
                auto_rate_pct: 50.0,
                flag_rate_pct: 50.0,
            },
            decisions: vec![
                decision(1, "u1", Outcome::Approve, "In use / no policy violation"),
                decision(2, "u2", Outcome::Flag, "SoD conflict: E1 & E2"),
            ],
        }
    }

    #[test]
    fn report_json_round_trips() {
        let report = sample_report();
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(text.contains("\"generated_at\": \"2026-03-01T09:30:00Z\""));
        let back = parse_report_json(&text).expect("parse");
        assert_eq!(back, report);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = parse_report_json(r#"{"schema":"other.report.v1"}"#).expect_err("schema");
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn invalid_json_has_context() {
        let err = parse_report_json("{").expect_err("json");
        assert!(format!("{err:#}").starts_with("parse report json"));
    }

    #[test]
    fn markdown_from_report() {
        let md = render_markdown(&sample_report()).expect("render");
        assert!(md.contains("Generated: 2026-03-01T09:30:00Z"));
        assert!(md.contains("Source: entitlements.csv"));
        assert!(md.contains("| u2 | E1 | SoD conflict: E1 & E2 |"));
        assert!(!md.contains("| u1 |"));
    }
}
