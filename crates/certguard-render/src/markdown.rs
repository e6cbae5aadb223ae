use crate::{RenderableOutcome, RenderableReport};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();
    let s = &report.summary;

    out.push_str("# Certification Report\n");
    out.push_str(&format!("Generated: {}\n", report.generated_at));
    out.push_str(&format!("Source: {}\n\n", report.source));

    if s.total == 0 {
        out.push_str("No entitlements evaluated.\n");
        return out;
    }

    out.push_str(&format!("- Total entitlements: **{}**\n", s.total));
    out.push_str(&format!(
        "- Auto-decided (Approve/Revoke): **{}** ({:.1}%)\n",
        s.auto_decided, s.auto_rate_pct
    ));
    out.push_str(&format!(
        "- Flagged for review: **{}** ({:.1}%)\n",
        s.flagged, s.flag_rate_pct
    ));
    out.push_str(&format!(
        "- Approved: {} / Revoked: {}\n\n",
        s.approved, s.revoked
    ));

    let flagged: Vec<_> = report
        .items
        .iter()
        .filter(|i| i.outcome == RenderableOutcome::Flag)
        .collect();

    if !flagged.is_empty() {
        out.push_str("## Flagged for review\n\n");
        out.push_str("| User | Entitlement | Reason |\n");
        out.push_str("|---|---|---|\n");
        for item in flagged {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                cell(&item.user),
                cell(&item.entitlement),
                cell(&item.reason)
            ));
        }
        out.push('\n');
    }

    out.push_str("> Tip: tweak the rules file to change the automation rate and re-run.\n");

    out
}

fn cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
