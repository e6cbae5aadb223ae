use crate::fingerprint::fingerprint_for_decision;
use crate::model::EntitlementRecord;
use certguard_types::{Decision, DecisionRecord, Outcome, Summary};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub approve: u32,
    pub revoke: u32,
    pub flag: u32,
}

impl OutcomeCounts {
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome>,
    {
        let mut counts = OutcomeCounts::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Approve => counts.approve += 1,
                Outcome::Revoke => counts.revoke += 1,
                Outcome::Flag => counts.flag += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.approve + self.revoke + self.flag
    }

    pub fn auto_decided(&self) -> u32 {
        self.approve + self.revoke
    }

    pub fn summary(&self) -> Summary {
        let total = self.total();
        Summary {
            total,
            approved: self.approve,
            revoked: self.revoke,
            flagged: self.flag,
            auto_decided: self.auto_decided(),
            auto_rate_pct: rate_pct(self.auto_decided(), total),
            flag_rate_pct: rate_pct(self.flag, total),
        }
    }
}

/// Percentage rounded to one decimal. Zero when there is nothing to divide by.
pub fn rate_pct(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(part) * 1000.0 / f64::from(total)).round() / 10.0
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    /// Same order as the input records.
    pub decisions: Vec<DecisionRecord>,
    pub counts: OutcomeCounts,
    pub users: u32,
}

impl DomainReport {
    pub fn summary(&self) -> Summary {
        self.counts.summary()
    }
}

/// Join a record with its decision into an output row.
pub fn decision_record(record: &EntitlementRecord, decision: Decision) -> DecisionRecord {
    let fingerprint = fingerprint_for_decision(
        &decision.check_id,
        &decision.code,
        &record.user,
        &record.entitlement,
    );
    let auto_decided = decision.auto_decided();
    DecisionRecord {
        row: record.row,
        user: record.user.clone(),
        entitlement: record.entitlement.clone(),
        user_status: record.user_status.as_str().to_string(),
        criticality: record.criticality.clone(),
        last_used_days: record.last_used_days,
        timebound_days_left: record.timebound_days_left,
        source_fields: record.source_fields.clone(),
        decision: decision.outcome,
        reason: decision.reason,
        auto_decided,
        check_id: decision.check_id,
        code: decision.code,
        fingerprint,
    }
}
