//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to reviewer-facing explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// What the access owner should do.
    pub remediation: &'static str,
    /// Before/after CSV rows.
    pub examples: ExamplePair,
}

/// Before and after entitlement rows (CSV, with header).
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A row that triggers the check.
    pub before: &'static str,
    /// A row that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_ACCESS_USER_STATUS => Some(explain_user_status()),
        ids::CHECK_ACCESS_TIMEBOUND => Some(explain_timebound()),
        ids::CHECK_ACCESS_UNUSED => Some(explain_unused()),
        ids::CHECK_ACCESS_SOD => Some(explain_sod()),
        ids::CHECK_ACCESS_CRITICAL => Some(explain_critical()),
        ids::CHECK_ACCESS_DEFAULT => Some(explain_default()),

        // Codes
        ids::CODE_INACTIVE_USER => Some(explain_user_status()),
        ids::CODE_TIMEBOUND_EXPIRED => Some(explain_timebound()),
        ids::CODE_UNUSED_REVOKED => Some(explain_unused_revoked()),
        ids::CODE_UNUSED_CRITICAL => Some(explain_unused_critical()),
        ids::CODE_SOD_CONFLICT => Some(explain_sod()),
        ids::CODE_CRITICAL_REVIEW => Some(explain_critical()),
        ids::CODE_NO_VIOLATION => Some(explain_default()),

        _ => None,
    }
}

/// List all known check IDs, in evaluation order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_ACCESS_USER_STATUS,
        ids::CHECK_ACCESS_TIMEBOUND,
        ids::CHECK_ACCESS_UNUSED,
        ids::CHECK_ACCESS_SOD,
        ids::CHECK_ACCESS_CRITICAL,
        ids::CHECK_ACCESS_DEFAULT,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_INACTIVE_USER,
        ids::CODE_TIMEBOUND_EXPIRED,
        ids::CODE_UNUSED_REVOKED,
        ids::CODE_UNUSED_CRITICAL,
        ids::CODE_SOD_CONFLICT,
        ids::CODE_CRITICAL_REVIEW,
        ids::CODE_NO_VIOLATION,
    ]
}

const HEADER: &str = "user,entitlement,user_status,criticality,last_used_days,timebound_days_left";

fn explain_user_status() -> Explanation {
    Explanation {
        title: "Inactive User",
        description: "\
Revokes every entitlement held by a user whose status is `TERMINATED` or `ORPHANED`.

This is the first check evaluated and it ignores every other field: a departed or ownerless
account keeps no access, however critical or recently used.",
        remediation: "\
Remove the entitlement in the target system. If the status is wrong, correct it in the
identity source and re-run the certification.",
        examples: ExamplePair {
            before: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
alice,FIN_APPROVER,TERMINATED,HIGH,3,",
            after: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
alice,FIN_APPROVER,ACTIVE,HIGH,3,",
        },
    }
}

fn explain_timebound() -> Explanation {
    Explanation {
        title: "Expired Time-Bound Access",
        description: "\
Revokes access that was granted for a limited period and expired more than
`timebound_grace_days` days ago (default 7).

`timebound_days_left` is negative once the grant has expired. The grace window is inclusive:
a value of exactly `-timebound_grace_days` is still tolerated. Empty or `None` means the grant
has no end date and never triggers this check.",
        remediation: "\
Remove the entitlement, or renew the grant with a new end date if the access is still needed.",
        examples: ExamplePair {
            before: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
bob,PROD_DEPLOY,ACTIVE,HIGH,1,-30",
            after: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
bob,PROD_DEPLOY,ACTIVE,HIGH,1,14",
        },
    }
}

fn explain_unused() -> Explanation {
    Explanation {
        title: "Unused Access",
        description: "\
Handles entitlements not used for more than `unused_days_threshold` days (default 90).

An empty `last_used_days` means the entitlement was never used. Unused access is revoked,
unless its criticality is listed in `criticality_whitelist`, in which case it is flagged for
review instead.",
        remediation: "\
Remove the entitlement. For whitelisted criticalities, confirm with the owner whether the
access is standby access that must be retained.",
        examples: ExamplePair {
            before: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
carol,REPORTS_READ,ACTIVE,LOW,200,",
            after: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
carol,REPORTS_READ,ACTIVE,LOW,12,",
        },
    }
}

fn explain_unused_revoked() -> Explanation {
    Explanation {
        title: "Unused Access Revoked",
        description: "\
The entitlement was not used within `unused_days_threshold` days and its criticality is not
whitelisted, so it is revoked automatically.",
        remediation: "Remove the entitlement. Re-request it if the need comes back.",
        examples: explain_unused().examples,
    }
}

fn explain_unused_critical() -> Explanation {
    Explanation {
        title: "Unused Critical Access",
        description: "\
The entitlement was not used within `unused_days_threshold` days but its criticality is in
`criticality_whitelist`, so it is flagged instead of revoked.",
        remediation: "\
Ask the entitlement owner whether the access is break-glass or standby access. Revoke it
if not.",
        examples: ExamplePair {
            before: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
dave,DB_ADMIN,ACTIVE,CRITICAL,200,",
            after: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
dave,DB_ADMIN,ACTIVE,CRITICAL,5,",
        },
    }
}

fn explain_sod() -> Explanation {
    Explanation {
        title: "Separation-of-Duties Conflict",
        description: "\
Flags every entitlement of a user who holds both members of a pair listed in `sod_conflicts`.

SoD is a property of the user, not of the row: the entitlements are collected across all
rows of the user, so a row whose own entitlement is unrelated to the conflict is flagged too.
Pairs are checked in configured order and the first conflicting pair is reported.",
        remediation: "\
Remove one side of the conflicting pair, or document a compensating control with the
access owner.",
        examples: ExamplePair {
            before: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
erin,AP_CREATE_VENDOR,ACTIVE,MEDIUM,2,
erin,AP_APPROVE_PAYMENT,ACTIVE,MEDIUM,2,",
            after: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
erin,AP_CREATE_VENDOR,ACTIVE,MEDIUM,2,",
        },
    }
}

fn explain_critical() -> Explanation {
    Explanation {
        title: "Critical Entitlement Review",
        description: "\
Flags entitlements whose criticality is `CRITICAL` (case-insensitive) for owner or manager
review, even when they are in use and conflict-free.",
        remediation: "Have the entitlement owner or the user's manager confirm the access.",
        examples: ExamplePair {
            before: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
frank,ROOT_CA,ACTIVE,critical,4,",
            after: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
frank,ROOT_CA,ACTIVE,HIGH,4,",
        },
    }
}

fn explain_default() -> Explanation {
    Explanation {
        title: "No Policy Violation",
        description: "\
No check fired: the user is active, the grant is not expired, the access is in use, there is
no SoD conflict and the entitlement is not critical. The access is approved automatically.",
        remediation: "Nothing to do.",
        examples: ExamplePair {
            before: HEADER,
            after: "user,entitlement,user_status,criticality,last_used_days,timebound_days_left
u1,E1,ACTIVE,LOW,10,",
        },
    }
}
