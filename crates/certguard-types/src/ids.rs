//! Stable identifiers for checks and decision codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks, in evaluation order
pub const CHECK_ACCESS_USER_STATUS: &str = "access.user_status";
pub const CHECK_ACCESS_TIMEBOUND: &str = "access.timebound";
pub const CHECK_ACCESS_UNUSED: &str = "access.unused";
pub const CHECK_ACCESS_SOD: &str = "access.sod";
pub const CHECK_ACCESS_CRITICAL: &str = "access.critical";
pub const CHECK_ACCESS_DEFAULT: &str = "access.default";

// Codes: access.user_status
pub const CODE_INACTIVE_USER: &str = "inactive_user";

// Codes: access.timebound
pub const CODE_TIMEBOUND_EXPIRED: &str = "timebound_expired";

// Codes: access.unused
pub const CODE_UNUSED_REVOKED: &str = "unused_revoked";
pub const CODE_UNUSED_CRITICAL: &str = "unused_critical";

// Codes: access.sod
pub const CODE_SOD_CONFLICT: &str = "sod_conflict";

// Codes: access.critical
pub const CODE_CRITICAL_REVIEW: &str = "critical_review";

// Codes: access.default
pub const CODE_NO_VIOLATION: &str = "no_violation";
