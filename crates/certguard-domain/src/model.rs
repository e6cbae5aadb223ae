use certguard_types::SourceField;

/// Stand-in for "never used" when `last_used_days` is empty.
pub const NEVER_USED_DAYS: u32 = 9999;

/// Account status of the entitlement holder.
///
/// Only `TERMINATED` and `ORPHANED` carry meaning for the checks. Anything else, including an
/// empty or unrecognized value, is treated like an active account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Terminated,
    Orphaned,
    Other(String),
}

impl UserStatus {
    /// Exact, case-sensitive match on the source value.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ACTIVE" => UserStatus::Active,
            "TERMINATED" => UserStatus::Terminated,
            "ORPHANED" => UserStatus::Orphaned,
            other => UserStatus::Other(other.to_string()),
        }
    }

    pub fn is_inactive(&self) -> bool {
        matches!(self, UserStatus::Terminated | UserStatus::Orphaned)
    }

    /// The status as it appeared in the source.
    pub fn as_str(&self) -> &str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Terminated => "TERMINATED",
            UserStatus::Orphaned => "ORPHANED",
            UserStatus::Other(s) => s.as_str(),
        }
    }
}

/// One row of the entitlement source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntitlementRecord {
    /// 1-based data row (header excluded).
    pub row: u64,
    pub user: String,
    pub entitlement: String,
    pub user_status: UserStatus,
    /// Free text; compare through [`EntitlementRecord::criticality_key`].
    pub criticality: String,
    pub last_used_days: Option<u32>,
    /// Negative once expired. `None` means the grant has no end date.
    pub timebound_days_left: Option<i64>,
    /// Every source cell in header order, as read. Empty for records not read from a file.
    pub source_fields: Vec<SourceField>,
}

impl EntitlementRecord {
    pub fn new(user: &str, entitlement: &str) -> Self {
        Self {
            row: 0,
            user: user.to_string(),
            entitlement: entitlement.to_string(),
            user_status: UserStatus::Active,
            criticality: String::new(),
            last_used_days: None,
            timebound_days_left: None,
            source_fields: Vec::new(),
        }
    }

    pub fn last_used(&self) -> u32 {
        self.last_used_days.unwrap_or(NEVER_USED_DAYS)
    }

    /// Uppercased criticality used for all comparisons.
    pub fn criticality_key(&self) -> String {
        self.criticality.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_exact() {
        assert_eq!(UserStatus::parse("TERMINATED"), UserStatus::Terminated);
        assert_eq!(UserStatus::parse("ORPHANED"), UserStatus::Orphaned);
        assert_eq!(UserStatus::parse("ACTIVE"), UserStatus::Active);
        assert_eq!(
            UserStatus::parse("terminated"),
            UserStatus::Other("terminated".to_string())
        );
        assert!(!UserStatus::parse("SUSPENDED").is_inactive());
        assert_eq!(UserStatus::parse("SUSPENDED").as_str(), "SUSPENDED");
    }

    #[test]
    fn missing_last_used_is_never_used() {
        let rec = EntitlementRecord::new("u1", "E1");
        assert_eq!(rec.last_used(), NEVER_USED_DAYS);
    }

    #[test]
    fn criticality_key_uppercases() {
        let mut rec = EntitlementRecord::new("u1", "E1");
        rec.criticality = "Critical".to_string();
        assert_eq!(rec.criticality_key(), "CRITICAL");
        rec.criticality.clear();
        assert_eq!(rec.criticality_key(), "");
    }
}
