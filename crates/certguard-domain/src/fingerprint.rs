use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a decision.
///
/// Identity fields:
/// - check_id
/// - code
/// - user
/// - entitlement
pub fn fingerprint_for_decision(
    check_id: &str,
    code: &str,
    user: &str,
    entitlement: &str,
) -> String {
    let canonical = [check_id, code, user, entitlement].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
