use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - message (already carries the offending token or load name)
pub fn fingerprint_for_finding(check_id: &str, code: &str, message: &str) -> String {
    let canonical = [check_id, code, message].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
