use crate::fingerprint::fingerprint_for_finding;
use glyphlint_types::Finding;
use serde_json::Value;

pub fn finding(
    check_id: &str,
    code: &str,
    message: String,
    help: Option<&str>,
    data: Value,
) -> Finding {
    let fingerprint = fingerprint_for_finding(check_id, code, &message);
    Finding {
        check_id: check_id.to_string(),
        code: code.to_string(),
        message,
        help: help.map(str::to_string),
        fingerprint: Some(fingerprint),
        data,
    }
}
