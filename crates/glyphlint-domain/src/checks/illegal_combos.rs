use crate::checks::utils::finding;
use crate::model::Pressure;
use crate::tokens::TokenSet;
use glyphlint_types::{Finding, ids};
use serde_json::json;

const PASS: &str = "~PASS";

/// Fail-closed legality: verdicts that make any pass claim impossible.
pub fn run(tokens: &TokenSet<'_>) -> Vec<Finding> {
    let mut out = Vec::new();
    if !tokens.contains(PASS) {
        return out;
    }

    if tokens.highest_pressure() == Some(Pressure::P3) {
        out.push(finding(
            ids::CHECK_GLYPH_ILLEGAL_COMBO,
            ids::CODE_FREEZE_FORBIDS_PASS,
            "~P3 forbids ~PASS (freeze mode)".to_string(),
            Some("Drop ~PASS while the freeze pressure ~P3 is declared."),
            json!({ "tokens": ["~P3", PASS] }),
        ));
    }

    if tokens.contains("~ICE-") {
        out.push(finding(
            ids::CHECK_GLYPH_ILLEGAL_COMBO,
            ids::CODE_ICE_FAIL_FORBIDS_PASS,
            "~ICE- forbids ~PASS (substrate failed)".to_string(),
            Some("Fix the substrate and report ~ICE+, or drop ~PASS."),
            json!({ "tokens": ["~ICE-", PASS] }),
        ));
    }

    if tokens.contains("~ZDM-") {
        out.push(finding(
            ids::CHECK_GLYPH_ILLEGAL_COMBO,
            ids::CODE_ZDM_MISMATCH_FORBIDS_PASS,
            "~ZDM- forbids ~PASS (mismatch detected)".to_string(),
            Some("Resolve the mismatch and report ~ZDM+, or drop ~PASS."),
            json!({ "tokens": ["~ZDM-", PASS] }),
        ));
    }

    out
}
