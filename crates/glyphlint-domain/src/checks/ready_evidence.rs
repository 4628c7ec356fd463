use crate::checks::utils::finding;
use crate::model::ReadyTier;
use crate::tokens::TokenSet;
use glyphlint_types::{Finding, ids};
use serde_json::json;

/// Evidence markers accepted bare (`~JSON`) or valued (`~JSON:atomic.json`).
const EVIDENCE_BASES: [&str; 5] = ["~COMMIT", "~HASH", "~JSON", "~ARCH", "~MANI"];

/// Identity markers that must appear with a value.
const IDENTITY_PREFIXES: [&str; 4] = ["~ENV:", "~RUN:", "~TRACE:", "~ICEMAP:"];

const READY_PREFIX: &str = "~READY:";

/// Any `~READY:*` claim must be backed by a minimum evidence bundle.
pub fn run(tokens: &TokenSet<'_>) -> Vec<Finding> {
    let mut out = Vec::new();
    if !tokens.has_prefix(READY_PREFIX) {
        return out;
    }

    let mut missing: Vec<String> = EVIDENCE_BASES
        .iter()
        .filter(|base| !tokens.has_base(base))
        .map(|base| base.to_string())
        .collect();
    missing.extend(
        IDENTITY_PREFIXES
            .iter()
            .filter(|prefix| !tokens.has_prefix(prefix))
            .map(|prefix| format!("{prefix}*")),
    );

    if !missing.is_empty() {
        missing.sort();
        out.push(finding(
            ids::CHECK_GLYPH_READY_EVIDENCE,
            ids::CODE_MISSING_EVIDENCE,
            format!(
                "READY requires evidence tokens missing: {}",
                missing.join(", ")
            ),
            Some("Back the READY claim with commit, hash, JSON, architecture, manifest and identity tokens."),
            json!({ "missing": missing }),
        ));
    }

    let tier = tokens.ready_tier();

    if matches!(tier, Some(ReadyTier::Ui | ReadyTier::Demo)) && !tokens.has_base("~SHOT") {
        out.push(finding(
            ids::CHECK_GLYPH_READY_EVIDENCE,
            ids::CODE_MISSING_SHOT,
            "READY:ui requires ~SHOT".to_string(),
            Some("Reference a screenshot, e.g. ~SHOT:login.png."),
            json!({ "tier": tier.map(ReadyTier::as_str) }),
        ));
    }

    if tier == Some(ReadyTier::Demo) && !tokens.has_base("~REPORT") {
        out.push(finding(
            ids::CHECK_GLYPH_READY_EVIDENCE,
            ids::CODE_MISSING_REPORT,
            "READY:demo requires ~REPORT".to_string(),
            Some("Reference the demo report, e.g. ~REPORT:demo.html."),
            json!({ "tier": ReadyTier::Demo.as_str() }),
        ));
    }

    out
}
