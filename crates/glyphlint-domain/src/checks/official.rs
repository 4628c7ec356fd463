use crate::checks::utils::finding;
use crate::policy::Policy;
use crate::tokens::TokenSet;
use glyphlint_types::{Finding, ids};
use serde_json::json;

const OFFICIAL: &str = "~DEMO:official";

/// `~DEMO:official` gated by the policy's `official_require` bundle.
///
/// Every configured requirement is checked on its own; each unmet one is its own finding.
pub fn run(tokens: &TokenSet<'_>, policy: &Policy) -> Vec<Finding> {
    let mut out = Vec::new();
    if !tokens.contains(OFFICIAL) {
        return out;
    }
    let req = &policy.official_require;
    let mut unmet = |requirement: &str, need: String| {
        out.push(finding(
            ids::CHECK_GLYPH_OFFICIAL_CLAIM,
            ids::CODE_UNMET_REQUIREMENT,
            format!("{OFFICIAL} requires {need}"),
            Some("Add the tokens required by the policy's official_require section."),
            json!({ "requirement": requirement, "icemap_id": policy.icemap_id }),
        ));
    };

    if req.require_pass && !tokens.contains("~PASS") {
        unmet("require_pass", "~PASS".to_string());
    }

    let run = tokens.first_value("~RUN:");
    if req.env_required && tokens.first_value("~ENV:").is_none() {
        unmet("env_required", "~ENV:<...>".to_string());
    }
    if req.run_required && run.is_none() {
        unmet("run_required", "~RUN:<...>".to_string());
    }
    if let (Some(run), Some(want)) = (run, req.run_must_be.as_deref())
        && run != want
    {
        unmet("run_must_be", format!("~RUN:{want}"));
    }

    if req.ice_must_be.as_deref() == Some("+") && !tokens.contains("~ICE+") {
        unmet("ice_must_be", "~ICE+".to_string());
    }

    if req.require_rgca_all_plus && !tokens.rgca_all_plus() {
        unmet(
            "require_rgca_all_plus",
            "RGCA all plus (~RGCA+ or ~R+ ~G+ ~C+ ~A+)".to_string(),
        );
    }
    if req.require_zd_plus && !tokens.contains("~ZD+") {
        unmet("require_zd_plus", "~ZD+".to_string());
    }
    if req.require_zdm_plus && !tokens.contains("~ZDM+") {
        unmet("require_zdm_plus", "~ZDM+".to_string());
    }
    if req.require_thalet_plus && !tokens.contains("~T+") {
        unmet("require_thalet_plus", "~T+".to_string());
    }

    if let Some(need) = req.require_ready_tier
        && tokens.ready_tier() != Some(need)
    {
        unmet("require_ready_tier", need.token().to_string());
    }

    if req.require_bridgespec_plus && !tokens.contains("~BS+") {
        unmet("require_bridgespec_plus", "~BS+".to_string());
    }
    if req.require_tb_plus && !tokens.contains("~TB+") {
        unmet("require_tb_plus", "~TB+".to_string());
    }

    out
}
