use crate::checks::utils::finding;
use crate::policy::{HIGH_SENSITIVITY_LOADS, Policy};
use crate::tokens::TokenSet;
use glyphlint_types::{Finding, ids};
use serde_json::json;

const LOAD_PREFIX: &str = "~LOAD:";
const ICEMAP_PREFIX: &str = "~ICEMAP:";

/// Load-class policy, keyed by the first `~LOAD:<name>` token.
pub fn run(tokens: &TokenSet<'_>, policy: &Policy) -> Vec<Finding> {
    let mut out = Vec::new();
    let Some(load) = tokens.first_value(LOAD_PREFIX) else {
        return out;
    };
    let icemap = tokens.first_value(ICEMAP_PREFIX);

    let Some(spec) = policy.load(load) else {
        out.push(finding(
            ids::CHECK_GLYPH_ICEMAP,
            ids::CODE_UNKNOWN_LOAD,
            format!("Unknown ~LOAD:{load} for policy {}", policy.icemap_id),
            Some("Use a load class defined in the policy's `loads` section."),
            json!({
                "load": load,
                "icemap_id": policy.icemap_id,
                "known_loads": policy.loads.keys().collect::<Vec<_>>(),
            }),
        ));
        return out;
    };

    match tokens.highest_pressure() {
        None => out.push(finding(
            ids::CHECK_GLYPH_ICEMAP,
            ids::CODE_MISSING_PRESSURE,
            format!("~LOAD:{load} requires an explicit pressure token (~P0/~P1/~P2/~P3)"),
            Some("Declare the pressure in effect with one of ~P0, ~P1, ~P2, ~P3."),
            json!({ "load": load }),
        )),
        Some(pressure) if pressure < spec.min_pressure => out.push(finding(
            ids::CHECK_GLYPH_ICEMAP,
            ids::CODE_PRESSURE_TOO_LOW,
            format!(
                "Pressure too low for ~LOAD:{load}: need {} or higher",
                spec.min_pressure.token()
            ),
            Some("Raise the declared pressure to the load class minimum."),
            json!({
                "load": load,
                "required": spec.min_pressure.as_str(),
                "actual": pressure.as_str(),
            }),
        )),
        Some(_) => {}
    }

    if HIGH_SENSITIVITY_LOADS.contains(&load) && icemap.is_none() {
        out.push(finding(
            ids::CHECK_GLYPH_ICEMAP,
            ids::CODE_MISSING_ICEMAP,
            format!("~LOAD:{load} requires ~ICEMAP:<id>"),
            Some("High-sensitivity loads must name their governing policy."),
            json!({ "load": load, "icemap_id": policy.icemap_id }),
        ));
    }

    if let Some(icemap) = icemap
        && icemap != policy.icemap_id
    {
        out.push(finding(
            ids::CHECK_GLYPH_ICEMAP,
            ids::CODE_ICEMAP_MISMATCH,
            format!(
                "~ICEMAP:{icemap} does not match policy file icemap_id={}",
                policy.icemap_id
            ),
            Some("Lint against the policy named in the text, or correct the ~ICEMAP token."),
            json!({ "declared": icemap, "icemap_id": policy.icemap_id }),
        ));
    }

    let probes = tokens.values_with_prefix("~PROBE:");
    let missing_probes: Vec<&str> = spec
        .required_probes
        .iter()
        .map(String::as_str)
        .filter(|probe| !probes.contains(*probe))
        .collect();
    if !missing_probes.is_empty() {
        out.push(finding(
            ids::CHECK_GLYPH_ICEMAP,
            ids::CODE_MISSING_PROBES,
            format!(
                "Missing required probes for ~LOAD:{load}: {}",
                missing_probes.join(", ")
            ),
            Some("Run each required probe and add a ~PROBE:<name> token for it."),
            json!({ "load": load, "missing": missing_probes }),
        ));
    }

    let signals = tokens.values_with_prefix("~SIG:");
    let veto_hit: Vec<&str> = spec
        .veto_signals
        .iter()
        .map(String::as_str)
        .filter(|signal| signals.contains(*signal))
        .collect();
    if !veto_hit.is_empty() && tokens.contains("~PASS") {
        out.push(finding(
            ids::CHECK_GLYPH_ICEMAP,
            ids::CODE_VETO_SIGNAL,
            format!(
                "Veto signals present ({}) so ~PASS is illegal",
                veto_hit.join(", ")
            ),
            Some("Clear the veto signals or drop ~PASS."),
            json!({ "load": load, "signals": veto_hit }),
        ));
    }

    out
}
