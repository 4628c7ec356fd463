//! Fuzz target for the full lint pass over arbitrary text.
//!
//! Goal: linting should **never panic**, and the verdict must agree with the findings.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_lint
//! ```

#![no_main]

use arbitrary::Arbitrary;
use glyphlint_settings::{PolicyFormat, load_policy};
use libfuzzer_sys::fuzz_target;

const POLICY: &str = r#"
icemap_id: ice-fuzz
loads:
  staging:
    min_pressure: P1
    required_probes: [latency]
  prod:
    min_pressure: P2
    required_probes: [latency, error_rate]
    veto_signals: [oom]
official_require:
  require_pass: true
  env_required: true
  run_required: true
  run_must_be: "+"
  ice_must_be: "+"
  require_rgca_all_plus: true
  require_ready_tier: demo
"#;

#[derive(Debug, Arbitrary)]
struct LintInput {
    text: String,
    require_adoption: bool,
}

fuzz_target!(|input: LintInput| {
    let Ok(policy) = load_policy(POLICY, PolicyFormat::Yaml) else {
        return;
    };

    let result = glyphlint_domain::lint(&input.text, &policy, input.require_adoption);
    let again = glyphlint_domain::lint(&input.text, &policy, input.require_adoption);
    assert_eq!(result, again);

    assert_eq!(result.data.findings_total as usize, result.findings.len());
    if result.is_pass() {
        assert!(result.findings.is_empty());
    } else if result.findings.is_empty() {
        assert!(input.require_adoption && result.data.tokens_scanned == 0);
    }
});
