use crate::checks;
use crate::policy::Policy;
use crate::report::LintResult;
use crate::tokens::TokenSet;
use glyphlint_types::{Finding, GlyphlintData, Verdict};

/// Lint `text` against `policy`.
///
/// With `require_adoption`, a text without a single `~` token short-circuits to
/// [`Verdict::NoAdoption`] before any check runs. Otherwise every check runs and the
/// verdict is `Pass` iff none of them produced a finding.
pub fn lint(text: &str, policy: &Policy, require_adoption: bool) -> LintResult {
    let tokens = TokenSet::extract(text);

    if require_adoption && tokens.is_empty() {
        tracing::debug!("no ~tokens found and adoption is required");
        return LintResult {
            verdict: Verdict::NoAdoption,
            findings: Vec::new(),
            data: summarize(&tokens, policy, require_adoption, &[]),
        };
    }

    let findings = checks::run_all(&tokens, policy);
    let verdict = compute_verdict(&findings);
    tracing::debug!(
        tokens = tokens.ordered().len(),
        findings = findings.len(),
        ?verdict,
        "lint complete"
    );

    let data = summarize(&tokens, policy, require_adoption, &findings);
    LintResult {
        verdict,
        findings,
        data,
    }
}

fn compute_verdict(findings: &[Finding]) -> Verdict {
    if findings.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

fn summarize(
    tokens: &TokenSet<'_>,
    policy: &Policy,
    require_adoption: bool,
    findings: &[Finding],
) -> GlyphlintData {
    GlyphlintData {
        icemap_id: policy.icemap_id.clone(),
        require_adoption,
        tokens_scanned: saturating_count(tokens.ordered().len()),
        tokens_unique: saturating_count(tokens.unique().len()),
        tokens_malformed: saturating_count(tokens.malformed().count()),
        load: tokens.first_value("~LOAD:").map(str::to_string),
        pressure: tokens.highest_pressure().map(|p| p.as_str().to_string()),
        ready_tier: tokens.ready_tier().map(|t| t.as_str().to_string()),
        findings_total: saturating_count(findings.len()),
    }
}

/// Report counters are `u32`; anything larger is pinned at `u32::MAX`.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{policy_with_load, staging_policy};
    use crate::model::Pressure;

    #[test]
    fn pass_when_no_rule_triggers() {
        let result = lint("Refactor only, nothing to claim. ~NOTE", &Policy::default(), false);
        assert_eq!(result.verdict, Verdict::Pass);
        assert!(result.violations().is_empty());
    }

    #[test]
    fn prose_without_tokens_passes_when_adoption_not_required() {
        let result = lint("plain prose", &Policy::default(), false);
        assert_eq!(result.verdict, Verdict::Pass);
        assert_eq!(result.data.tokens_scanned, 0);
    }

    #[test]
    fn no_adoption_short_circuits_before_rules() {
        let result = lint("no tokens here at all", &staging_policy(), true);
        assert_eq!(result.verdict, Verdict::NoAdoption);
        assert!(result.findings.is_empty());
        assert!(result.data.require_adoption);
    }

    #[test]
    fn adoption_satisfied_by_a_single_malformed_token() {
        let result = lint("~", &Policy::default(), true);
        assert_eq!(result.verdict, Verdict::Fail);
        assert_eq!(result.violations(), vec!["Invalid token characters: ~"]);
    }

    #[test]
    fn charset_findings_come_first_then_rule_order() {
        let policy = policy_with_load("staging", Pressure::P1, &[], &[]);
        let text = "~P3 ~PASS ~bad# ~READY:core ~LOAD:staging";
        let result = lint(text, &policy, false);
        let codes: Vec<&str> = result.findings.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![
                "invalid_token_characters",
                "freeze_forbids_pass",
                "missing_evidence",
            ]
        );
    }

    #[test]
    fn summary_reports_selected_tokens() {
        let text = "~LOAD:staging ~LOAD:prod ~P1 ~P2 ~READY:ui ~x# ~P1";
        let result = lint(text, &staging_policy(), false);
        assert_eq!(result.data.tokens_scanned, 7);
        assert_eq!(result.data.tokens_unique, 6);
        assert_eq!(result.data.tokens_malformed, 1);
        assert_eq!(result.data.load.as_deref(), Some("staging"));
        assert_eq!(result.data.pressure.as_deref(), Some("P2"));
        assert_eq!(result.data.ready_tier.as_deref(), Some("ui"));
        assert_eq!(result.data.icemap_id, "ice-test");
        assert_eq!(result.data.findings_total, result.findings.len() as u32);
    }

    #[test]
    fn counts_saturate_instead_of_wrapping() {
        assert_eq!(saturating_count(0), 0);
        assert_eq!(saturating_count(42), 42);
        assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
        assert_eq!(saturating_count(usize::MAX), u32::MAX);
    }

    #[test]
    fn lint_is_idempotent() {
        let text = "~LOAD:staging ~P0 ~DEMO:official ~READY:demo ~ICE- ~PASS";
        let policy = staging_policy();
        assert_eq!(lint(text, &policy, true), lint(text, &policy, true));
    }
}
