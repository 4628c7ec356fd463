//! The `lint` use case: resolve the policy, lint the text, and produce a report.

use anyhow::Context;
use glyphlint_domain::Policy;
use glyphlint_settings::PolicyFormat;
use glyphlint_types::{GlyphlintReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the lint use case.
#[derive(Clone, Debug)]
pub struct LintInput<'a> {
    /// ICEMAP document contents.
    pub policy_text: &'a str,
    pub policy_format: PolicyFormat,
    /// The text to lint (PR description, commit message, ...).
    pub text: &'a str,
    /// Fail with no-adoption when the text has no `~` token at all.
    pub require_adoption: bool,
}

/// Output from the lint use case.
#[derive(Clone, Debug)]
pub struct LintOutput {
    pub report: GlyphlintReport,
    /// The resolved policy used.
    pub policy: Policy,
}

pub fn run_lint(input: LintInput<'_>) -> anyhow::Result<LintOutput> {
    let started_at = OffsetDateTime::now_utc();

    let policy = glyphlint_settings::load_policy(input.policy_text, input.policy_format)
        .context("load ICEMAP policy")?;

    let result = glyphlint_domain::lint(input.text, &policy, input.require_adoption);
    tracing::info!(
        icemap_id = %policy.icemap_id,
        verdict = ?result.verdict,
        findings = result.findings.len(),
        "glyphlint finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "glyphlint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: result.verdict,
        findings: result.findings,
        data: result.data,
    };

    Ok(LintOutput { report, policy })
}

/// Map verdict to exit code: 0 = pass, 1 = rule failure, 2 = no adoption.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
        Verdict::NoAdoption => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: &str = r#"
icemap_id: ice-2026-01
loads:
  prod:
    min_pressure: P2
    required_probes: [latency]
    veto_signals: [oom]
official_require:
  require_pass: true
  ice_must_be: "+"
"#;

    fn input<'a>(text: &'a str, require_adoption: bool) -> LintInput<'a> {
        LintInput {
            policy_text: POLICY,
            policy_format: PolicyFormat::Yaml,
            text,
            require_adoption,
        }
    }

    #[test]
    fn passing_text_produces_pass_report() {
        let text = "Ship it. ~LOAD:prod ~P2 ~ICEMAP:ice-2026-01 ~PROBE:latency ~ICE+ ~PASS";
        let out = run_lint(input(text, true)).expect("lint");
        assert_eq!(out.report.verdict, Verdict::Pass);
        assert_eq!(out.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(out.report.tool.name, "glyphlint");
        assert!(out.report.finished_at >= out.report.started_at);
        assert_eq!(out.report.data.icemap_id, "ice-2026-01");
        assert_eq!(out.policy.icemap_id, "ice-2026-01");
    }

    #[test]
    fn failing_text_carries_findings() {
        let text = "~LOAD:prod ~P1 ~SIG:oom ~PASS";
        let out = run_lint(input(text, false)).expect("lint");
        assert_eq!(out.report.verdict, Verdict::Fail);
        let messages: Vec<&str> = out.report.findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Pressure too low for ~LOAD:prod: need ~P2 or higher",
                "~LOAD:prod requires ~ICEMAP:<id>",
                "Missing required probes for ~LOAD:prod: latency",
                "Veto signals present (oom) so ~PASS is illegal",
            ]
        );
        assert_eq!(verdict_exit_code(out.report.verdict), 1);
    }

    #[test]
    fn no_adoption_exit_code() {
        let out = run_lint(input("just prose", true)).expect("lint");
        assert_eq!(out.report.verdict, Verdict::NoAdoption);
        assert_eq!(verdict_exit_code(out.report.verdict), 2);
    }

    #[test]
    fn malformed_policy_is_an_error() {
        let err = run_lint(LintInput {
            policy_text: "{\"loads\": ",
            policy_format: PolicyFormat::Json,
            text: "~PASS",
            require_adoption: false,
        })
        .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.starts_with("load ICEMAP policy: invalid ICEMAP JSON"), "{chain}");
    }

    #[test]
    fn whole_float_icemap_id_matches_its_token() {
        let out = run_lint(LintInput {
            policy_text: "icemap_id: 1.0\nloads:\n  prod:\n",
            policy_format: PolicyFormat::Yaml,
            text: "~LOAD:prod ~P0 ~ICEMAP:1.0",
            require_adoption: true,
        })
        .expect("lint");
        assert_eq!(out.report.verdict, Verdict::Pass, "{:?}", out.report.findings);
        assert_eq!(out.report.data.icemap_id, "1.0");
    }

    #[test]
    fn truthy_official_flag_is_enforced() {
        let out = run_lint(LintInput {
            policy_text: r#"{"official_require": {"require_pass": 1}}"#,
            policy_format: PolicyFormat::Json,
            text: "~DEMO:official",
            require_adoption: false,
        })
        .expect("lint");
        let messages: Vec<&str> = out.report.findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, vec!["~DEMO:official requires ~PASS"]);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 1);
        assert_eq!(verdict_exit_code(Verdict::NoAdoption), 2);
    }
}
