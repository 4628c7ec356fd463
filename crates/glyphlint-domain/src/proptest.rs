//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Token extraction and the charset boundary
//! - Verdict and finding consistency
//! - Determinism of a full lint run

use crate::engine::lint;
use crate::model::Pressure;
use crate::test_support::{policy_with_load, staging_policy};
use crate::tokens::{TokenSet, extract_tokens, is_valid_token};
use glyphlint_types::{Verdict, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A well-formed token: `~` followed by 1..16 allowed characters.
fn arb_valid_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("~[A-Za-z0-9:+\\-?!_/.|]{1,16}").unwrap()
}

/// A token with exactly one character outside the allowed set spliced in.
fn arb_malformed_token() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[A-Za-z0-9]{0,8}").unwrap(),
        prop::sample::select(vec!['#', ',', ';', '(', ')', '@', '*', '=', '~', 'é']),
        prop::string::string_regex("[A-Za-z0-9]{0,8}").unwrap(),
    )
        .prop_map(|(head, bad, tail)| format!("~{head}{bad}{tail}"))
}

/// A word that can never become a token.
fn arb_prose_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9,.~]{0,10}").unwrap()
}

/// Known vocabulary, so that rules actually trigger.
fn arb_vocab_token() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "~PASS", "~FAIL", "~P0", "~P1", "~P2", "~P3", "~ICE+", "~ICE-", "~ZDM+", "~ZDM-",
        "~READY:core", "~READY:ui", "~READY:demo", "~COMMIT", "~HASH:ab", "~JSON", "~ARCH",
        "~MANI", "~ENV:ci", "~RUN:1", "~TRACE:t", "~ICEMAP:ice-test", "~ICEMAP:other",
        "~LOAD:staging", "~LOAD:prod", "~LOAD:unknown", "~PROBE:latency", "~PROBE:errors",
        "~SIG:oom", "~SHOT", "~REPORT", "~DEMO:official", "~bad#",
    ])
    .prop_map(str::to_string)
}

fn arb_glyphline() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![3 => arb_vocab_token(), 1 => arb_prose_word()],
        0..24,
    )
    .prop_map(|words| words.join(" "))
}

// ============================================================================
// Charset
// ============================================================================

proptest! {
    #[test]
    fn valid_tokens_are_accepted(token in arb_valid_token()) {
        prop_assert!(is_valid_token(&token), "rejected {token:?}");
    }

    #[test]
    fn foreign_characters_are_rejected(token in arb_malformed_token()) {
        prop_assert!(!is_valid_token(&token), "accepted {token:?}");
    }

    #[test]
    fn extracted_units_start_with_tilde_and_contain_no_whitespace(text in ".{0,200}") {
        for unit in extract_tokens(&text) {
            prop_assert!(unit.starts_with('~'));
            prop_assert!(!unit.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn prose_words_never_produce_tokens(words in prop::collection::vec(arb_prose_word(), 0..20)) {
        let text = words.join(" ");
        prop_assert!(extract_tokens(&text).is_empty());
    }
}

// ============================================================================
// Lint invariants
// ============================================================================

proptest! {
    #[test]
    fn extraction_preserves_order_and_multiplicity(
        tokens in prop::collection::vec(arb_valid_token(), 0..20)
    ) {
        let text = tokens.join("  \n");
        let set = TokenSet::extract(&text);
        let got: Vec<&str> = set.ordered().to_vec();
        let want: Vec<&str> = tokens.iter().map(String::as_str).collect();
        prop_assert_eq!(got, want);
        prop_assert!(set.unique().len() <= set.ordered().len());
    }

    #[test]
    fn one_charset_finding_per_malformed_occurrence(
        bad in prop::collection::vec(arb_malformed_token(), 0..10),
        good in prop::collection::vec(arb_valid_token(), 0..10),
    ) {
        let text = format!("{} {}", bad.join(" "), good.join(" "));
        let result = lint(&text, &Default::default(), false);
        let charset = result
            .findings
            .iter()
            .filter(|f| f.check_id == ids::CHECK_GLYPH_TOKEN_CHARSET)
            .count();
        prop_assert_eq!(charset, bad.len());
        prop_assert_eq!(result.data.tokens_malformed as usize, bad.len());
    }

    #[test]
    fn verdict_agrees_with_findings(text in arb_glyphline(), require in any::<bool>()) {
        let result = lint(&text, &staging_policy(), require);
        match result.verdict {
            Verdict::Pass => prop_assert!(result.findings.is_empty()),
            Verdict::Fail => prop_assert!(!result.findings.is_empty()),
            Verdict::NoAdoption => {
                prop_assert!(require);
                prop_assert!(result.findings.is_empty());
                prop_assert_eq!(result.data.tokens_scanned, 0);
            }
        }
        prop_assert_eq!(result.data.findings_total as usize, result.findings.len());
    }

    #[test]
    fn lint_is_deterministic(text in arb_glyphline()) {
        let policy = staging_policy();
        prop_assert_eq!(lint(&text, &policy, true), lint(&text, &policy, true));
    }

    #[test]
    fn findings_follow_rule_order(text in arb_glyphline()) {
        let rank = |check_id: &str| match check_id {
            ids::CHECK_GLYPH_TOKEN_CHARSET => 0,
            ids::CHECK_GLYPH_ILLEGAL_COMBO => 1,
            ids::CHECK_GLYPH_READY_EVIDENCE => 2,
            ids::CHECK_GLYPH_ICEMAP => 3,
            ids::CHECK_GLYPH_OFFICIAL_CLAIM => 4,
            _ => 5,
        };
        let result = lint(&text, &staging_policy(), false);
        let ranks: Vec<u8> = result.findings.iter().map(|f| rank(&f.check_id)).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{ranks:?}");
    }

    #[test]
    fn pressure_at_or_above_minimum_never_reports_too_low(
        min in prop::sample::select(Pressure::DESCENDING.to_vec()),
        declared in prop::sample::select(Pressure::DESCENDING.to_vec()),
    ) {
        let policy = policy_with_load("staging", min, &[], &[]);
        let text = format!("~LOAD:staging {}", declared.token());
        let result = lint(&text, &policy, false);
        let too_low = result
            .findings
            .iter()
            .any(|f| f.code == ids::CODE_PRESSURE_TOO_LOW);
        prop_assert_eq!(too_low, declared < min);
    }
}
