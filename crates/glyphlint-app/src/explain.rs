//! The `explain` use case: look up check/code documentation.

use glyphlint_types::explain::{self, Explanation};
use std::fmt::Write;

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; carries everything that could have been asked for.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let identifier = identifier.trim();
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Render an explanation as plain text with fenced GlyphLine examples.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_explanation(&mut out, exp);
    out
}

fn write_explanation(out: &mut String, exp: &Explanation) -> std::fmt::Result {
    writeln!(out, "{}", exp.title)?;
    writeln!(out, "{}", "=".repeat(exp.title.chars().count()))?;
    writeln!(out)?;
    writeln!(out, "{}", exp.description)?;
    writeln!(out)?;
    section(out, "Remediation")?;
    writeln!(out, "{}", exp.remediation)?;
    writeln!(out)?;
    section(out, "Examples")?;
    writeln!(out)?;
    example(out, "Before (violation):", exp.examples.before)?;
    writeln!(out)?;
    example(out, "After (fixed):", exp.examples.after)
}

fn section(out: &mut String, heading: &str) -> std::fmt::Result {
    writeln!(out, "{heading}")?;
    writeln!(out, "{}", "-".repeat(heading.len()))
}

fn example(out: &mut String, label: &str, glyphline: &str) -> std::fmt::Result {
    writeln!(out, "{label}")?;
    writeln!(out, "```text")?;
    writeln!(out, "{glyphline}")?;
    writeln!(out, "```")
}

/// The message printed to stderr for an unknown identifier.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n\nAvailable check_ids:\n");
    for id in check_ids {
        let _ = writeln!(out, "  - {id}");
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        let _ = writeln!(out, "  - {code}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(identifier: &str) -> Explanation {
        match run_explain(identifier) {
            ExplainOutput::Found(exp) => exp,
            other => panic!("expected an explanation for {identifier}, got {other:?}"),
        }
    }

    #[test]
    fn explains_check_ids_and_codes() {
        assert_eq!(found("glyph.icemap").title, found(" glyph.icemap ").title);
        assert!(!found("veto_signal").remediation.is_empty());
        assert!(!found("unmet_requirement").description.is_empty());
    }

    #[test]
    fn unknown_identifier_lists_alternatives() {
        match run_explain("not_a_real_thing") {
            ExplainOutput::NotFound {
                identifier,
                available_check_ids,
                available_codes,
            } => {
                assert_eq!(identifier, "not_a_real_thing");
                assert!(available_check_ids.contains(&"glyph.official_claim"));
                assert!(available_codes.contains(&"missing_probes"));
            }
            ExplainOutput::Found(exp) => panic!("unexpected explanation {}", exp.title),
        }
    }

    #[test]
    fn formatted_explanation_has_sections_and_fences() {
        let exp = found("glyph.illegal_combo");
        let formatted = format_explanation(&exp);

        assert!(formatted.starts_with(&format!("{}\n===", exp.title)));
        assert!(formatted.contains("\nRemediation\n-----------\n"));
        assert!(formatted.contains("\nExamples\n--------\n"));
        assert!(formatted.contains(&format!("Before (violation):\n```text\n{}\n```", exp.examples.before)));
        assert!(formatted.ends_with(&format!("{}\n```\n", exp.examples.after)));
    }

    #[test]
    fn not_found_lists_ids_then_codes() {
        let formatted = format_not_found("missing", &["check.one", "check.two"], &["code.one"]);
        assert_eq!(
            formatted,
            "Unknown check_id or code: missing\n\n\
             Available check_ids:\n  - check.one\n  - check.two\n\n\
             Available codes:\n  - code.one\n"
        );
    }
}
