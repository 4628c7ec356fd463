use crate::{RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Glyphlint report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
        RenderableVerdictStatus::NoAdoption => "FAIL (no adoption)",
    };
    let data = &report.data;
    let policy = if data.icemap_id.is_empty() {
        "(unnamed)".to_string()
    } else {
        code_span(&data.icemap_id)
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Policy: {}\n- Tokens: {} scanned / {} unique / {} malformed\n",
        verdict, policy, data.tokens_scanned, data.tokens_unique, data.tokens_malformed
    ));
    if let Some(load) = &data.load {
        out.push_str(&format!("- Load: {}\n", code_span(&format!("~LOAD:{load}"))));
    }
    if let Some(pressure) = &data.pressure {
        out.push_str(&format!("- Pressure: {}\n", code_span(&format!("~{pressure}"))));
    }
    if let Some(tier) = &data.ready_tier {
        out.push_str(&format!("- Ready tier: {}\n", code_span(&format!("~READY:{tier}"))));
    }
    out.push_str(&format!("- Findings: {}\n\n", data.findings_total));

    if report.verdict == RenderableVerdictStatus::NoAdoption {
        out.push_str("> No `~` tokens found and adoption is required. Add a GlyphLine.\n");
        return out;
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        out.push_str(&format!(
            "- `{}` / `{}`: {}\n",
            f.check_id,
            f.code,
            escape_inline(&f.message)
        ));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", escape_inline(help)));
        }
    }

    out
}

/// Tokens such as `~PASS`, `~a_b_c` and `<id>` placeholders would otherwise render as
/// strikethrough, emphasis, table cells or HTML.
fn escape_inline(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '~' | '`' | '_' | '*' | '|' | '[' | ']' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// A code span whose fence is longer than any backtick run in `text`.
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{finding, report};

    #[test]
    fn renders_empty_report() {
        let md = render_markdown(&report(RenderableVerdictStatus::Pass, Vec::new()));
        assert!(md.starts_with("# Glyphlint report\n"));
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Policy: `ice-test`"));
        assert!(md.contains("No findings"));
    }

    #[test]
    fn renders_findings_with_help_and_summary() {
        let mut f = finding(
            "glyph.icemap",
            "missing_icemap",
            "~LOAD:prod requires ~ICEMAP:<id>",
        );
        f.help = Some("name the policy".to_string());
        let mut r = report(RenderableVerdictStatus::Fail, vec![f]);
        r.data.load = Some("prod".to_string());
        r.data.pressure = Some("P2".to_string());
        r.data.ready_tier = Some("ui".to_string());

        let md = render_markdown(&r);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("- Load: `~LOAD:prod`"));
        assert!(md.contains("- Pressure: `~P2`"));
        assert!(md.contains("- Ready tier: `~READY:ui`"));
        assert!(md.contains("## Findings"));
        assert!(md.contains(
            "- `glyph.icemap` / `missing_icemap`: \\~LOAD:prod requires \\~ICEMAP:&lt;id&gt;"
        ));
        assert!(md.contains("  - help: name the policy"));
    }

    #[test]
    fn escapes_markdown_syntax_in_messages() {
        let f = finding(
            "glyph.token_charset",
            "invalid_token_characters",
            "Invalid token characters: ~a_b_c*|`x`",
        );
        let md = render_markdown(&report(RenderableVerdictStatus::Fail, vec![f]));
        assert!(md.contains(
            ": Invalid token characters: \\~a\\_b\\_c\\*\\|\\`x\\`\n"
        ));
    }

    #[test]
    fn backticks_in_load_and_policy_id_keep_code_spans_intact() {
        let mut r = report(RenderableVerdictStatus::Fail, Vec::new());
        r.data.icemap_id = "ice`1".to_string();
        r.data.load = Some("a`b".to_string());
        let md = render_markdown(&r);
        assert!(md.contains("- Policy: ``ice`1``\n"));
        assert!(md.contains("- Load: ``~LOAD:a`b``\n"));
    }

    #[test]
    fn code_span_pads_edge_backticks() {
        assert_eq!(code_span("plain"), "`plain`");
        assert_eq!(code_span("`x"), "`` `x ``");
        assert_eq!(code_span("a``b"), "```a``b```");
    }

    #[test]
    fn renders_no_adoption_note() {
        let mut r = report(RenderableVerdictStatus::NoAdoption, Vec::new());
        r.data.icemap_id.clear();
        let md = render_markdown(&r);
        assert!(md.contains("Verdict: **FAIL (no adoption)**"));
        assert!(md.contains("Policy: (unnamed)"));
        assert!(md.contains("Add a GlyphLine"));
        assert!(!md.contains("No findings"));
    }
}
