use crate::{RenderableReport, RenderableVerdictStatus};

/// Console line for a text without a single `~` token while adoption is required.
pub const NO_ADOPTION_LINE: &str = "glyphlint: FAIL (no ~tokens found; add a GlyphLine)";

/// The console summary: a verdict line, then one `- <message>` line per violation.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();
    match report.verdict {
        RenderableVerdictStatus::NoAdoption => {
            out.push_str(NO_ADOPTION_LINE);
            out.push('\n');
        }
        RenderableVerdictStatus::Pass => out.push_str("glyphlint: PASS\n"),
        RenderableVerdictStatus::Fail => {
            out.push_str("glyphlint: FAIL\n");
            for f in &report.findings {
                out.push_str("- ");
                out.push_str(&f.message);
                out.push('\n');
            }
        }
    }
    out
}
