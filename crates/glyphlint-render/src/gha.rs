use crate::{RenderableReport, RenderableVerdictStatus};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error title=glyphlint::[{check_id}:{code}] {message}`
///
/// A no-adoption verdict yields a single annotation. At most `max` lines are returned.
pub fn render_github_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    if max == 0 {
        return Vec::new();
    }
    if report.verdict == RenderableVerdictStatus::NoAdoption {
        return vec!["::error title=glyphlint::no ~tokens found; add a GlyphLine".to_string()];
    }

    report
        .findings
        .iter()
        .take(max)
        .map(|f| {
            let message = escape_data(&format!("[{}:{}] {}", f.check_id, f.code, f.message));
            format!("::error title=glyphlint::{}", message)
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
