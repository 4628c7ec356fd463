//! Render use cases: console text, Markdown and GitHub annotations from in-memory reports.

use crate::report::to_renderable;
use glyphlint_types::GlyphlintReport;

pub fn render_console(report: &GlyphlintReport) -> String {
    glyphlint_render::render_text(&to_renderable(report))
}

pub fn render_markdown(report: &GlyphlintReport) -> String {
    glyphlint_render::render_markdown(&to_renderable(report))
}

pub fn render_annotations(report: &GlyphlintReport, max: usize) -> Vec<String> {
    glyphlint_render::render_github_annotations(&to_renderable(report), max)
}
