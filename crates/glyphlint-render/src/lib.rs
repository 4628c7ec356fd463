//! Rendering utilities for CI surfaces (console text, Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{RenderableData, RenderableFinding, RenderableReport, RenderableVerdictStatus};
pub use text::{NO_ADOPTION_LINE, render_text};

#[cfg(test)]
mod test_support;
