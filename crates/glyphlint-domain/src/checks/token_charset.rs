use crate::checks::utils::finding;
use crate::tokens::TokenSet;
use glyphlint_types::{Finding, ids};
use serde_json::json;

/// One finding per malformed unit, duplicates included, in original order.
pub fn run(tokens: &TokenSet<'_>) -> Vec<Finding> {
    tokens
        .malformed()
        .map(|token| {
            finding(
                ids::CHECK_GLYPH_TOKEN_CHARSET,
                ids::CODE_INVALID_TOKEN_CHARACTERS,
                format!("Invalid token characters: {token}"),
                Some("Tokens may only use A-Z a-z 0-9 and : + - ? ! _ / . | after the `~`."),
                json!({ "token": token }),
            )
        })
        .collect()
}
