//! GlyphLine token model.
//!
//! A token is a whitespace-separated word starting with `~`. Everything after the first `:`
//! is its value. Tokens are compared literally: no case folding, no trimming of punctuation.

use crate::model::{Pressure, ReadyTier};
use std::collections::BTreeSet;

/// Extract `~`-prefixed units in original order, duplicates preserved.
///
/// Arrow markers (`->`) and any other prose are ignored.
pub fn extract_tokens(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|word| word.starts_with('~'))
        .collect()
}

/// Unicode whitespace plus the ASCII information separators `\x1c`..=`\x1f`.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// `~` followed by one or more of `[A-Za-z0-9:+-?!_/.|]`.
pub fn is_valid_token(token: &str) -> bool {
    let Some(body) = token.strip_prefix('~') else {
        return false;
    };
    !body.is_empty() && body.chars().all(is_token_char)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ':' | '+' | '-' | '?' | '!' | '_' | '/' | '.' | '|')
}

/// Suffix after `prefix` of the first token (in original order) starting with `prefix`.
pub fn first_value<'a>(ordered: &[&'a str], prefix: &str) -> Option<&'a str> {
    ordered.iter().find_map(|token| token.strip_prefix(prefix))
}

/// The highest pressure declared, scanning `~P3` down to `~P0`.
pub fn highest_pressure(set: &BTreeSet<&str>) -> Option<Pressure> {
    Pressure::DESCENDING
        .into_iter()
        .find(|p| set.contains(p.token()))
}

/// `~RGCA+`, or all four of `~R+ ~G+ ~C+ ~A+`.
pub fn rgca_all_plus(set: &BTreeSet<&str>) -> bool {
    set.contains("~RGCA+") || ["~R+", "~G+", "~C+", "~A+"].iter().all(|t| set.contains(t))
}

/// The governing readiness tier, scanning `core`, `ui`, `demo` in that order.
pub fn ready_tier(set: &BTreeSet<&str>) -> Option<ReadyTier> {
    ReadyTier::PRIORITY
        .into_iter()
        .find(|tier| set.contains(tier.token()))
}

/// Both views of the tokens of one text, borrowed from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSet<'a> {
    ordered: Vec<&'a str>,
    unique: BTreeSet<&'a str>,
}

impl<'a> TokenSet<'a> {
    pub fn extract(text: &'a str) -> Self {
        Self::from_ordered(extract_tokens(text))
    }

    pub fn from_ordered(ordered: Vec<&'a str>) -> Self {
        let unique = ordered.iter().copied().collect();
        Self { ordered, unique }
    }

    /// Original left-to-right order, duplicates included.
    pub fn ordered(&self) -> &[&'a str] {
        &self.ordered
    }

    /// Deduplicated view.
    pub fn unique(&self) -> &BTreeSet<&'a str> {
        &self.unique
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.unique.contains(token)
    }

    /// Units failing the charset grammar, in original order (duplicates included).
    pub fn malformed(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.ordered
            .iter()
            .copied()
            .filter(|token| !is_valid_token(token))
    }

    pub fn first_value(&self, prefix: &str) -> Option<&'a str> {
        first_value(&self.ordered, prefix)
    }

    pub fn highest_pressure(&self) -> Option<Pressure> {
        highest_pressure(&self.unique)
    }

    pub fn rgca_all_plus(&self) -> bool {
        rgca_all_plus(&self.unique)
    }

    pub fn ready_tier(&self) -> Option<ReadyTier> {
        ready_tier(&self.unique)
    }

    /// Exact `base` or a valued form `base:<value>`.
    pub fn has_base(&self, base: &str) -> bool {
        self.contains(base)
            || self.unique.iter().any(|token| {
                token
                    .strip_prefix(base)
                    .is_some_and(|rest| rest.starts_with(':'))
            })
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.unique.iter().any(|token| token.starts_with(prefix))
    }

    /// Every distinct value carried by tokens starting with `prefix`.
    pub fn values_with_prefix(&self, prefix: &str) -> BTreeSet<&'a str> {
        self.unique
            .iter()
            .filter_map(|token| token.strip_prefix(prefix))
            .collect()
    }
}
