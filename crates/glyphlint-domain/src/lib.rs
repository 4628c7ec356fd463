//! Pure lint evaluation (no IO).
//!
//! Input: raw text plus a policy constructed elsewhere.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;
pub mod tokens;

pub mod checks;
mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::lint;
pub use model::{Pressure, ReadyTier};
pub use policy::{LoadRequirement, OfficialRequirements, Policy};
pub use report::LintResult;
pub use tokens::{TokenSet, extract_tokens, is_valid_token};
