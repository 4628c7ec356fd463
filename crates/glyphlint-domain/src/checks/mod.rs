use crate::policy::Policy;
use crate::tokens::TokenSet;
use glyphlint_types::Finding;

mod icemap;
mod illegal_combos;
mod official;
mod ready_evidence;
mod token_charset;
mod utils;


/// Run every check in its fixed order and concatenate their findings.
///
/// Checks are independent: none of them sees another's output, and a finding never stops
/// a later check from running.
pub fn run_all(tokens: &TokenSet<'_>, policy: &Policy) -> Vec<Finding> {
    let mut findings = Vec::new();
    collect(&mut findings, "token_charset", token_charset::run(tokens));
    collect(&mut findings, "illegal_combos", illegal_combos::run(tokens));
    collect(&mut findings, "ready_evidence", ready_evidence::run(tokens));
    collect(&mut findings, "icemap", icemap::run(tokens, policy));
    collect(&mut findings, "official", official::run(tokens, policy));
    findings
}

fn collect(findings: &mut Vec<Finding>, check: &str, produced: Vec<Finding>) {
    tracing::debug!(check, findings = produced.len(), "check finished");
    findings.extend(produced);
}
