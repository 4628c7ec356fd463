use glyphlint_types::{Finding, GlyphlintData, Verdict};

/// Result of one lint run.
#[derive(Clone, Debug, PartialEq)]
pub struct LintResult {
    pub verdict: Verdict,
    /// Charset findings first, then one block per rule in evaluation order.
    pub findings: Vec<Finding>,
    pub data: GlyphlintData,
}

impl LintResult {
    /// The human-readable violation lines, in order.
    pub fn violations(&self) -> Vec<&str> {
        self.findings.iter().map(|f| f.message.as_str()).collect()
    }

    pub fn is_pass(&self) -> bool {
        self.verdict == Verdict::Pass
    }
}
