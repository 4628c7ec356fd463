use crate::{RenderableData, RenderableFinding, RenderableReport, RenderableVerdictStatus};

pub fn finding(check_id: &str, code: &str, message: &str) -> RenderableFinding {
    RenderableFinding {
        check_id: check_id.to_string(),
        code: code.to_string(),
        message: message.to_string(),
        help: None,
    }
}

pub fn report(
    verdict: RenderableVerdictStatus,
    findings: Vec<RenderableFinding>,
) -> RenderableReport {
    let findings_total = findings.len() as u32;
    RenderableReport {
        verdict,
        findings,
        data: RenderableData {
            icemap_id: "ice-test".to_string(),
            tokens_scanned: 3,
            tokens_unique: 3,
            findings_total,
            ..RenderableData::default()
        },
    }
}
