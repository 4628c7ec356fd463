use anyhow::Context;
use glyphlint_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableVerdictStatus,
};
use glyphlint_types::{Finding, GlyphlintReport, SCHEMA_REPORT_V1, Verdict};

/// Parse a previously written `glyphlint.report.v1` JSON report.
pub fn parse_report_json(text: &str) -> anyhow::Result<GlyphlintReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse glyphlint v1 report")
}

pub fn serialize_report(report: &GlyphlintReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn to_renderable(report: &GlyphlintReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Fail => RenderableVerdictStatus::Fail,
            Verdict::NoAdoption => RenderableVerdictStatus::NoAdoption,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            icemap_id: report.data.icemap_id.clone(),
            require_adoption: report.data.require_adoption,
            tokens_scanned: report.data.tokens_scanned,
            tokens_unique: report.data.tokens_unique,
            tokens_malformed: report.data.tokens_malformed,
            load: report.data.load.clone(),
            pressure: report.data.pressure.clone(),
            ready_tier: report.data.ready_tier.clone(),
            findings_total: report.data.findings_total,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        help: f.help.clone(),
    }
}
