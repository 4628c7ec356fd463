use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for glyphlint reports.
pub const SCHEMA_REPORT_V1: &str = "glyphlint.report.v1";

/// A single violation produced by a lint run.
///
/// `message` is the human-readable violation line printed by the CLI; the other fields
/// exist so machine consumers do not have to parse it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup and trending: a hash of
    /// `check_id + code + message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

/// Outcome of a lint run.
///
/// `NoAdoption` is distinct from `Fail`: adoption was required and the text carried no
/// `~` tokens at all, so no rule was evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
    NoAdoption,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Glyphlint-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GlyphlintData {
    /// `icemap_id` of the policy the text was linted against.
    pub icemap_id: String,
    pub require_adoption: bool,

    /// Tokens in original order, duplicates included.
    pub tokens_scanned: u32,
    pub tokens_unique: u32,
    pub tokens_malformed: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_tier: Option<String>,

    pub findings_total: u32,
}

/// A generic report envelope.
///
/// Keeping this generic allows tool-specific data while still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = GlyphlintData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type GlyphlintReport = ReportEnvelope<GlyphlintData>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_serializes_snake_case() {
        let v = serde_json::to_value(Verdict::NoAdoption).expect("serialize verdict");
        assert_eq!(v, serde_json::json!("no_adoption"));
        let v = serde_json::to_value(Verdict::Pass).expect("serialize verdict");
        assert_eq!(v, serde_json::json!("pass"));
    }

    #[test]
    fn finding_omits_empty_optionals() {
        let finding = Finding {
            check_id: "glyph.illegal_combo".to_string(),
            code: "freeze_forbids_pass".to_string(),
            message: "~P3 forbids ~PASS (freeze mode)".to_string(),
            help: None,
            fingerprint: None,
            data: JsonValue::Null,
        };
        let v = serde_json::to_value(&finding).expect("serialize finding");
        let obj = v.as_object().expect("object");
        assert!(!obj.contains_key("help"));
        assert!(!obj.contains_key("fingerprint"));
        assert!(!obj.contains_key("data"));
    }
}
