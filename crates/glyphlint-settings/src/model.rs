use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// ICEMAP policy document, schema v1 (`icemap.yaml` or `icemap.json`).
///
/// This is a *user-facing* model: it is permissive, so `null` sections are accepted and
/// unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IcemapDocumentV1 {
    /// Policy identity, matched against `~ICEMAP:<id>`. Numbers are accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icemap_id: Option<ScalarValue>,

    /// Map of load class name -> requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loads: Option<BTreeMap<String, Option<LoadConfig>>>,

    /// Requirements gating `~DEMO:official`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_require: Option<OfficialRequireConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LoadConfig {
    /// `P0` (default), `P1`, `P2` or `P3`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_pressure: Option<ScalarValue>,

    /// Probe names that must appear as `~PROBE:<name>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_probes: Option<Vec<ScalarValue>>,

    /// Signal names that make `~PASS` illegal when present as `~SIG:<name>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veto_signals: Option<Vec<ScalarValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OfficialRequireConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_pass: Option<FlagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_required: Option<FlagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_required: Option<FlagValue>,
    /// Expected `~RUN:` value; only checked when a run is declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_must_be: Option<ScalarValue>,
    /// Only `"+"` is enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ice_must_be: Option<ScalarValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_rgca_all_plus: Option<FlagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_zd_plus: Option<FlagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_zdm_plus: Option<FlagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_thalet_plus: Option<FlagValue>,
    /// `core`, `ui` or `demo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_ready_tier: Option<ScalarValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_bridgespec_plus: Option<FlagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_tb_plus: Option<FlagValue>,
}

/// A scalar written as a string, a number or a boolean. Always compared as its text form.
///
/// The text form keeps the `.0` of whole floats (`1.0`) and capitalizes booleans (`True`),
/// so ids written by existing IceLayer tooling keep matching their `~ICEMAP:` tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ScalarValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) => f.write_str(s),
            ScalarValue::Integer(n) => write!(f, "{n}"),
            ScalarValue::Float(n) if n.is_nan() => f.write_str("nan"),
            ScalarValue::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.1}"),
            ScalarValue::Float(n) => write!(f, "{n}"),
            ScalarValue::Bool(true) => f.write_str("True"),
            ScalarValue::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

/// An `official_require` switch. YAML 1.1 spellings (`yes`, `on`) and numbers are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FlagValue {
    /// Nonzero numbers and `true`/`yes`/`on`/`1` (any case) are on; everything else is off.
    pub fn is_enabled(&self) -> bool {
        match self {
            FlagValue::Bool(b) => *b,
            FlagValue::Integer(n) => *n != 0,
            FlagValue::Float(n) => *n != 0.0 && !n.is_nan(),
            FlagValue::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "on" | "1"
            ),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_text_keeps_float_and_bool_spelling() {
        assert_eq!(ScalarValue::Float(1.0).to_string(), "1.0");
        assert_eq!(ScalarValue::Float(-3.0).to_string(), "-3.0");
        assert_eq!(ScalarValue::Float(2.5).to_string(), "2.5");
        assert_eq!(ScalarValue::Integer(7).to_string(), "7");
        assert_eq!(ScalarValue::Bool(true).to_string(), "True");
        assert_eq!(ScalarValue::Bool(false).to_string(), "False");
    }

    #[test]
    fn flag_values_follow_truthiness() {
        for on in [
            FlagValue::Bool(true),
            FlagValue::Integer(1),
            FlagValue::Integer(-2),
            FlagValue::Float(0.5),
            FlagValue::Text("yes".into()),
            FlagValue::Text(" On ".into()),
            FlagValue::Text("TRUE".into()),
            FlagValue::Text("1".into()),
        ] {
            assert!(on.is_enabled(), "{on:?}");
        }
        for off in [
            FlagValue::Bool(false),
            FlagValue::Integer(0),
            FlagValue::Float(0.0),
            FlagValue::Text(String::new()),
            FlagValue::Text("no".into()),
            FlagValue::Text("off".into()),
            FlagValue::Text("0".into()),
        ] {
            assert!(!off.is_enabled(), "{off:?}");
        }
    }
}
