//! ICEMAP policy parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves policy documents provided as
//! strings, and adoption flags provided as already-read environment values.

#![forbid(unsafe_code)]

mod adoption;
mod model;
mod resolve;

pub use adoption::{REQUIRE_ENV_VAR, env_flag_enabled, require_adoption};
pub use model::{FlagValue, IcemapDocumentV1, LoadConfig, OfficialRequireConfig, ScalarValue};
pub use resolve::resolve_policy;

use glyphlint_domain::Policy;

/// Schema identifier for the ICEMAP document JSON schema.
pub const SCHEMA_ICEMAP_V1: &str = "glyphlint.icemap.v1";

/// Serialization of a policy document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyFormat {
    Yaml,
    Json,
}

impl PolicyFormat {
    /// `.yaml` / `.yml` (any case) is YAML; everything else is JSON.
    pub fn from_path(path: &str) -> Self {
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.contains('/') && !ext.contains('\\'));
        match ext.as_deref() {
            Some("yaml" | "yml") => PolicyFormat::Yaml,
            _ => PolicyFormat::Json,
        }
    }
}

/// Structural problems with a policy document. These abort the run; they are never findings.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("invalid ICEMAP YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid ICEMAP JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown min_pressure {value:?} for load {load:?} (expected P0|P1|P2|P3)")]
    UnknownPressure { load: String, value: String },

    #[error("unknown official_require.require_ready_tier {value:?} (expected core|ui|demo)")]
    UnknownReadyTier { value: String },
}

/// Parse an ICEMAP document into its typed model. An empty or `null` document is an empty policy.
pub fn parse_icemap(input: &str, format: PolicyFormat) -> Result<IcemapDocumentV1, PolicyError> {
    let doc: Option<IcemapDocumentV1> = match format {
        PolicyFormat::Yaml => serde_yaml::from_str(input)?,
        PolicyFormat::Json => serde_json::from_str(input)?,
    };
    Ok(doc.unwrap_or_default())
}

/// Parse and resolve in one step.
pub fn load_policy(input: &str, format: PolicyFormat) -> Result<Policy, PolicyError> {
    resolve_policy(parse_icemap(input, format)?)
}
