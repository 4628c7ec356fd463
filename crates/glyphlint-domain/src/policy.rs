use crate::model::{Pressure, ReadyTier};
use std::collections::BTreeMap;

/// Load classes that must name their governing policy with `~ICEMAP:<id>`.
pub const HIGH_SENSITIVITY_LOADS: &[&str] = &["prod", "public", "pay"];

/// An ICEMAP policy, resolved from its document once per run and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    pub icemap_id: String,
    pub loads: BTreeMap<String, LoadRequirement>,
    pub official_require: OfficialRequirements,
}

impl Policy {
    pub fn load(&self, name: &str) -> Option<&LoadRequirement> {
        self.loads.get(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadRequirement {
    pub min_pressure: Pressure,
    /// Declared order is preserved; findings list missing probes in this order.
    pub required_probes: Vec<String>,
    /// Declared order is preserved; findings list triggering signals in this order.
    pub veto_signals: Vec<String>,
}

/// Requirements gating `~DEMO:official`. Every field defaults to "not enforced".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OfficialRequirements {
    pub require_pass: bool,
    pub env_required: bool,
    pub run_required: bool,
    /// Only enforced when a `~RUN:` value is present.
    pub run_must_be: Option<String>,
    /// Only `"+"` is enforced (requires `~ICE+`).
    pub ice_must_be: Option<String>,
    pub require_rgca_all_plus: bool,
    pub require_zd_plus: bool,
    pub require_zdm_plus: bool,
    pub require_thalet_plus: bool,
    pub require_ready_tier: Option<ReadyTier>,
    pub require_bridgespec_plus: bool,
    pub require_tb_plus: bool,
}

impl OfficialRequirements {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
