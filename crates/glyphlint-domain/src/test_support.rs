use crate::model::Pressure;
use crate::policy::{LoadRequirement, OfficialRequirements, Policy};
use std::collections::BTreeMap;

pub const TEST_ICEMAP_ID: &str = "ice-test";

pub fn load(min_pressure: Pressure, probes: &[&str], vetoes: &[&str]) -> LoadRequirement {
    LoadRequirement {
        min_pressure,
        required_probes: probes.iter().map(|p| p.to_string()).collect(),
        veto_signals: vetoes.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn policy(loads: Vec<(&str, LoadRequirement)>, official: OfficialRequirements) -> Policy {
    Policy {
        icemap_id: TEST_ICEMAP_ID.to_string(),
        loads: loads
            .into_iter()
            .map(|(name, spec)| (name.to_string(), spec))
            .collect::<BTreeMap<_, _>>(),
        official_require: official,
    }
}

pub fn policy_with_load(
    name: &str,
    min_pressure: Pressure,
    probes: &[&str],
    vetoes: &[&str],
) -> Policy {
    policy(
        vec![(name, load(min_pressure, probes, vetoes))],
        OfficialRequirements::default(),
    )
}

/// `staging` (min P1, probe `latency`) and `prod` (min P2, probes `latency` and `errors`,
/// vetoes `oom` and `pager`).
pub fn staging_policy() -> Policy {
    policy(
        vec![
            ("staging", load(Pressure::P1, &["latency"], &[])),
            (
                "prod",
                load(Pressure::P2, &["latency", "errors"], &["oom", "pager"]),
            ),
        ],
        OfficialRequirements::default(),
    )
}

pub fn official_policy(official: OfficialRequirements) -> Policy {
    policy(Vec::new(), official)
}
