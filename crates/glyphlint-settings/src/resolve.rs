use crate::PolicyError;
use crate::model::{FlagValue, IcemapDocumentV1, LoadConfig, OfficialRequireConfig, ScalarValue};
use glyphlint_domain::{LoadRequirement, OfficialRequirements, Policy, Pressure, ReadyTier};

pub fn resolve_policy(doc: IcemapDocumentV1) -> Result<Policy, PolicyError> {
    let icemap_id = doc
        .icemap_id
        .as_ref()
        .map(ScalarValue::to_string)
        .unwrap_or_default();

    let mut loads = std::collections::BTreeMap::new();
    for (name, spec) in doc.loads.unwrap_or_default() {
        let requirement = resolve_load(&name, spec.unwrap_or_default())?;
        loads.insert(name, requirement);
    }

    let official_require = resolve_official(doc.official_require.unwrap_or_default())?;

    tracing::debug!(
        icemap_id = %icemap_id,
        loads = loads.len(),
        "resolved ICEMAP policy"
    );

    Ok(Policy {
        icemap_id,
        loads,
        official_require,
    })
}

fn resolve_load(name: &str, spec: LoadConfig) -> Result<LoadRequirement, PolicyError> {
    let min_pressure = match spec.min_pressure {
        None => Pressure::default(),
        Some(value) => {
            let value = value.to_string();
            Pressure::parse(value.trim()).ok_or_else(|| PolicyError::UnknownPressure {
                load: name.to_string(),
                value,
            })?
        }
    };

    Ok(LoadRequirement {
        min_pressure,
        required_probes: stringify_all(spec.required_probes),
        veto_signals: stringify_all(spec.veto_signals),
    })
}

fn resolve_official(cfg: OfficialRequireConfig) -> Result<OfficialRequirements, PolicyError> {
    let require_ready_tier = match non_empty(cfg.require_ready_tier) {
        None => None,
        Some(value) => Some(
            ReadyTier::parse(value.trim())
                .ok_or(PolicyError::UnknownReadyTier { value })?,
        ),
    };

    let ice_must_be = non_empty(cfg.ice_must_be);
    if let Some(value) = ice_must_be.as_deref()
        && value != "+"
    {
        tracing::warn!(value, "official_require.ice_must_be only enforces \"+\"; ignoring");
    }

    Ok(OfficialRequirements {
        require_pass: enabled(cfg.require_pass),
        env_required: enabled(cfg.env_required),
        run_required: enabled(cfg.run_required),
        run_must_be: non_empty(cfg.run_must_be),
        ice_must_be,
        require_rgca_all_plus: enabled(cfg.require_rgca_all_plus),
        require_zd_plus: enabled(cfg.require_zd_plus),
        require_zdm_plus: enabled(cfg.require_zdm_plus),
        require_thalet_plus: enabled(cfg.require_thalet_plus),
        require_ready_tier,
        require_bridgespec_plus: enabled(cfg.require_bridgespec_plus),
        require_tb_plus: enabled(cfg.require_tb_plus),
    })
}

fn stringify_all(values: Option<Vec<ScalarValue>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .iter()
        .map(ScalarValue::to_string)
        .collect()
}

fn enabled(flag: Option<FlagValue>) -> bool {
    flag.as_ref().is_some_and(FlagValue::is_enabled)
}

/// Empty strings count as "not configured".
fn non_empty(value: Option<ScalarValue>) -> Option<String> {
    value.map(|v| v.to_string()).filter(|s| !s.is_empty())
}
