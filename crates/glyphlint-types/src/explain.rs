//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after GlyphLine examples.
    pub examples: ExamplePair,
}

/// Before and after GlyphLine examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Text that would trigger a finding.
    pub before: &'static str,
    /// Text that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_GLYPH_TOKEN_CHARSET => Some(explain_token_charset()),
        ids::CHECK_GLYPH_ILLEGAL_COMBO => Some(explain_illegal_combo()),
        ids::CHECK_GLYPH_READY_EVIDENCE => Some(explain_ready_evidence()),
        ids::CHECK_GLYPH_ICEMAP => Some(explain_icemap()),
        ids::CHECK_GLYPH_OFFICIAL_CLAIM => Some(explain_official_claim()),

        // Codes
        ids::CODE_INVALID_TOKEN_CHARACTERS => Some(explain_token_charset()),
        ids::CODE_FREEZE_FORBIDS_PASS => Some(explain_freeze_forbids_pass()),
        ids::CODE_ICE_FAIL_FORBIDS_PASS => Some(explain_ice_fail_forbids_pass()),
        ids::CODE_ZDM_MISMATCH_FORBIDS_PASS => Some(explain_zdm_mismatch_forbids_pass()),
        ids::CODE_MISSING_EVIDENCE => Some(explain_ready_evidence()),
        ids::CODE_MISSING_SHOT => Some(explain_missing_shot()),
        ids::CODE_MISSING_REPORT => Some(explain_missing_report()),
        ids::CODE_UNKNOWN_LOAD => Some(explain_unknown_load()),
        ids::CODE_MISSING_PRESSURE => Some(explain_missing_pressure()),
        ids::CODE_PRESSURE_TOO_LOW => Some(explain_pressure_too_low()),
        ids::CODE_MISSING_ICEMAP => Some(explain_missing_icemap()),
        ids::CODE_ICEMAP_MISMATCH => Some(explain_icemap_mismatch()),
        ids::CODE_MISSING_PROBES => Some(explain_missing_probes()),
        ids::CODE_VETO_SIGNAL => Some(explain_veto_signal()),
        ids::CODE_UNMET_REQUIREMENT => Some(explain_official_claim()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_GLYPH_TOKEN_CHARSET,
        ids::CHECK_GLYPH_ILLEGAL_COMBO,
        ids::CHECK_GLYPH_READY_EVIDENCE,
        ids::CHECK_GLYPH_ICEMAP,
        ids::CHECK_GLYPH_OFFICIAL_CLAIM,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_INVALID_TOKEN_CHARACTERS,
        ids::CODE_FREEZE_FORBIDS_PASS,
        ids::CODE_ICE_FAIL_FORBIDS_PASS,
        ids::CODE_ZDM_MISMATCH_FORBIDS_PASS,
        ids::CODE_MISSING_EVIDENCE,
        ids::CODE_MISSING_SHOT,
        ids::CODE_MISSING_REPORT,
        ids::CODE_UNKNOWN_LOAD,
        ids::CODE_MISSING_PRESSURE,
        ids::CODE_PRESSURE_TOO_LOW,
        ids::CODE_MISSING_ICEMAP,
        ids::CODE_ICEMAP_MISMATCH,
        ids::CODE_MISSING_PROBES,
        ids::CODE_VETO_SIGNAL,
        ids::CODE_UNMET_REQUIREMENT,
    ]
}

// --- Check-level explanations ---

fn explain_token_charset() -> Explanation {
    Explanation {
        title: "Token Characters",
        description: "\
Every whitespace-separated word starting with `~` is treated as a token and must match
`~[A-Za-z0-9:+-?!_/.|]+`.

A malformed token usually means punctuation from the surrounding prose was glued onto it
(`~PASS,` or `(~P1)`), or that a bare `~` was typed. The malformed text still counts as a
token for the other checks, so `~PASS,` does NOT count as `~PASS`.",
        remediation: "\
Separate tokens from punctuation with whitespace, and only use the allowed characters.",
        examples: ExamplePair {
            before: "Ready to ship ~PASS, see ~RUN:nightly#42",
            after: "Ready to ship ~PASS see ~RUN:nightly-42",
        },
    }
}

fn explain_illegal_combo() -> Explanation {
    Explanation {
        title: "Illegal Token Combinations",
        description: "\
Some verdicts make a pass claim impossible, regardless of any other evidence:
- `~P3` (freeze pressure) forbids `~PASS`
- `~ICE-` (substrate failed) forbids `~PASS`
- `~ZDM-` (mismatch detected) forbids `~PASS`

Each combination is reported on its own; all of them are checked.",
        remediation: "\
Drop the `~PASS` claim, or resolve the blocking verdict and update the token
(`~ICE+`, `~ZDM+`, or a lower pressure once the freeze is lifted).",
        examples: ExamplePair {
            before: "~P3 ~PASS",
            after: "~P3 ~FAIL",
        },
    }
}

fn explain_ready_evidence() -> Explanation {
    Explanation {
        title: "Readiness Evidence",
        description: "\
Any `~READY:<tier>` claim must be backed by an evidence bundle:
- `~COMMIT`, `~HASH`, `~JSON`, `~ARCH`, `~MANI` (bare or valued, e.g. `~JSON:report.json`)
- at least one `~ENV:`, `~RUN:`, `~TRACE:` and `~ICEMAP:` token

Missing items are reported together in one finding, sorted.",
        remediation: "\
Add the missing evidence tokens, pointing at the artifacts that back the claim.",
        examples: ExamplePair {
            before: "~READY:core ~COMMIT",
            after: "~READY:core ~COMMIT ~HASH ~JSON:atomic.json ~ARCH ~MANI ~ENV:ci ~RUN:42 ~TRACE:t-1 ~ICEMAP:ice-v1",
        },
    }
}

fn explain_icemap() -> Explanation {
    Explanation {
        title: "ICEMAP Load-Class Policy",
        description: "\
A `~LOAD:<class>` token binds the text to a load class of the ICEMAP policy. The class
must exist in the policy, an explicit pressure token must meet the class minimum, the
class's required probes must be present, and its veto signals forbid `~PASS`.

High-sensitivity classes (`prod`, `public`, `pay`) must also name their governing policy
with `~ICEMAP:<id>`, and any `~ICEMAP:<id>` must match the policy file in use.",
        remediation: "\
Declare a known load class, an explicit `~P0`..`~P3` at or above its minimum, every
required `~PROBE:<name>`, and the matching `~ICEMAP:<id>`.",
        examples: ExamplePair {
            before: "~LOAD:prod ~PASS",
            after: "~LOAD:prod ~P2 ~ICEMAP:ice-v1 ~PROBE:latency ~PASS",
        },
    }
}

fn explain_official_claim() -> Explanation {
    Explanation {
        title: "Official Claim Requirements",
        description: "\
`~DEMO:official` is a high-stakes claim gated by the policy's `official_require` bundle.
Each configured requirement (pass claim, `~ENV:`/`~RUN:` identity, exact run, `~ICE+`,
RGCA all plus, `~ZD+`, `~ZDM+`, `~T+`, readiness tier, `~BS+`, `~TB+`) is checked on its own
and reported on its own.",
        remediation: "\
Add every token the policy's `official_require` section asks for, or drop the official
claim.",
        examples: ExamplePair {
            before: "~DEMO:official ~PASS",
            after: "~DEMO:official ~PASS ~ICE+ ~RGCA+ ~ENV:prod ~RUN:release",
        },
    }
}

// --- Code-level explanations ---

fn explain_freeze_forbids_pass() -> Explanation {
    Explanation {
        title: "Freeze Mode Forbids PASS",
        description: "\
`~P3` is the maximum pressure (freeze mode). While it is the highest pressure declared,
no pass claim is allowed.",
        remediation: "\
Remove `~PASS` or lower the pressure once the freeze has been lifted.",
        examples: ExamplePair {
            before: "~P1 ~P3 ~PASS",
            after: "~P1 ~PASS",
        },
    }
}

fn explain_ice_fail_forbids_pass() -> Explanation {
    Explanation {
        title: "Failed Substrate Forbids PASS",
        description: "\
`~ICE-` records a failed substrate verdict, which invalidates any pass claim.",
        remediation: "\
Fix the substrate and report `~ICE+`, or drop `~PASS`.",
        examples: ExamplePair {
            before: "~ICE- ~PASS",
            after: "~ICE+ ~PASS",
        },
    }
}

fn explain_zdm_mismatch_forbids_pass() -> Explanation {
    Explanation {
        title: "Detected Mismatch Forbids PASS",
        description: "\
`~ZDM-` records a detected mismatch, which invalidates any pass claim.",
        remediation: "\
Resolve the mismatch and report `~ZDM+`, or drop `~PASS`.",
        examples: ExamplePair {
            before: "~ZDM- ~PASS",
            after: "~ZDM+ ~PASS",
        },
    }
}

fn explain_missing_shot() -> Explanation {
    Explanation {
        title: "READY:ui Requires a Screenshot",
        description: "\
The `ui` and `demo` readiness tiers need a `~SHOT` token (bare or valued).",
        remediation: "\
Attach a screenshot and reference it, e.g. `~SHOT:login.png`.",
        examples: ExamplePair {
            before: "~READY:ui",
            after: "~READY:ui ~SHOT:login.png",
        },
    }
}

fn explain_missing_report() -> Explanation {
    Explanation {
        title: "READY:demo Requires a Report",
        description: "\
The `demo` readiness tier needs a `~REPORT` token (bare or valued) in addition to `~SHOT`.",
        remediation: "\
Publish the demo report and reference it, e.g. `~REPORT:demo.html`.",
        examples: ExamplePair {
            before: "~READY:demo ~SHOT",
            after: "~READY:demo ~SHOT ~REPORT:demo.html",
        },
    }
}

fn explain_unknown_load() -> Explanation {
    Explanation {
        title: "Unknown Load Class",
        description: "\
The `~LOAD:<class>` value is not defined in the policy's `loads` section. No other
load-class check runs for the text.",
        remediation: "\
Use one of the load classes defined by the policy, or add the class to the policy.",
        examples: ExamplePair {
            before: "~LOAD:prdo ~P2",
            after: "~LOAD:prod ~P2",
        },
    }
}

fn explain_missing_pressure() -> Explanation {
    Explanation {
        title: "Load Requires Explicit Pressure",
        description: "\
Declaring a load class is a fail-closed commitment: an explicit pressure token is required.",
        remediation: "\
Add one of `~P0`, `~P1`, `~P2`, `~P3`.",
        examples: ExamplePair {
            before: "~LOAD:staging",
            after: "~LOAD:staging ~P1",
        },
    }
}

fn explain_pressure_too_low() -> Explanation {
    Explanation {
        title: "Pressure Below Load Minimum",
        description: "\
The highest declared pressure is below the `min_pressure` of the load class.",
        remediation: "\
Raise the pressure to at least the minimum named in the finding.",
        examples: ExamplePair {
            before: "~LOAD:staging ~P0",
            after: "~LOAD:staging ~P1",
        },
    }
}

fn explain_missing_icemap() -> Explanation {
    Explanation {
        title: "High-Sensitivity Load Requires ICEMAP",
        description: "\
The `prod`, `public` and `pay` load classes must identify their governing policy.",
        remediation: "\
Add `~ICEMAP:<id>` with the `icemap_id` of the policy.",
        examples: ExamplePair {
            before: "~LOAD:prod ~P2",
            after: "~LOAD:prod ~P2 ~ICEMAP:ice-v1",
        },
    }
}

fn explain_icemap_mismatch() -> Explanation {
    Explanation {
        title: "ICEMAP Does Not Match Policy",
        description: "\
The text names a different policy document than the one it is being linted against.",
        remediation: "\
Lint against the named policy, or correct the `~ICEMAP:<id>` token.",
        examples: ExamplePair {
            before: "~ICEMAP:ice-v0",
            after: "~ICEMAP:ice-v1",
        },
    }
}

fn explain_missing_probes() -> Explanation {
    Explanation {
        title: "Missing Required Probes",
        description: "\
The load class lists probes in `required_probes` that have no `~PROBE:<name>` token.",
        remediation: "\
Run the probes and add a `~PROBE:<name>` token for each one.",
        examples: ExamplePair {
            before: "~LOAD:staging ~P1",
            after: "~LOAD:staging ~P1 ~PROBE:latency",
        },
    }
}

fn explain_veto_signal() -> Explanation {
    Explanation {
        title: "Veto Signal Forbids PASS",
        description: "\
A `~SIG:<name>` listed in the load class's `veto_signals` is present together with `~PASS`.
Veto signals never fail a text on their own, only in combination with a pass claim.",
        remediation: "\
Clear the signal or drop `~PASS`.",
        examples: ExamplePair {
            before: "~LOAD:prod ~P2 ~ICEMAP:ice-v1 ~SIG:oom ~PASS",
            after: "~LOAD:prod ~P2 ~ICEMAP:ice-v1 ~SIG:oom ~FAIL",
        },
    }
}
