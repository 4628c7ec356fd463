//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_GLYPH_TOKEN_CHARSET: &str = "glyph.token_charset";
pub const CHECK_GLYPH_ILLEGAL_COMBO: &str = "glyph.illegal_combo";
pub const CHECK_GLYPH_READY_EVIDENCE: &str = "glyph.ready_evidence";
pub const CHECK_GLYPH_ICEMAP: &str = "glyph.icemap";
pub const CHECK_GLYPH_OFFICIAL_CLAIM: &str = "glyph.official_claim";

// Codes: glyph.token_charset
pub const CODE_INVALID_TOKEN_CHARACTERS: &str = "invalid_token_characters";

// Codes: glyph.illegal_combo
pub const CODE_FREEZE_FORBIDS_PASS: &str = "freeze_forbids_pass";
pub const CODE_ICE_FAIL_FORBIDS_PASS: &str = "ice_fail_forbids_pass";
pub const CODE_ZDM_MISMATCH_FORBIDS_PASS: &str = "zdm_mismatch_forbids_pass";

// Codes: glyph.ready_evidence
pub const CODE_MISSING_EVIDENCE: &str = "missing_evidence";
pub const CODE_MISSING_SHOT: &str = "missing_shot";
pub const CODE_MISSING_REPORT: &str = "missing_report";

// Codes: glyph.icemap
pub const CODE_UNKNOWN_LOAD: &str = "unknown_load";
pub const CODE_MISSING_PRESSURE: &str = "missing_pressure";
pub const CODE_PRESSURE_TOO_LOW: &str = "pressure_too_low";
pub const CODE_MISSING_ICEMAP: &str = "missing_icemap";
pub const CODE_ICEMAP_MISMATCH: &str = "icemap_mismatch";
pub const CODE_MISSING_PROBES: &str = "missing_probes";
pub const CODE_VETO_SIGNAL: &str = "veto_signal";

// Codes: glyph.official_claim
pub const CODE_UNMET_REQUIREMENT: &str = "unmet_requirement";
