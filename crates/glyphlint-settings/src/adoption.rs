/// Environment variable that turns on adoption enforcement, like `--require`.
pub const REQUIRE_ENV_VAR: &str = "GLYPHLINT_REQUIRE";

/// `1`, `true` or `yes`, trimmed and case-insensitive.
pub fn env_flag_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        )
    })
}

/// The command-line flag OR the environment value.
pub fn require_adoption(flag: bool, env_value: Option<&str>) -> bool {
    flag || env_flag_enabled(env_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_values() {
        for v in ["1", "true", "TRUE", " yes ", "Yes\n"] {
            assert!(env_flag_enabled(Some(v)), "{v:?}");
        }
    }

    #[test]
    fn falsy_values() {
        for v in ["", "0", "false", "no", "on", "y"] {
            assert!(!env_flag_enabled(Some(v)), "{v:?}");
        }
        assert!(!env_flag_enabled(None));
    }

    #[test]
    fn flag_or_env() {
        assert!(require_adoption(true, None));
        assert!(require_adoption(false, Some("1")));
        assert!(!require_adoption(false, Some("0")));
    }
}
