//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Expand an optional string field in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CARD_TEST_VAR_SIMPLE", "hello");
        }
        let result = expand_env("${CARD_TEST_VAR_SIMPLE}", "branding.name").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("CARD_TEST_VAR_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("CARD_UNSET_VAR_TEST");
        }
        let result = expand_env("${CARD_UNSET_VAR_TEST:-fallback.dev}", "branding.domain").unwrap();
        assert_eq!(result, "fallback.dev");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("CARD_MISSING_VAR_TEST");
        }
        let err = expand_env("${CARD_MISSING_VAR_TEST}", "emoji.base_url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("CARD_MISSING_VAR_TEST"));
        assert!(err.to_string().contains("emoji.base_url"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CARD_CDN_HOST", "cdn.example.com");
        }
        let result = expand_env("https://${CARD_CDN_HOST}/svg", "emoji.base_url").unwrap();
        assert_eq!(result, "https://cdn.example.com/svg");
        unsafe {
            std::env::remove_var("CARD_CDN_HOST");
        }
    }

    #[test]
    fn test_expand_opt_none_is_noop() {
        let mut value = None;
        expand_opt(&mut value, "branding.avatar_url").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("$VAR", "branding.name").unwrap();
        assert_eq!(result, "$VAR");
    }
}
