//! Environment variable expansion for the site title.
//!
//! Only braced references are expanded:
//! - `${VAR}` - value of VAR, error if unset
//! - `${VAR:-default}` - value of VAR if set, otherwise `default`

use crate::ConfigError;

/// Expand `${...}` references in `value`.
///
/// `field` names the config key in error messages. Text outside braced
/// references is copied verbatim, so a bare `$NAME` is never interpreted.
/// An unterminated `${` is kept as literal text.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand a single `${VAR}` or `${VAR:-default}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar {
            name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

/// Lookup failure for a referenced variable.
struct UnsetVar {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SITENAV_TEST_PROJECT", "Tact");
        }
        let result = expand_env("${SITENAV_TEST_PROJECT}-By-Building", "title").unwrap();
        assert_eq!(result, "Tact-By-Building");
        unsafe {
            std::env::remove_var("SITENAV_TEST_PROJECT");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_TEST_UNSET_TITLE");
        }
        let result = expand_env("${SITENAV_TEST_UNSET_TITLE:-Docs}", "title").unwrap();
        assert_eq!(result, "Docs");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_TEST_MISSING");
        }
        let err = expand_env("${SITENAV_TEST_MISSING}", "title").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("SITENAV_TEST_MISSING"), "got: {msg}");
        assert!(msg.contains("title"), "got: {msg}");
    }

    #[test]
    fn test_bare_dollar_kept_next_to_braced_reference() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_TEST_UNSET_SITE");
            std::env::remove_var("SITENAV_TEST_CURRENCY");
        }
        let result = expand_env(
            "${SITENAV_TEST_UNSET_SITE:-Docs} in $SITENAV_TEST_CURRENCY",
            "title",
        )
        .unwrap();
        assert_eq!(result, "Docs in $SITENAV_TEST_CURRENCY");
    }

    #[test]
    fn test_multiple_references_and_unterminated_brace() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SITENAV_TEST_ORG", "TON");
        }
        let result = expand_env("${SITENAV_TEST_ORG}/${SITENAV_TEST_ORG:-x} ${open", "title");
        assert_eq!(result.unwrap(), "TON/TON ${open");
        unsafe {
            std::env::remove_var("SITENAV_TEST_ORG");
        }
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("Docs", "title").unwrap(), "Docs");
        assert_eq!(expand_env("Costs in $USD", "title").unwrap(), "Costs in $USD");
    }
}
