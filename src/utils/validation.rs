use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(AppError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

/// A label as it would appear in a profile list: one token, no separators.
pub fn validate_profile_label(field_name: &str, label: &str) -> Result<()> {
    let trimmed = label.trim();
    let bad = trimmed.is_empty()
        || trimmed.chars().any(char::is_whitespace)
        || trimmed.contains(',')
        || trimmed.starts_with('!');

    if bad {
        tracing::debug!(field = field_name, label, "rejected profile label");
        return Err(AppError::InvalidProfileExpression {
            expression: label.to_string(),
        });
    }
    Ok(())
}

pub fn validate_profile_list(field_name: &str, list: &str) -> Result<()> {
    list.split(',')
        .filter(|label| !label.trim().is_empty())
        .try_for_each(|label| validate_profile_label(field_name, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "./app.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "a\0b").is_err());
    }

    #[test]
    fn test_validate_profile_label() {
        assert!(validate_profile_label("profiles", "test").is_ok());
        assert!(validate_profile_label("profiles", " test ").is_ok());
        assert!(validate_profile_label("profiles", "").is_err());
        assert!(validate_profile_label("profiles", "my test").is_err());
        assert!(validate_profile_label("profiles", "a,b").is_err());
        assert!(validate_profile_label("profiles", "!prod").is_err());
    }

    #[test]
    fn test_validate_profile_list() {
        assert!(validate_profile_list("profiles", "test, dev,,").is_ok());
        assert!(validate_profile_list("profiles", "").is_ok());
        assert!(validate_profile_list("profiles", "test,bad label").is_err());
    }
}
