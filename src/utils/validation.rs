use crate::utils::error::{ResolveError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(identifier: &str, reason: String) -> ResolveError {
    ResolveError::InvalidProfile {
        identifier: identifier.to_string(),
        reason,
    }
}

pub fn validate_non_empty_string(identifier: &str, field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            identifier,
            format!("{} cannot be empty or whitespace-only", field_name),
        ));
    }
    Ok(())
}

/// Environment variable names must be portable shell identifiers
/// (`[A-Za-z_][A-Za-z0-9_]*`); they are written unquoted into `export` lines.
pub fn validate_variable_name(identifier: &str, field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(identifier, field_name, name)?;

    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").map_err(|e| ResolveError::ConfigError {
        message: format!("invalid variable name pattern: {}", e),
    })?;

    if !re.is_match(name) {
        return Err(invalid(
            identifier,
            format!("{} '{}' is not a valid environment variable name", field_name, name),
        ));
    }
    Ok(())
}

/// Values must stay on one line so `KEY=VALUE` output can be read back.
pub fn validate_variable_value(identifier: &str, key: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r', '\0']) {
        return Err(invalid(
            identifier,
            format!("value of '{}' contains a line break or null byte", key),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();

    if text.is_empty() {
        return Err(ResolveError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if text.contains('\0') {
        return Err(ResolveError::ConfigError {
            message: format!("{}: path '{}' contains null bytes", field_name, text),
        });
    }

    Ok(())
}

pub fn validate_dependency_names(identifier: &str, names: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(names.len());

    for name in names {
        validate_non_empty_string(identifier, "dependency name", name)?;

        if name.trim() != name {
            return Err(invalid(
                identifier,
                format!("dependency name '{}' has surrounding whitespace", name),
            ));
        }

        if !seen.insert(name.as_str()) {
            return Err(invalid(
                identifier,
                format!("dependency '{}' is listed more than once", name),
            ));
        }
    }

    Ok(())
}
