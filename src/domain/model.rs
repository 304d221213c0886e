use crate::utils::error::Result;
use crate::utils::validation::{
    validate_dependency_names, validate_non_empty_string, validate_variable_name,
    validate_variable_value, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_PATH_VARIABLE: &str = "LD_LIBRARY_PATH";

/// Named, ordered set of dependencies plus extra environment entries for one
/// target platform. Order matters: earlier entries take precedence on the
/// resulting search path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    pub identifier: String,
    pub dependency_names: Vec<String>,
    pub extra_env: BTreeMap<String, String>,
    pub path_variable: String,
}

impl PlatformProfile {
    pub fn new<I, S>(identifier: impl Into<String>, dependency_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            dependency_names: dependency_names.into_iter().map(Into::into).collect(),
            extra_env: BTreeMap::new(),
            path_variable: DEFAULT_PATH_VARIABLE.to_string(),
        }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_env.insert(key.into(), value.into());
        self
    }

    pub fn with_path_variable(mut self, path_variable: impl Into<String>) -> Self {
        self.path_variable = path_variable.into();
        self
    }
}

impl Validate for PlatformProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(&self.identifier, "identifier", &self.identifier)?;
        validate_variable_name(&self.identifier, "path_variable", &self.path_variable)?;
        validate_dependency_names(&self.identifier, &self.dependency_names)?;
        for (key, value) in &self.extra_env {
            validate_variable_name(&self.identifier, "env key", key)?;
            validate_variable_value(&self.identifier, key, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEnvironment {
    pub variables: BTreeMap<String, String>,
}

impl ResolvedEnvironment {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Env => self.to_string(),
            OutputFormat::Shell => self
                .variables
                .iter()
                .map(|(key, value)| format!("export {}={}\n", key, shell_quote(value)))
                .collect(),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&self.variables)?;
                json.push('\n');
                json
            }
        };
        Ok(rendered)
    }
}

/// `KEY=VALUE` lines, sorted by key.
impl fmt::Display for ResolvedEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.variables {
            writeln!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Env,
    Shell,
    Json,
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
