use crate::adapters::TableLookup;
use crate::core::PlatformProfile;
use crate::domain::model::DEFAULT_PATH_VARIABLE;
use crate::utils::error::{ResolveError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Profile definitions and lookup sources loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileSection>,
    #[serde(default)]
    pub lookup: LookupSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSection {
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub path_variable: Option<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupSection {
    #[serde(default)]
    pub roots: Vec<PathBuf>,
    #[serde(default)]
    pub paths: BTreeMap<String, PathBuf>,
}

impl ProfileFile {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    ///
    /// `${VAR}` references are expanded inside string values after parsing,
    /// so quotes or backslashes in the environment cannot change the document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut table: toml::Table = content.parse()?;

        // 處理環境變數替換
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ResolveError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;
        for (_, value) in table.iter_mut() {
            Self::substitute_env_vars(&re, value);
        }

        let file: ProfileFile = toml::Value::Table(table).try_into()?;
        Ok(file)
    }

    /// 替換環境變數 (例如 ${STORE_ROOT})，未設定的變數保留原樣
    fn substitute_env_vars(re: &Regex, value: &mut toml::Value) {
        match value {
            toml::Value::String(text) => {
                let replaced = re.replace_all(text.as_str(), |caps: &regex::Captures| {
                    let var_name = &caps[1];
                    std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
                });
                *text = replaced.into_owned();
            }
            toml::Value::Array(items) => {
                for item in items {
                    Self::substitute_env_vars(re, item);
                }
            }
            toml::Value::Table(table) => {
                for (_, item) in table.iter_mut() {
                    Self::substitute_env_vars(re, item);
                }
            }
            _ => {}
        }
    }

    pub fn profiles(&self) -> Vec<PlatformProfile> {
        self.profiles
            .iter()
            .map(|(identifier, section)| PlatformProfile {
                identifier: identifier.clone(),
                dependency_names: section.dependencies.clone(),
                extra_env: section.env.clone(),
                path_variable: section
                    .path_variable
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PATH_VARIABLE.to_string()),
            })
            .collect()
    }

    pub fn table_lookup(&self) -> TableLookup {
        self.lookup
            .paths
            .iter()
            .map(|(name, path)| (name.clone(), path.clone()))
            .collect()
    }

    pub fn store_roots(&self) -> &[PathBuf] {
        &self.lookup.roots
    }
}

impl Validate for ProfileFile {
    fn validate(&self) -> Result<()> {
        for profile in self.profiles() {
            profile.validate()?;
        }

        for root in &self.lookup.roots {
            crate::utils::validation::validate_path("lookup.roots", root)?;
        }
        for path in self.lookup.paths.values() {
            crate::utils::validation::validate_path("lookup.paths", path)?;
        }

        Ok(())
    }
}
