use crate::core::OutputFormat;
use crate::utils::error::{ResolveError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "resolve-env")]
#[command(about = "Resolve a platform's dependency list into a shell environment")]
pub struct CliConfig {
    /// Platform profile to resolve (e.g. native, cross-windows)
    #[arg(long, required_unless_present = "list")]
    pub platform: Option<String>,

    /// TOML file with extra profiles and lookup sources
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Package store roots searched for dependencies, in order
    #[arg(long, env = "RESOLVE_ENV_STORE", value_delimiter = ',')]
    pub store: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Env)]
    pub format: OutputFormat,

    /// List known platform identifiers and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(platform) = &self.platform {
            if platform.trim().is_empty() {
                return Err(ResolveError::ConfigError {
                    message: "--platform cannot be empty".to_string(),
                });
            }
        }

        if let Some(config) = &self.config {
            validate_path("--config", config)?;
        }
        for root in &self.store {
            validate_path("--store", root)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::try_parse_from([
            "resolve-env",
            "--platform",
            "native",
            "--store",
            "/a,/b",
            "--format",
            "shell",
        ])
        .unwrap();

        assert_eq!(config.platform.as_deref(), Some("native"));
        assert_eq!(config.store, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(config.format, OutputFormat::Shell);
        assert!(!config.list);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_platform_required_unless_listing() {
        assert!(CliConfig::try_parse_from(["resolve-env"]).is_err());

        let config = CliConfig::try_parse_from(["resolve-env", "--list"]).unwrap();
        assert!(config.list);
        assert_eq!(config.platform, None);
        assert_eq!(config.format, OutputFormat::Env);
    }

    #[test]
    fn test_empty_platform_is_invalid() {
        let config = CliConfig::try_parse_from(["resolve-env", "--platform", " "]).unwrap();
        assert!(config.validate().is_err());
    }
}
