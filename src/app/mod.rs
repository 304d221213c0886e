pub mod session;

pub use session::Session;

#[cfg(feature = "cli")]
use crate::config::CliConfig;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};

/// Runs one CLI invocation and returns what should be written to stdout.
#[cfg(feature = "cli")]
pub fn run(config: &CliConfig) -> Result<String> {
    config.validate()?;

    let session = Session::load(config.config.as_deref(), &config.store)?;

    if config.list {
        return Ok(session
            .platforms()
            .iter()
            .map(|id| format!("{}\n", id))
            .collect());
    }

    // Present unless --list, enforced by clap.
    let platform = config.platform.as_deref().unwrap_or_default();
    session.render(platform, config.format)
}
