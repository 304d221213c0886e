pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ChainLookup, StoreLookup, TableLookup};
pub use app::Session;
pub use config::ProfileFile;
pub use crate::core::registry::ProfileRegistry;
pub use crate::core::resolver::{resolve, EnvironmentResolver, PATH_LIST_SEPARATOR};
pub use domain::model::{OutputFormat, PlatformProfile, ResolvedEnvironment};
pub use domain::ports::DependencyPathLookup;
pub use utils::error::{ResolveError, Result};
