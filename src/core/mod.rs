pub mod registry;
pub mod resolver;

pub use crate::domain::model::{OutputFormat, PlatformProfile, ResolvedEnvironment};
pub use crate::domain::ports::DependencyPathLookup;
pub use crate::utils::error::Result;
