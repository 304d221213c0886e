use crate::core::{DependencyPathLookup, PlatformProfile, ResolvedEnvironment};
use crate::utils::error::{ResolveError, Result};

/// Path-list separator of the host the environment is handed to.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

pub struct EnvironmentResolver<L: DependencyPathLookup> {
    lookup: L,
    separator: char,
}

impl<L: DependencyPathLookup> EnvironmentResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            separator: PATH_LIST_SEPARATOR,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Resolve every dependency of `profile` and build its environment.
    ///
    /// Fails on the first name the lookup cannot resolve, or whose path holds
    /// the separator or a line break; no partial environment is returned.
    /// `extra_env` entries are applied last and therefore win over the path
    /// variable on a key collision.
    pub fn resolve(&self, profile: &PlatformProfile) -> Result<ResolvedEnvironment> {
        tracing::debug!(
            "Resolving {} dependencies for platform '{}'",
            profile.dependency_names.len(),
            profile.identifier
        );

        let mut resolved = Vec::with_capacity(profile.dependency_names.len());
        for name in &profile.dependency_names {
            let path = self
                .lookup
                .lookup(name, &profile.identifier)
                .ok_or_else(|| ResolveError::DependencyNotFound {
                    name: name.clone(),
                    platform: profile.identifier.clone(),
                })?;

            tracing::debug!("  {} -> {}", name, path.display());
            let path = path.to_string_lossy().into_owned();

            // An embedded separator would split into extra entries on read-back.
            if path.contains(self.separator) || path.contains(['\n', '\r', '\0']) {
                return Err(ResolveError::InvalidDependencyPath {
                    name: name.clone(),
                    reason: format!("contains '{}' or a line break", self.separator),
                    path,
                });
            }
            resolved.push(path);
        }

        let separator = self.separator.to_string();
        let mut environment = ResolvedEnvironment::default();
        environment
            .variables
            .insert(profile.path_variable.clone(), resolved.join(separator.as_str()));

        for (key, value) in &profile.extra_env {
            if key == &profile.path_variable {
                tracing::debug!("Profile env overrides {}", key);
            }
            environment.variables.insert(key.clone(), value.clone());
        }

        tracing::info!(
            "✅ Resolved platform '{}' ({} variables)",
            profile.identifier,
            environment.len()
        );

        Ok(environment)
    }
}

/// One-shot form of [`EnvironmentResolver::resolve`] using the host separator.
pub fn resolve<L: DependencyPathLookup>(
    profile: &PlatformProfile,
    lookup: L,
) -> Result<ResolvedEnvironment> {
    EnvironmentResolver::new(lookup).resolve(profile)
}
