use crate::adapters::{ChainLookup, StoreLookup};
use crate::config::ProfileFile;
use crate::core::registry::ProfileRegistry;
use crate::core::resolver::EnvironmentResolver;
use crate::core::{OutputFormat, ResolvedEnvironment};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

/// Registry plus assembled lookup chain for one invocation.
pub struct Session {
    registry: ProfileRegistry,
    resolver: EnvironmentResolver<ChainLookup>,
}

impl Session {
    pub fn new(registry: ProfileRegistry, lookup: ChainLookup) -> Self {
        Self {
            registry,
            resolver: EnvironmentResolver::new(lookup),
        }
    }

    /// Built-in profiles, overlaid by `config_path` when given.
    ///
    /// Lookup order: the file's `[lookup.paths]` table, then the file's store
    /// roots, then `store_roots`.
    pub fn load(config_path: Option<&Path>, store_roots: &[PathBuf]) -> Result<Self> {
        let mut registry = ProfileRegistry::builtin();
        let mut lookup = ChainLookup::new();
        let mut roots = Vec::new();

        if let Some(path) = config_path {
            tracing::info!("📁 Loading profiles from: {}", path.display());
            let file = ProfileFile::from_file(path)?;
            file.validate()?;

            for profile in file.profiles() {
                registry.register(profile)?;
            }

            let table = file.table_lookup();
            if !table.is_empty() {
                lookup.push(table);
            }
            roots.extend(file.store_roots().iter().cloned());
        }

        roots.extend(store_roots.iter().cloned());
        if !roots.is_empty() {
            tracing::debug!("Store roots: {:?}", roots);
            lookup.push(StoreLookup::new(roots));
        }

        if lookup.is_empty() {
            tracing::warn!("No lookup sources configured; only empty profiles can resolve");
        }

        Ok(Self::new(registry, lookup))
    }

    pub fn platforms(&self) -> Vec<&str> {
        self.registry.identifiers().collect()
    }

    pub fn resolve(&self, platform: &str) -> Result<ResolvedEnvironment> {
        let profile = self.registry.get(platform)?;
        self.resolver.resolve(profile)
    }

    pub fn render(&self, platform: &str, format: OutputFormat) -> Result<String> {
        self.resolve(platform)?.render(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::PATH_LIST_SEPARATOR;
    use crate::utils::error::ResolveError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_with_store_roots() {
        let store = TempDir::new().unwrap();
        fs::create_dir_all(store.path().join("pthreads/lib")).unwrap();

        let session = Session::load(None, &[store.path().to_path_buf()]).unwrap();
        let env = session.resolve("cross-windows").unwrap();

        let expected = store.path().join("pthreads/lib").to_string_lossy().into_owned();
        assert_eq!(env.get("LIBRARY_PATH"), Some(expected.as_str()));
        assert_eq!(env.get("CARGO_BUILD_TARGET"), Some("x86_64-pc-windows-gnu"));
    }

    #[test]
    fn test_config_file_overrides_builtin_and_table_precedes_store() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("store");
        fs::create_dir_all(store.join("libGL")).unwrap();
        fs::create_dir_all(store.join("libX11")).unwrap();

        let config_path = dir.path().join("profiles.toml");
        fs::write(
            &config_path,
            format!(
                "[profiles.native]\ndependencies = [\"libGL\", \"libX11\"]\n\n[lookup]\nroots = [{:?}]\n\n[lookup.paths]\nlibGL = \"/pinned/libGL\"\n",
                store.to_string_lossy()
            ),
        )
        .unwrap();

        let session = Session::load(Some(config_path.as_path()), &[]).unwrap();
        let env = session.resolve("native").unwrap();

        let expected = format!(
            "/pinned/libGL{}{}",
            PATH_LIST_SEPARATOR,
            store.join("libX11").to_string_lossy()
        );
        assert_eq!(env.get("LD_LIBRARY_PATH"), Some(expected.as_str()));
    }

    #[test]
    fn test_unknown_platform_and_missing_dependency() {
        let session = Session::load(None, &[]).unwrap();

        assert_eq!(session.platforms(), vec!["cross-windows", "native"]);
        assert!(matches!(
            session.resolve("bsd"),
            Err(ResolveError::UnknownPlatform { .. })
        ));
        match session.resolve("native") {
            Err(ResolveError::DependencyNotFound { name, .. }) => assert_eq!(name, "libGL"),
            other => panic!("expected DependencyNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let result = Session::load(Some(missing.as_path()), &[]);
        assert!(matches!(result, Err(ResolveError::IoError(_))));
    }
}
