use crate::domain::ports::DependencyPathLookup;
use std::path::{Path, PathBuf};

/// Searches package-store directories laid out as `<root>/<platform>/<name>`
/// or `<root>/<name>`. Roots are tried in order and the first existing
/// directory wins; a `lib` subdirectory is preferred when present.
#[derive(Debug, Clone, Default)]
pub struct StoreLookup {
    roots: Vec<PathBuf>,
}

impl StoreLookup {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    fn probe(candidate: &Path) -> Option<PathBuf> {
        if !candidate.is_dir() {
            return None;
        }

        let lib = candidate.join("lib");
        if lib.is_dir() {
            Some(lib)
        } else {
            Some(candidate.to_path_buf())
        }
    }
}

impl DependencyPathLookup for StoreLookup {
    fn lookup(&self, name: &str, platform: &str) -> Option<PathBuf> {
        // Names are single path components; anything else could escape the root.
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            tracing::debug!("Rejecting dependency name '{}' for store lookup", name);
            return None;
        }

        for root in &self.roots {
            let candidates = [root.join(platform).join(name), root.join(name)];
            for candidate in &candidates {
                if let Some(found) = Self::probe(candidate) {
                    tracing::debug!("Found '{}' at {}", name, found.display());
                    return Some(found);
                }
            }
        }

        tracing::debug!(
            "'{}' not found in {} store root(s)",
            name,
            self.roots.len()
        );
        None
    }
}
