use crate::domain::ports::DependencyPathLookup;
use std::collections::HashMap;
use std::path::PathBuf;

/// Fixed name to path table, independent of platform.
#[derive(Debug, Clone, Default)]
pub struct TableLookup {
    paths: HashMap<String, PathBuf>,
}

impl TableLookup {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<N, P> FromIterator<(N, P)> for TableLookup
where
    N: Into<String>,
    P: Into<PathBuf>,
{
    fn from_iter<T: IntoIterator<Item = (N, P)>>(iter: T) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|(name, path)| (name.into(), path.into()))
                .collect(),
        }
    }
}

impl DependencyPathLookup for TableLookup {
    fn lookup(&self, name: &str, _platform: &str) -> Option<PathBuf> {
        self.paths.get(name).cloned()
    }
}
