use std::path::PathBuf;

/// External package database: maps a dependency name on a given platform to
/// the filesystem path of its libraries. `None` means the name is unknown.
pub trait DependencyPathLookup {
    fn lookup(&self, name: &str, platform: &str) -> Option<PathBuf>;
}

impl<F> DependencyPathLookup for F
where
    F: Fn(&str, &str) -> Option<PathBuf>,
{
    fn lookup(&self, name: &str, platform: &str) -> Option<PathBuf> {
        self(name, platform)
    }
}
