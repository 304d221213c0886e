use crate::domain::ports::DependencyPathLookup;
use std::path::PathBuf;

/// Tries each lookup in order; the first hit wins.
#[derive(Default)]
pub struct ChainLookup {
    lookups: Vec<Box<dyn DependencyPathLookup>>,
}

impl ChainLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, lookup: impl DependencyPathLookup + 'static) {
        self.lookups.push(Box::new(lookup));
    }

    pub fn with(mut self, lookup: impl DependencyPathLookup + 'static) -> Self {
        self.push(lookup);
        self
    }

    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }
}

impl DependencyPathLookup for ChainLookup {
    fn lookup(&self, name: &str, platform: &str) -> Option<PathBuf> {
        self.lookups
            .iter()
            .find_map(|lookup| lookup.lookup(name, platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TableLookup;

    #[test]
    fn test_first_hit_wins() {
        let chain = ChainLookup::new()
            .with([("libGL", "/first/libGL")].into_iter().collect::<TableLookup>())
            .with(
                [("libGL", "/second/libGL"), ("libX11", "/second/libX11")]
                    .into_iter()
                    .collect::<TableLookup>(),
            );

        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.lookup("libGL", "native"),
            Some(PathBuf::from("/first/libGL"))
        );
        assert_eq!(
            chain.lookup("libX11", "native"),
            Some(PathBuf::from("/second/libX11"))
        );
        assert_eq!(chain.lookup("wayland", "native"), None);
    }

    #[test]
    fn test_empty_chain_resolves_nothing() {
        let chain = ChainLookup::new();
        assert!(chain.is_empty());
        assert_eq!(chain.lookup("libGL", "native"), None);
    }
}
