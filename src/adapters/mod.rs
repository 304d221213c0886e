// Adapters layer: concrete DependencyPathLookup implementations.

pub mod chain;
pub mod store;
pub mod table;

pub use chain::ChainLookup;
pub use store::StoreLookup;
pub use table::TableLookup;
