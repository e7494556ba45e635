//! Incidence storage for directed graphs, and random operation scripts for testing graphs.
mod store;
pub use self::store::*;

#[cfg(test)]
pub use self::tests::*;
