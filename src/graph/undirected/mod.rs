//! Incidence storage for undirected graphs.
mod store;
pub use self::store::*;
