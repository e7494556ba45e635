//! Foreign graphs behind the graph traits of this crate.
//!
//! A foreign graph, e.g., a `petgraph` [GraphMap](petgraph::graphmap::GraphMap),
//! knows nodes and whether two nodes are connected, but has no edge objects.
//! [ForeignGraphAdapter] names each edge by its endpoints, an [EndpointPair],
//! and picks a canonical orientation for undirected edges with an [EdgeOrderingPolicy].
mod traits;
pub use self::traits::*;
mod ordering;
pub use self::ordering::*;
mod graphmap;
mod adapter;
pub use self::adapter::*;
