//! A typed graph storage engine.
//!
//! One engine, [graph::Graph], serves directed, undirected, weighted,
//! multi-edge and self-loop graphs.
//! What a graph permits is fixed once by its [graph::GraphType] and consulted
//! on every mutation.
//! How vertices and edges are stored is a [graph::StorageStrategy] picked when the graph is built.
//!
//! On top of the engine there are
//! [graph::EdgeReversedGraph], a borrowing view with every edge turned around,
//! and [foreign::ForeignGraphAdapter], which exposes a foreign graph
//! (e.g., a `petgraph` `GraphMap`) through the same traits.
pub mod error;
pub mod foreign;
pub mod graph;

pub use self::error::{GraphError, GraphResult};
