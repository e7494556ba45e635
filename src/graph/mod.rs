//! The graph engine, its stores, and views over it.
//!
//! # One engine, many kinds of graphs
//!
//! Whether a graph is directed, admits multiple edges or self-loops,
//! carries weights, or can be modified at all is a [GraphType].
//! It is validated once when built and consulted on every mutation of a [Graph].
//! So there is no type per combination of capabilities,
//! and a rule like "no self-loops" is enforced in exactly one place.
//!
//! # Edges are tokens
//!
//! An edge is an opaque, hashable token.
//! Which vertices it connects is recorded in the graph's [EdgeTable],
//! never in the token, so tokens can be plain integers or strings.
//! An [EdgeRegistry] keeps a token on the same endpoints in every graph that holds it.
//! Graphs join their thread's default registry unless built otherwise,
//! and an exclusive registry lets only one graph hold a token at a time.
//!
//! # Storage
//!
//! Per-vertex incidences live in an [AdjacencyStore],
//! directed or undirected as picked by [Specifics].
//! A [StorageStrategy] chooses the concrete stores:
//! [DefaultStorage] works for any vertex type,
//! [IntegerStorage] is faster for integer-like vertices and edges.
//!
//! # Views
//!
//! [EdgeReversedGraph] turns every edge of a borrowed graph around.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod element;
pub use self::element::*;
mod graph_type;
pub use self::graph_type::*;
mod edge_table;
pub use self::edge_table::*;
mod registry;
pub use self::registry::*;
mod specifics;
pub use self::specifics::*;
mod storage;
pub use self::storage::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod engine;
pub use self::engine::*;
mod builder;
pub use self::builder::*;
mod persist;
mod reversed;
pub use self::reversed::*;

pub mod directed;
pub mod undirected;
