use crate::graph::{Element, DEFAULT_EDGE_WEIGHT};
use petgraph::Direction;

/// What a foreign graph stores on its edges.
pub trait EdgeValue: Copy {
    /// Whether values carry a weight.
    const WEIGHTED: bool;

    /// The value of a freshly added edge.
    fn default_value() -> Self;

    fn weight(&self) -> f64;

    fn from_weight(weight: f64) -> Self;
}

impl EdgeValue for () {
    const WEIGHTED: bool = false;

    fn default_value() -> Self {}

    fn weight(&self) -> f64 {
        DEFAULT_EDGE_WEIGHT
    }

    fn from_weight(_: f64) -> Self {}
}

impl EdgeValue for f64 {
    const WEIGHTED: bool = true;

    fn default_value() -> Self {
        DEFAULT_EDGE_WEIGHT
    }

    fn weight(&self) -> f64 {
        *self
    }

    fn from_weight(weight: f64) -> Self {
        weight
    }
}

/// The primitives a foreign graph must offer to be wrapped by a
/// [ForeignGraphAdapter](crate::foreign::ForeignGraphAdapter).
///
/// Foreign graphs know nodes and which nodes are connected,
/// but have no edge identity of their own.
/// At most one edge connects a pair of nodes.
pub trait ForeignGraph {
    type Node: Element + Copy;

    fn is_directed(&self) -> bool;
    fn is_weighted(&self) -> bool;

    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    fn nodes(&self) -> Box<dyn Iterator<Item = Self::Node> + '_>;
    /// Every edge once, oriented as it is stored.
    fn edges(&self) -> Box<dyn Iterator<Item = (Self::Node, Self::Node)> + '_>;
    /// Nodes adjacent to `n` in direction `dir`.
    /// Undirected graphs ignore `dir`.
    fn neighbors(&self, n: Self::Node, dir: Direction) -> Box<dyn Iterator<Item = Self::Node> + '_>;

    fn contains_node(&self, n: Self::Node) -> bool;
    fn contains_edge(&self, a: Self::Node, b: Self::Node) -> bool;

    /// Returns `false` if `n` is already present.
    fn add_node(&mut self, n: Self::Node) -> bool;
    /// Removes `n` and its edges. Returns `false` if it is absent.
    fn remove_node(&mut self, n: Self::Node) -> bool;
    /// Returns `false`, changing nothing, if `a` and `b` are already connected.
    fn add_edge(&mut self, a: Self::Node, b: Self::Node) -> bool;
    fn remove_edge(&mut self, a: Self::Node, b: Self::Node) -> bool;

    fn edge_weight(&self, a: Self::Node, b: Self::Node) -> Option<f64>;
    /// Returns `false` if `a` and `b` are not connected.
    fn set_edge_weight(&mut self, a: Self::Node, b: Self::Node, weight: f64) -> bool;
}
