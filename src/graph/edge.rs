use crate::graph::Supplier;
use serde::{Deserialize, Serialize};

/// Weight reported for every edge of an unweighted graph.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// ID for edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Clone, Debug)]
pub struct EdgeIdFactory(usize);

/// Endpoints of a registered edge, plus its weight if the graph is weighted.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTriple<V> {
    pub source: V,
    pub target: V,
    pub weight: Option<f64>,
}

impl<V> EdgeTriple<V> {
    pub fn new(source: V, target: V, weight: Option<f64>) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The stored weight, or [DEFAULT_EDGE_WEIGHT] when none is stored.
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
    }
}

impl<V: PartialEq> EdgeTriple<V> {
    /// Tests whether this triple connects `source` and `target`.
    ///
    /// Orientation matters only if `directed`.
    pub fn connects(&self, source: &V, target: &V, directed: bool) -> bool {
        (self.source == *source && self.target == *target)
            || (!directed && self.source == *target && self.target == *source)
    }
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn starting_at(first: usize) -> Self {
        Self(first)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl Supplier<EdgeId> for EdgeIdFactory {
    fn supply(&mut self) -> EdgeId {
        self.one_more()
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}
