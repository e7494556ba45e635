use crate::graph::Supplier;
use serde::{Deserialize, Serialize};

/// A lightweight vertex ID, essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely.
///
/// It is a [Supplier], so graphs can be built with it to generate vertices.
#[derive(Clone, Debug, Default)]
pub struct VertexIdFactory(usize);

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    /// Starts generating from `first`, e.g., past the IDs already in a deserialized graph.
    pub fn starting_at(first: usize) -> Self {
        Self(first)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl Supplier<VertexId> for VertexIdFactory {
    fn supply(&mut self) -> VertexId {
        self.one_more()
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}
