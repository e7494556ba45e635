use crate::graph::*;
use ahash::RandomState;
use rustc_hash::FxBuildHasher;

/// Chooses the concrete stores of a [Graph] when it is built.
///
/// The engine only talks to [AdjacencyStore] and [EdgeTable],
/// so a strategy can swap representations without touching any validation logic.
pub trait StorageStrategy<V, E> {
    type Adjacency: AdjacencyStore<V, E>;
    type Edges: EdgeTable<V, E>;

    /// Creates empty stores fit for `graph_type`.
    fn create(graph_type: &GraphType) -> (Self::Adjacency, Self::Edges);
}

/// Insertion-ordered hash maps with `ahash`, for any vertex and edge types.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStorage;

impl<V, E> StorageStrategy<V, E> for DefaultStorage
where
    V: Element,
    E: Element,
{
    type Adjacency = Specifics<V, E, RandomState>;
    type Edges = IndexedEdgeTable<V, E, RandomState>;

    fn create(graph_type: &GraphType) -> (Self::Adjacency, Self::Edges) {
        (
            Specifics::new(graph_type),
            IndexedEdgeTable::new(graph_type.is_weighted()),
        )
    }
}

/// Insertion-ordered hash maps with FxHash, for integer-like vertices and edges.
///
/// FxHash hashes a machine word in a couple of instructions
/// but has no protection against adversarial keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerStorage;

impl<V, E> StorageStrategy<V, E> for IntegerStorage
where
    V: IntegerKey,
    E: IntegerKey,
{
    type Adjacency = Specifics<V, E, FxBuildHasher>;
    type Edges = IndexedEdgeTable<V, E, FxBuildHasher>;

    fn create(graph_type: &GraphType) -> (Self::Adjacency, Self::Edges) {
        (
            Specifics::new(graph_type),
            IndexedEdgeTable::new(graph_type.is_weighted()),
        )
    }
}
