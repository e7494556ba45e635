use crate::graph::*;
use std::hash::BuildHasher;

/// Which incidences of a vertex to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Edges whose target is the vertex.
    Incoming,
    /// Edges whose source is the vertex.
    Outgoing,
    /// All edges incident to the vertex.
    Touching,
}

/// Per-vertex incidence storage.
///
/// Stores know vertices and, for each vertex, the tokens of the edges incident to it.
/// Endpoints of a token are not stored here but in an [EdgeTable],
/// which is passed in when a query needs them.
///
/// Degrees are sizes of the stored sets, never recounted.
pub trait AdjacencyStore<V, E> {
    /// Adds a vertex without incidences. Returns `false` if it is already present.
    fn add_vertex(&mut self, v: V) -> bool;

    /// Removes a vertex. Its incidences must have been removed already.
    fn remove_vertex(&mut self, v: &V) -> bool;

    fn contains_vertex(&self, v: &V) -> bool;

    fn vertex_count(&self) -> usize;

    /// Vertices in insertion order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Records that `edge` touches `v` in `role`.
    ///
    /// Stores without incoming/outgoing distinction ignore `role`.
    /// For a self-loop it is called once per endpoint.
    fn add_incidence(&mut self, v: &V, edge: E, role: Role);

    /// Undoes one [AdjacencyStore::add_incidence].
    fn remove_incidence(&mut self, v: &V, edge: &E, role: Role);

    fn degree(&self, v: &V) -> Option<usize>;

    fn in_degree(&self, v: &V) -> Option<usize>;

    fn out_degree(&self, v: &V) -> Option<usize>;

    /// A snapshot of tokens incident to `v` in `role`.
    fn incident(&self, v: &V, role: Role) -> Option<Snapshot<E>>;

    /// A snapshot of tokens connecting `source` to `target`,
    /// or between them if the store is undirected.
    fn edges_between<T>(&self, source: &V, target: &V, table: &T) -> Snapshot<E>
    where
        T: EdgeTable<V, E>;
}

/// Picks the directed or undirected store from a [GraphType].
///
/// This is what the engine holds, so the engine itself never branches on directedness.
#[derive(Clone)]
pub enum Specifics<V, E, H> {
    Directed(directed::DirectedStore<V, E, H>),
    Undirected(undirected::UndirectedStore<V, E, H>),
}

impl<V, E, H> Specifics<V, E, H>
where
    H: BuildHasher + Default,
{
    pub fn new(graph_type: &GraphType) -> Self {
        if graph_type.is_directed() {
            Specifics::Directed(directed::DirectedStore::new())
        } else {
            Specifics::Undirected(undirected::UndirectedStore::new())
        }
    }
}

impl<V, E, H> AdjacencyStore<V, E> for Specifics<V, E, H>
where
    V: Element,
    E: Element,
    H: BuildHasher + Default,
{
    fn add_vertex(&mut self, v: V) -> bool {
        match self {
            Specifics::Directed(s) => s.add_vertex(v),
            Specifics::Undirected(s) => s.add_vertex(v),
        }
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        match self {
            Specifics::Directed(s) => s.remove_vertex(v),
            Specifics::Undirected(s) => s.remove_vertex(v),
        }
    }

    fn contains_vertex(&self, v: &V) -> bool {
        match self {
            Specifics::Directed(s) => s.contains_vertex(v),
            Specifics::Undirected(s) => s.contains_vertex(v),
        }
    }

    fn vertex_count(&self) -> usize {
        match self {
            Specifics::Directed(s) => s.vertex_count(),
            Specifics::Undirected(s) => s.vertex_count(),
        }
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        match self {
            Specifics::Directed(s) => s.vertices(),
            Specifics::Undirected(s) => s.vertices(),
        }
    }

    fn add_incidence(&mut self, v: &V, edge: E, role: Role) {
        match self {
            Specifics::Directed(s) => s.add_incidence(v, edge, role),
            Specifics::Undirected(s) => s.add_incidence(v, edge, role),
        }
    }

    fn remove_incidence(&mut self, v: &V, edge: &E, role: Role) {
        match self {
            Specifics::Directed(s) => s.remove_incidence(v, edge, role),
            Specifics::Undirected(s) => s.remove_incidence(v, edge, role),
        }
    }

    fn degree(&self, v: &V) -> Option<usize> {
        match self {
            Specifics::Directed(s) => s.degree(v),
            Specifics::Undirected(s) => s.degree(v),
        }
    }

    fn in_degree(&self, v: &V) -> Option<usize> {
        match self {
            Specifics::Directed(s) => s.in_degree(v),
            Specifics::Undirected(s) => s.in_degree(v),
        }
    }

    fn out_degree(&self, v: &V) -> Option<usize> {
        match self {
            Specifics::Directed(s) => s.out_degree(v),
            Specifics::Undirected(s) => s.out_degree(v),
        }
    }

    fn incident(&self, v: &V, role: Role) -> Option<Snapshot<E>> {
        match self {
            Specifics::Directed(s) => s.incident(v, role),
            Specifics::Undirected(s) => s.incident(v, role),
        }
    }

    fn edges_between<T>(&self, source: &V, target: &V, table: &T) -> Snapshot<E>
    where
        T: EdgeTable<V, E>,
    {
        match self {
            Specifics::Directed(s) => s.edges_between(source, target, table),
            Specifics::Undirected(s) => s.edges_between(source, target, table),
        }
    }
}
