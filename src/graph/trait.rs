use crate::error::GraphResult;
use crate::graph::*;

/// Queries every graph answers.
///
/// Collections are returned as [Snapshot]s, owned copies taken at call time.
///
/// Queries about a vertex that is not in the graph fail with
/// [GraphError::UnknownElement](crate::GraphError::UnknownElement),
/// except [QueryableGraph::get_edge] and [QueryableGraph::get_all_edges],
/// which return `None` then.
/// `Some` of an empty set from [QueryableGraph::get_all_edges] means
/// both vertices are present but not connected.
pub trait QueryableGraph {
    type Vertex: Element;
    type Edge: Element;

    fn graph_type(&self) -> GraphType;

    fn contains_vertex(&self, v: &Self::Vertex) -> bool;
    /// All vertices in insertion order.
    fn vertex_set(&self) -> Snapshot<Self::Vertex>;
    fn vertex_count(&self) -> usize {
        self.vertex_set().len()
    }

    fn contains_edge(&self, e: &Self::Edge) -> bool;
    /// All edges in insertion order.
    fn edge_set(&self) -> Snapshot<Self::Edge>;
    fn edge_count(&self) -> usize {
        self.edge_set().len()
    }

    /// Any edge from `source` to `target`, or between them for undirected graphs.
    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge>;
    /// All edges from `source` to `target`, or between them for undirected graphs.
    fn get_all_edges(
        &self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Option<Snapshot<Self::Edge>>;
    fn contains_edge_between(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.get_edge(source, target).is_some()
    }

    /// Number of edge endpoints at `v`. Self-loops count twice.
    fn degree_of(&self, v: &Self::Vertex) -> GraphResult<usize>;
    fn in_degree_of(&self, v: &Self::Vertex) -> GraphResult<usize>;
    fn out_degree_of(&self, v: &Self::Vertex) -> GraphResult<usize>;

    fn edges_of(&self, v: &Self::Vertex) -> GraphResult<Snapshot<Self::Edge>>;
    /// For undirected graphs, the same as [QueryableGraph::edges_of].
    fn incoming_edges_of(&self, v: &Self::Vertex) -> GraphResult<Snapshot<Self::Edge>>;
    /// For undirected graphs, the same as [QueryableGraph::edges_of].
    fn outgoing_edges_of(&self, v: &Self::Vertex) -> GraphResult<Snapshot<Self::Edge>>;

    fn edge_source(&self, e: &Self::Edge) -> GraphResult<Self::Vertex>;
    fn edge_target(&self, e: &Self::Edge) -> GraphResult<Self::Vertex>;
    /// The weight of `e`, or [DEFAULT_EDGE_WEIGHT] for unweighted graphs.
    fn edge_weight(&self, e: &Self::Edge) -> GraphResult<f64>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Adding vertices and edges.
///
/// Every method fails with [GraphError::Unsupported](crate::GraphError::Unsupported)
/// on graphs that are not modifiable.
pub trait GrowableGraph: QueryableGraph {
    /// Adds `v`. Returns `false`, changing nothing, if it is already present.
    fn add_vertex(&mut self, v: Self::Vertex) -> GraphResult<bool>;

    /// Adds a vertex made by the graph's vertex supplier.
    fn add_new_vertex(&mut self) -> GraphResult<Self::Vertex>;

    /// Adds an edge made by the graph's edge supplier.
    ///
    /// Returns `Ok(None)`, changing nothing, if the graph does not admit
    /// multiple edges and `source` and `target` are already connected.
    /// A self-loop in a graph without self-loops is an error.
    ///
    /// The supplier is called only after those checks pass.
    /// A token it returns that is then rejected, because the graph or a
    /// registry already holds it, is used up: the graph is unchanged and
    /// the next call asks the supplier again.
    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> GraphResult<Option<Self::Edge>>;

    /// Adds `edge` from `source` to `target`.
    ///
    /// Returns `false` if `edge` is already in the graph with the same endpoints.
    /// Unlike [GrowableGraph::add_edge], a forbidden multiple edge is an error.
    fn add_edge_with(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
        edge: Self::Edge,
    ) -> GraphResult<bool>;
}

/// Removing edges.
pub trait EdgeShrinkableGraph: QueryableGraph {
    /// Removes `edge`. Returns `false` if it is not in the graph.
    fn remove_edge(&mut self, edge: &Self::Edge) -> GraphResult<bool>;

    /// Removes one edge from `source` to `target` and returns it.
    fn remove_edge_between(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> GraphResult<Option<Self::Edge>> {
        match self.get_edge(source, target) {
            None => Ok(None),
            Some(e) => {
                self.remove_edge(&e)?;
                Ok(Some(e))
            }
        }
    }

    /// Removes all edges from `source` to `target` and returns them.
    ///
    /// `None` means one of the vertices is absent,
    /// `Some` of an empty set means they are not connected.
    fn remove_all_edges(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> GraphResult<Option<Snapshot<Self::Edge>>> {
        match self.get_all_edges(source, target) {
            None => Ok(None),
            Some(edges) => {
                for e in edges.iter() {
                    self.remove_edge(e)?;
                }
                Ok(Some(edges))
            }
        }
    }

    /// Removes all of `edges`. Returns `true` if anything was removed.
    fn remove_edges<I>(&mut self, edges: I) -> GraphResult<bool>
    where
        I: IntoIterator<Item = Self::Edge>,
        Self: Sized,
    {
        let mut changed = false;
        for e in edges {
            changed |= self.remove_edge(&e)?;
        }
        Ok(changed)
    }
}

/// Removing vertices.
pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes `v` and every edge touching it. Returns `false` if it is absent.
    fn remove_vertex(&mut self, v: &Self::Vertex) -> GraphResult<bool>;

    /// Removes all of `vertices`. Returns `true` if anything was removed.
    fn remove_vertices<I>(&mut self, vertices: I) -> GraphResult<bool>
    where
        I: IntoIterator<Item = Self::Vertex>,
        Self: Sized,
    {
        let mut changed = false;
        for v in vertices {
            changed |= self.remove_vertex(&v)?;
        }
        Ok(changed)
    }
}

/// Changing edge weights.
pub trait WeightedGraph: QueryableGraph {
    /// Fails with [GraphError::Unsupported](crate::GraphError::Unsupported) on unweighted graphs.
    fn set_edge_weight(&mut self, e: &Self::Edge, weight: f64) -> GraphResult<()>;
}
