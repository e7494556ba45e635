use crate::error::GraphResult;
use crate::graph::*;
use std::ops::{Deref, DerefMut};

/// A view of a graph with every edge turned around.
///
/// It borrows its base: `EdgeReversedGraph<&G>` only reads,
/// `EdgeReversedGraph<&mut G>` also mutates.
/// Nothing is cached, so every query reflects the base as it is now.
///
/// Mutations are forwarded with source and target swapped,
/// so an edge added through the view as `(a, b)` is `(b, a)` in the base
/// and `(a, b)` when seen through the view again.
///
/// ```rust
/// use algograph_store::graph::*;
///
/// let mut g: Graph<u32, &str> = Graph::new(GraphType::directed_simple()).unwrap();
/// g.add_vertex(1).unwrap();
/// g.add_vertex(2).unwrap();
/// g.add_edge_with(&1, &2, "e").unwrap();
/// let view = EdgeReversedGraph::new(&g);
/// assert_eq!(view.edge_source(&"e").unwrap(), 2);
/// assert_eq!(view.get_edge(&2, &1), Some("e"));
/// ```
pub struct EdgeReversedGraph<G> {
    base: G,
}

impl<G> EdgeReversedGraph<G> {
    pub fn new(base: G) -> Self {
        Self { base }
    }

    pub fn into_inner(self) -> G {
        self.base
    }
}

impl<G> QueryableGraph for EdgeReversedGraph<G>
where
    G: Deref,
    G::Target: QueryableGraph,
{
    type Vertex = <G::Target as QueryableGraph>::Vertex;
    type Edge = <G::Target as QueryableGraph>::Edge;

    fn graph_type(&self) -> GraphType {
        self.base.graph_type()
    }

    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        self.base.contains_vertex(v)
    }

    fn vertex_set(&self) -> Snapshot<Self::Vertex> {
        self.base.vertex_set()
    }

    fn vertex_count(&self) -> usize {
        self.base.vertex_count()
    }

    fn contains_edge(&self, e: &Self::Edge) -> bool {
        self.base.contains_edge(e)
    }

    fn edge_set(&self) -> Snapshot<Self::Edge> {
        self.base.edge_set()
    }

    fn edge_count(&self) -> usize {
        self.base.edge_count()
    }

    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge> {
        self.base.get_edge(target, source)
    }

    fn get_all_edges(
        &self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Option<Snapshot<Self::Edge>> {
        self.base.get_all_edges(target, source)
    }

    fn degree_of(&self, v: &Self::Vertex) -> GraphResult<usize> {
        self.base.degree_of(v)
    }

    fn in_degree_of(&self, v: &Self::Vertex) -> GraphResult<usize> {
        self.base.out_degree_of(v)
    }

    fn out_degree_of(&self, v: &Self::Vertex) -> GraphResult<usize> {
        self.base.in_degree_of(v)
    }

    fn edges_of(&self, v: &Self::Vertex) -> GraphResult<Snapshot<Self::Edge>> {
        self.base.edges_of(v)
    }

    fn incoming_edges_of(&self, v: &Self::Vertex) -> GraphResult<Snapshot<Self::Edge>> {
        self.base.outgoing_edges_of(v)
    }

    fn outgoing_edges_of(&self, v: &Self::Vertex) -> GraphResult<Snapshot<Self::Edge>> {
        self.base.incoming_edges_of(v)
    }

    fn edge_source(&self, e: &Self::Edge) -> GraphResult<Self::Vertex> {
        self.base.edge_target(e)
    }

    fn edge_target(&self, e: &Self::Edge) -> GraphResult<Self::Vertex> {
        self.base.edge_source(e)
    }

    fn edge_weight(&self, e: &Self::Edge) -> GraphResult<f64> {
        self.base.edge_weight(e)
    }
}

impl<G> GrowableGraph for EdgeReversedGraph<G>
where
    G: DerefMut,
    G::Target: GrowableGraph,
{
    fn add_vertex(&mut self, v: Self::Vertex) -> GraphResult<bool> {
        self.base.add_vertex(v)
    }

    fn add_new_vertex(&mut self) -> GraphResult<Self::Vertex> {
        self.base.add_new_vertex()
    }

    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> GraphResult<Option<Self::Edge>> {
        self.base.add_edge(target, source)
    }

    fn add_edge_with(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
        edge: Self::Edge,
    ) -> GraphResult<bool> {
        self.base.add_edge_with(target, source, edge)
    }
}

impl<G> EdgeShrinkableGraph for EdgeReversedGraph<G>
where
    G: DerefMut,
    G::Target: EdgeShrinkableGraph,
{
    fn remove_edge(&mut self, edge: &Self::Edge) -> GraphResult<bool> {
        self.base.remove_edge(edge)
    }

    fn remove_all_edges(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> GraphResult<Option<Snapshot<Self::Edge>>> {
        self.base.remove_all_edges(target, source)
    }
}

impl<G> VertexShrinkableGraph for EdgeReversedGraph<G>
where
    G: DerefMut,
    G::Target: VertexShrinkableGraph,
{
    fn remove_vertex(&mut self, v: &Self::Vertex) -> GraphResult<bool> {
        self.base.remove_vertex(v)
    }
}

impl<G> WeightedGraph for EdgeReversedGraph<G>
where
    G: DerefMut,
    G::Target: WeightedGraph,
{
    fn set_edge_weight(&mut self, e: &Self::Edge, weight: f64) -> GraphResult<()> {
        self.base.set_edge_weight(e, weight)
    }
}

impl<G> std::fmt::Debug for EdgeReversedGraph<G>
where
    G: Deref,
    G::Target: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}
