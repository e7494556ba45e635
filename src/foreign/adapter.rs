use crate::error::{GraphError, GraphResult};
use crate::foreign::*;
use crate::graph::*;
use ahash::RandomState;
use indexmap::{IndexMap, IndexSet};
use petgraph::Direction;
use std::cmp::Ordering;
use tracing::trace;

/// A foreign graph seen through the graph traits of this crate.
///
/// Edges are named by their endpoints.
/// For undirected graphs, `get_edge(a, b)` and `get_edge(b, a)` give the same [EndpointPair],
/// oriented by the [EdgeOrderingPolicy] given at construction.
/// Only that canonical pair is a member of the edge set.
///
/// Every mutation goes straight into the foreign graph
/// and every query is answered from it, nothing is cached.
///
/// ```rust
/// use algograph_store::foreign::*;
/// use algograph_store::graph::*;
/// use petgraph::graphmap::UnGraphMap;
///
/// let mut g = ForeignGraphAdapter::new(UnGraphMap::<u32, ()>::new(), EdgeOrderingPolicy::natural());
/// g.add_vertex(2).unwrap();
/// g.add_vertex(1).unwrap();
/// g.add_edge(&2, &1).unwrap();
/// assert_eq!(g.get_edge(&2, &1), Some(EndpointPair::new(1, 2)));
/// ```
pub struct ForeignGraphAdapter<F>
where
    F: ForeignGraph,
{
    foreign: F,
    policy: EdgeOrderingPolicy<F::Node>,
    discovery: IndexMap<F::Node, u64, RandomState>,
    next_rank: u64,
}

impl<F> ForeignGraphAdapter<F>
where
    F: ForeignGraph,
{
    pub fn new(foreign: F, policy: EdgeOrderingPolicy<F::Node>) -> Self {
        let mut res = Self {
            foreign,
            policy,
            discovery: IndexMap::with_hasher(RandomState::new()),
            next_rank: 0,
        };
        let nodes: Vec<_> = res.foreign.nodes().collect();
        for n in nodes {
            res.discover(n);
        }
        res
    }

    pub fn foreign(&self) -> &F {
        &self.foreign
    }

    pub fn into_inner(self) -> F {
        self.foreign
    }

    pub fn policy(&self) -> &EdgeOrderingPolicy<F::Node> {
        &self.policy
    }

    fn discover(&mut self, n: F::Node) {
        if !self.discovery.contains_key(&n) {
            self.discovery.insert(n, self.next_rank);
            self.next_rank += 1;
        }
    }

    fn compare(&self, a: &F::Node, b: &F::Node) -> Ordering {
        match &self.policy {
            EdgeOrderingPolicy::Natural(cmp) => cmp(a, b),
            EdgeOrderingPolicy::Comparator(cmp) => cmp(a, b),
            EdgeOrderingPolicy::InsertionOrder => {
                self.discovery.get(a).cmp(&self.discovery.get(b))
            }
        }
    }

    /// The token of the edge between `source` and `target`, whether or not it exists.
    pub fn canonical(&self, source: F::Node, target: F::Node) -> EndpointPair<F::Node> {
        if !self.foreign.is_directed() && self.compare(&source, &target) == Ordering::Greater {
            EndpointPair::new(target, source)
        } else {
            EndpointPair::new(source, target)
        }
    }

    fn assert_vertex(&self, v: &F::Node) -> GraphResult<()> {
        if self.foreign.contains_node(*v) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(v))
        }
    }

    fn assert_edge(&self, e: &EndpointPair<F::Node>) -> GraphResult<()> {
        if self.contains_edge(e) {
            Ok(())
        } else {
            Err(GraphError::unknown_edge(e))
        }
    }

    /// Nodes adjacent to `v` in `dir`, with a self-loop listed exactly when there is one.
    fn adjacent(&self, v: F::Node, dir: Direction) -> IndexSet<F::Node, RandomState> {
        let mut res: IndexSet<_, RandomState> = self.foreign.neighbors(v, dir).collect();
        if self.foreign.contains_edge(v, v) {
            res.insert(v);
        } else {
            res.shift_remove(&v);
        }
        res
    }

    fn has_loop(&self, v: F::Node) -> usize {
        usize::from(self.foreign.contains_edge(v, v))
    }
}

impl<F> QueryableGraph for ForeignGraphAdapter<F>
where
    F: ForeignGraph,
{
    type Vertex = F::Node;
    type Edge = EndpointPair<F::Node>;

    fn graph_type(&self) -> GraphType {
        let topology = if self.foreign.is_directed() {
            Topology::Directed
        } else {
            Topology::Undirected
        };
        let res = GraphType::single_edges_with_loops(topology);
        if self.foreign.is_weighted() {
            res.as_weighted()
        } else {
            res
        }
    }

    fn contains_vertex(&self, v: &F::Node) -> bool {
        self.foreign.contains_node(*v)
    }

    fn vertex_set(&self) -> Snapshot<F::Node> {
        self.foreign.nodes().collect()
    }

    fn vertex_count(&self) -> usize {
        self.foreign.node_count()
    }

    fn contains_edge(&self, e: &Self::Edge) -> bool {
        self.foreign.contains_edge(e.source, e.target)
            && self.canonical(e.source, e.target) == *e
    }

    fn edge_set(&self) -> Snapshot<Self::Edge> {
        self.foreign
            .edges()
            .map(|(a, b)| self.canonical(a, b))
            .collect()
    }

    fn edge_count(&self) -> usize {
        self.foreign.edge_count()
    }

    fn get_edge(&self, source: &F::Node, target: &F::Node) -> Option<Self::Edge> {
        if self.foreign.contains_edge(*source, *target) {
            Some(self.canonical(*source, *target))
        } else {
            None
        }
    }

    fn get_all_edges(&self, source: &F::Node, target: &F::Node) -> Option<Snapshot<Self::Edge>> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return None;
        }
        Some(self.get_edge(source, target).into_iter().collect())
    }

    fn degree_of(&self, v: &F::Node) -> GraphResult<usize> {
        self.assert_vertex(v)?;
        if self.foreign.is_directed() {
            Ok(self.adjacent(*v, Direction::Incoming).len()
                + self.adjacent(*v, Direction::Outgoing).len())
        } else {
            Ok(self.adjacent(*v, Direction::Outgoing).len() + self.has_loop(*v))
        }
    }

    fn in_degree_of(&self, v: &F::Node) -> GraphResult<usize> {
        if self.foreign.is_directed() {
            self.assert_vertex(v)?;
            Ok(self.adjacent(*v, Direction::Incoming).len())
        } else {
            self.degree_of(v)
        }
    }

    fn out_degree_of(&self, v: &F::Node) -> GraphResult<usize> {
        if self.foreign.is_directed() {
            self.assert_vertex(v)?;
            Ok(self.adjacent(*v, Direction::Outgoing).len())
        } else {
            self.degree_of(v)
        }
    }

    fn edges_of(&self, v: &F::Node) -> GraphResult<Snapshot<Self::Edge>> {
        let mut res = self.incoming_edges_of(v)?;
        if self.foreign.is_directed() {
            res.extend(self.outgoing_edges_of(v)?);
        }
        Ok(res)
    }

    fn incoming_edges_of(&self, v: &F::Node) -> GraphResult<Snapshot<Self::Edge>> {
        self.assert_vertex(v)?;
        Ok(self
            .adjacent(*v, Direction::Incoming)
            .into_iter()
            .map(|u| self.canonical(u, *v))
            .collect())
    }

    fn outgoing_edges_of(&self, v: &F::Node) -> GraphResult<Snapshot<Self::Edge>> {
        self.assert_vertex(v)?;
        Ok(self
            .adjacent(*v, Direction::Outgoing)
            .into_iter()
            .map(|w| self.canonical(*v, w))
            .collect())
    }

    fn edge_source(&self, e: &Self::Edge) -> GraphResult<F::Node> {
        self.assert_edge(e)?;
        Ok(e.source)
    }

    fn edge_target(&self, e: &Self::Edge) -> GraphResult<F::Node> {
        self.assert_edge(e)?;
        Ok(e.target)
    }

    fn edge_weight(&self, e: &Self::Edge) -> GraphResult<f64> {
        self.assert_edge(e)?;
        self.foreign
            .edge_weight(e.source, e.target)
            .ok_or_else(|| GraphError::unknown_edge(e))
    }
}

impl<F> GrowableGraph for ForeignGraphAdapter<F>
where
    F: ForeignGraph,
{
    fn add_vertex(&mut self, v: F::Node) -> GraphResult<bool> {
        if !self.foreign.add_node(v) {
            return Ok(false);
        }
        trace!(vertex = ?v, "add foreign node");
        self.discover(v);
        Ok(true)
    }

    fn add_new_vertex(&mut self) -> GraphResult<F::Node> {
        Err(GraphError::Unsupported(
            "foreign graphs have no vertex supplier".to_string(),
        ))
    }

    fn add_edge(&mut self, source: &F::Node, target: &F::Node) -> GraphResult<Option<Self::Edge>> {
        self.assert_vertex(source)?;
        self.assert_vertex(target)?;
        if !self.foreign.add_edge(*source, *target) {
            return Ok(None);
        }
        trace!(?source, ?target, "add foreign edge");
        Ok(Some(self.canonical(*source, *target)))
    }

    fn add_edge_with(
        &mut self,
        source: &F::Node,
        target: &F::Node,
        edge: Self::Edge,
    ) -> GraphResult<bool> {
        self.assert_vertex(source)?;
        self.assert_vertex(target)?;
        if self.canonical(*source, *target) != edge {
            return Err(GraphError::InvalidArgument(format!(
                "edge {:?} does not name the edge between {:?} and {:?}",
                edge, source, target
            )));
        }
        let added = self.foreign.add_edge(*source, *target);
        if added {
            trace!(?source, ?target, "add foreign edge");
        }
        Ok(added)
    }
}

impl<F> EdgeShrinkableGraph for ForeignGraphAdapter<F>
where
    F: ForeignGraph,
{
    fn remove_edge(&mut self, edge: &Self::Edge) -> GraphResult<bool> {
        if !self.contains_edge(edge) {
            return Ok(false);
        }
        trace!(?edge, "remove foreign edge");
        Ok(self.foreign.remove_edge(edge.source, edge.target))
    }
}

impl<F> VertexShrinkableGraph for ForeignGraphAdapter<F>
where
    F: ForeignGraph,
{
    fn remove_vertex(&mut self, v: &F::Node) -> GraphResult<bool> {
        if !self.foreign.remove_node(*v) {
            return Ok(false);
        }
        trace!(vertex = ?v, "remove foreign node");
        self.discovery.swap_remove(v);
        Ok(true)
    }
}

impl<F> WeightedGraph for ForeignGraphAdapter<F>
where
    F: ForeignGraph,
{
    fn set_edge_weight(&mut self, e: &Self::Edge, weight: f64) -> GraphResult<()> {
        if !self.foreign.is_weighted() {
            return Err(GraphError::unweighted());
        }
        if weight.is_nan() {
            return Err(GraphError::InvalidArgument("edge weight is NaN".to_string()));
        }
        self.assert_edge(e)?;
        if self.foreign.set_edge_weight(e.source, e.target, weight) {
            Ok(())
        } else {
            Err(GraphError::unknown_edge(e))
        }
    }
}

impl<F> std::fmt::Debug for ForeignGraphAdapter<F>
where
    F: ForeignGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}
