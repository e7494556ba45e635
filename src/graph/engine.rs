use crate::error::{GraphError, GraphResult};
use crate::graph::*;
use tracing::{debug, trace};

/// The graph engine.
///
/// One implementation serves every [GraphType]:
/// what a graph permits is checked against its type on each mutation,
/// and what it stores lives in the stores chosen by `S`.
///
/// * `V`: vertices.
/// * `E`: edge tokens. They carry nothing; endpoints and weights are kept by the graph.
/// * `S`: the [StorageStrategy].
///
/// Mutations validate everything before they touch any store,
/// so a failed mutation leaves the graph as it was.
///
/// Edge tokens are also recorded in an [EdgeRegistry], so that another graph
/// cannot attach the same token to other endpoints while this one holds it.
/// Unless the builder says otherwise that is the [EdgeRegistry::thread_default].
/// Dropping the graph releases its tokens.
///
/// Acyclicity in the [GraphType] is a declaration for consumers:
/// the engine does not search for cycles when edges are added.
///
/// ```rust
/// use algograph_store::graph::*;
///
/// let mut g: Graph<&str, EdgeId> = GraphBuilder::new(GraphType::directed_simple())
///     .edge_supplier(EdgeIdFactory::new())
///     .build()
///     .unwrap();
/// g.add_vertex("a").unwrap();
/// g.add_vertex("b").unwrap();
/// let e = g.add_edge(&"a", &"b").unwrap().unwrap();
/// assert_eq!(g.edge_source(&e).unwrap(), "a");
/// // no multiple edges in a simple graph: a silent no-op
/// assert_eq!(g.add_edge(&"a", &"b").unwrap(), None);
/// assert_eq!(g.to_string(), "([a, b], [(a,b)])");
/// ```
pub struct Graph<V, E, S = DefaultStorage>
where
    V: Element,
    E: Element,
    S: StorageStrategy<V, E>,
{
    id: GraphId,
    graph_type: GraphType,
    specifics: S::Adjacency,
    edges: S::Edges,
    registry: Option<EdgeRegistry<V, E>>,
    vertex_supplier: Option<Box<dyn Supplier<V> + Send>>,
    edge_supplier: Option<Box<dyn Supplier<E> + Send>>,
}

impl<V, E, S> Graph<V, E, S>
where
    V: Element,
    E: Element,
    S: StorageStrategy<V, E>,
{
    /// Creates an empty graph without suppliers, over the thread's default registry.
    pub fn new(graph_type: GraphType) -> GraphResult<Self>
    where
        V: 'static,
        E: 'static,
    {
        GraphBuilder::new(graph_type).storage::<S>().build()
    }

    pub(crate) fn from_parts(
        graph_type: GraphType,
        registry: Option<EdgeRegistry<V, E>>,
        vertex_supplier: Option<Box<dyn Supplier<V> + Send>>,
        edge_supplier: Option<Box<dyn Supplier<E> + Send>>,
    ) -> GraphResult<Self> {
        if graph_type.is_mixed() {
            return Err(GraphError::InvalidArgument(
                "mixed graphs are not supported by the engine".to_string(),
            ));
        }
        let (specifics, edges) = S::create(&graph_type);
        Ok(Self {
            id: GraphId::fresh(),
            graph_type,
            specifics,
            edges,
            registry,
            vertex_supplier,
            edge_supplier,
        })
    }

    /// Turns this graph into one that is not modifiable.
    pub fn freeze(mut self) -> Self {
        self.graph_type = self.graph_type.as_unmodifiable();
        self
    }

    /// Adds an edge made by the edge supplier with weight `weight`.
    ///
    /// Rules are those of [GrowableGraph::add_edge].
    pub fn add_weighted_edge(&mut self, source: &V, target: &V, weight: f64) -> GraphResult<Option<E>> {
        if !self.graph_type.is_weighted() {
            return Err(GraphError::unweighted());
        }
        check_weight(weight)?;
        self.add_supplied_edge(source, target, Some(weight))
    }

    fn assert_modifiable(&self) -> GraphResult<()> {
        if self.graph_type.is_modifiable() {
            Ok(())
        } else {
            Err(GraphError::unmodifiable())
        }
    }

    fn assert_vertex(&self, v: &V) -> GraphResult<()> {
        if self.specifics.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(v))
        }
    }

    fn assert_self_loop(&self, source: &V, target: &V) -> GraphResult<()> {
        if source == target && !self.graph_type.is_allowing_self_loops() {
            return Err(GraphError::InvariantViolation(format!(
                "self-loops are not allowed: {:?}",
                source
            )));
        }
        Ok(())
    }

    fn is_forbidden_multiple_edge(&self, source: &V, target: &V) -> bool {
        !self.graph_type.is_allowing_multiple_edges() && self.contains_edge_between(source, target)
    }

    fn triple(&self, e: &E) -> GraphResult<&EdgeTriple<V>> {
        self.edges.lookup(e).ok_or_else(|| GraphError::unknown_edge(e))
    }

    fn add_supplied_edge(&mut self, source: &V, target: &V, weight: Option<f64>) -> GraphResult<Option<E>> {
        self.assert_modifiable()?;
        self.assert_vertex(source)?;
        self.assert_vertex(target)?;
        self.assert_self_loop(source, target)?;
        if self.is_forbidden_multiple_edge(source, target) {
            debug!(?source, ?target, "already connected, edge not added");
            return Ok(None);
        }
        let supplier = self
            .edge_supplier
            .as_mut()
            .ok_or_else(|| GraphError::Unsupported("the graph has no edge supplier".to_string()))?;
        // the supplier has advanced even if the token is rejected below
        let edge = supplier.supply();
        if self.edges.contains(&edge) {
            return Err(GraphError::InvalidArgument(format!(
                "edge supplier returned an edge already in the graph: {:?}",
                edge
            )));
        }
        self.attach(source, target, edge.clone(), weight)?;
        Ok(Some(edge))
    }

    /// Registers a validated edge in the registry, the edge table and both endpoints.
    fn attach(&mut self, source: &V, target: &V, edge: E, weight: Option<f64>) -> GraphResult<()> {
        if let Some(registry) = &self.registry {
            registry.attach(
                self.id,
                edge.clone(),
                source.clone(),
                target.clone(),
                self.graph_type.is_directed(),
            )?;
        }
        if !self.graph_type.is_allowing_cycles() {
            debug!(?edge, ?source, ?target, "acyclic graph: cycles are not checked");
        }
        self.edges
            .register(edge.clone(), source.clone(), target.clone(), weight)?;
        self.specifics
            .add_incidence(source, edge.clone(), Role::Outgoing);
        self.specifics.add_incidence(target, edge, Role::Incoming);
        Ok(())
    }

    fn detach(&mut self, edge: &E) -> Option<EdgeTriple<V>> {
        let triple = self.edges.deregister(edge)?;
        self.specifics
            .remove_incidence(&triple.source, edge, Role::Outgoing);
        self.specifics
            .remove_incidence(&triple.target, edge, Role::Incoming);
        if let Some(registry) = &self.registry {
            registry.detach(self.id, edge);
        }
        Some(triple)
    }

    /// Adds an explicit edge, checking it the same way [GrowableGraph::add_edge_with] does.
    pub(crate) fn insert_edge(
        &mut self,
        source: &V,
        target: &V,
        edge: E,
        weight: Option<f64>,
    ) -> GraphResult<bool> {
        self.assert_modifiable()?;
        self.assert_vertex(source)?;
        self.assert_vertex(target)?;
        self.assert_self_loop(source, target)?;
        if let Some(triple) = self.edges.lookup(&edge) {
            if triple.connects(source, target, self.graph_type.is_directed()) {
                return Ok(false);
            }
            debug!(?edge, ?source, ?target, "edge token is attached elsewhere");
            return Err(GraphError::already_attached(
                &edge,
                &triple.source,
                &triple.target,
            ));
        }
        if self.is_forbidden_multiple_edge(source, target) {
            return Err(GraphError::InvariantViolation(format!(
                "multiple edges are not allowed: {:?} and {:?} are already connected",
                source, target
            )));
        }
        if let Some(w) = weight {
            check_weight(w)?;
        }
        self.attach(source, target, edge, weight)?;
        Ok(true)
    }
}

impl<V, E, S> Drop for Graph<V, E, S>
where
    V: Element,
    E: Element,
    S: StorageStrategy<V, E>,
{
    fn drop(&mut self) {
        if let Some(registry) = &self.registry {
            registry.detach_all(self.id, self.edges.tokens());
        }
    }
}

fn check_weight(weight: f64) -> GraphResult<()> {
    if weight.is_nan() {
        Err(GraphError::InvalidArgument("edge weight is NaN".to_string()))
    } else {
        Ok(())
    }
}

impl<V, E, S> QueryableGraph for Graph<V, E, S>
where
    V: Element,
    E: Element,
    S: StorageStrategy<V, E>,
{
    type Vertex = V;
    type Edge = E;

    fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.specifics.contains_vertex(v)
    }

    fn vertex_set(&self) -> Snapshot<V> {
        self.specifics.vertices().cloned().collect()
    }

    fn vertex_count(&self) -> usize {
        self.specifics.vertex_count()
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.edges.contains(e)
    }

    fn edge_set(&self) -> Snapshot<E> {
        self.edges.tokens().cloned().collect()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn get_edge(&self, source: &V, target: &V) -> Option<E> {
        self.get_all_edges(source, target)
            .and_then(|edges| edges.into_iter().next())
    }

    fn get_all_edges(&self, source: &V, target: &V) -> Option<Snapshot<E>> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return None;
        }
        Some(self.specifics.edges_between(source, target, &self.edges))
    }

    fn degree_of(&self, v: &V) -> GraphResult<usize> {
        self.specifics
            .degree(v)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    fn in_degree_of(&self, v: &V) -> GraphResult<usize> {
        self.specifics
            .in_degree(v)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    fn out_degree_of(&self, v: &V) -> GraphResult<usize> {
        self.specifics
            .out_degree(v)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    fn edges_of(&self, v: &V) -> GraphResult<Snapshot<E>> {
        self.specifics
            .incident(v, Role::Touching)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    fn incoming_edges_of(&self, v: &V) -> GraphResult<Snapshot<E>> {
        self.specifics
            .incident(v, Role::Incoming)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    fn outgoing_edges_of(&self, v: &V) -> GraphResult<Snapshot<E>> {
        self.specifics
            .incident(v, Role::Outgoing)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    fn edge_source(&self, e: &E) -> GraphResult<V> {
        Ok(self.triple(e)?.source.clone())
    }

    fn edge_target(&self, e: &E) -> GraphResult<V> {
        Ok(self.triple(e)?.target.clone())
    }

    fn edge_weight(&self, e: &E) -> GraphResult<f64> {
        Ok(self.triple(e)?.weight())
    }
}

impl<V, E, S> GrowableGraph for Graph<V, E, S>
where
    V: Element,
    E: Element,
    S: StorageStrategy<V, E>,
{
    fn add_vertex(&mut self, v: V) -> GraphResult<bool> {
        self.assert_modifiable()?;
        trace!(vertex = ?v, "add vertex");
        Ok(self.specifics.add_vertex(v))
    }

    fn add_new_vertex(&mut self) -> GraphResult<V> {
        self.assert_modifiable()?;
        let supplier = self
            .vertex_supplier
            .as_mut()
            .ok_or_else(|| GraphError::Unsupported("the graph has no vertex supplier".to_string()))?;
        let v = supplier.supply();
        if self.specifics.contains_vertex(&v) {
            return Err(GraphError::InvalidArgument(format!(
                "vertex supplier returned a vertex already in the graph: {:?}",
                v
            )));
        }
        trace!(vertex = ?v, "add supplied vertex");
        self.specifics.add_vertex(v.clone());
        Ok(v)
    }

    fn add_edge(&mut self, source: &V, target: &V) -> GraphResult<Option<E>> {
        self.add_supplied_edge(source, target, None)
    }

    fn add_edge_with(&mut self, source: &V, target: &V, edge: E) -> GraphResult<bool> {
        self.insert_edge(source, target, edge, None)
    }
}

impl<V, E, S> EdgeShrinkableGraph for Graph<V, E, S>
where
    V: Element,
    E: Element,
    S: StorageStrategy<V, E>,
{
    fn remove_edge(&mut self, edge: &E) -> GraphResult<bool> {
        self.assert_modifiable()?;
        Ok(self.detach(edge).is_some())
    }

    fn remove_all_edges(&mut self, source: &V, target: &V) -> GraphResult<Option<Snapshot<E>>> {
        self.assert_modifiable()?;
        let edges = match self.get_all_edges(source, target) {
            None => return Ok(None),
            Some(edges) => edges,
        };
        for e in edges.iter() {
            self.detach(e);
        }
        Ok(Some(edges))
    }
}

impl<V, E, S> VertexShrinkableGraph for Graph<V, E, S>
where
    V: Element,
    E: Element,
    S: StorageStrategy<V, E>,
{
    fn remove_vertex(&mut self, v: &V) -> GraphResult<bool> {
        self.assert_modifiable()?;
        let edges = match self.specifics.incident(v, Role::Touching) {
            None => return Ok(false),
            Some(edges) => edges,
        };
        debug!(vertex = ?v, edges = edges.len(), "remove vertex and its edges");
        for e in edges.iter() {
            self.detach(e);
        }
        self.specifics.remove_vertex(v);
        Ok(true)
    }
}

impl<V, E, S> WeightedGraph for Graph<V, E, S>
where
    V: Element,
    E: Element,
    S: StorageStrategy<V, E>,
{
    fn set_edge_weight(&mut self, e: &E, weight: f64) -> GraphResult<()> {
        self.assert_modifiable()?;
        if !self.graph_type.is_weighted() {
            return Err(GraphError::unweighted());
        }
        check_weight(weight)?;
        self.edges.set_weight(e, weight)
    }
}

impl<V, E, S> std::fmt::Debug for Graph<V, E, S>
where
    V: Element,
    E: Element,
    S: StorageStrategy<V, E>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}

/// The canonical form `([v1, v2, ...], [(s1,t1), (s2,t2), ...])`,
/// with vertices and edges in insertion order.
impl<V, E, S> std::fmt::Display for Graph<V, E, S>
where
    V: Element + std::fmt::Display,
    E: Element,
    S: StorageStrategy<V, E>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "([")?;
        for (i, v) in self.specifics.vertices().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "], [")?;
        for (i, e) in self.edges.tokens().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if let Some(t) = self.edges.lookup(e) {
                write!(f, "({},{})", t.source, t.target)?;
            }
        }
        write!(f, "])")
    }
}

/// Structural equality: same type, vertices, edges, endpoints and weights.
///
/// Insertion order is not compared.
impl<V, E, S1, S2> PartialEq<Graph<V, E, S2>> for Graph<V, E, S1>
where
    V: Element,
    E: Element,
    S1: StorageStrategy<V, E>,
    S2: StorageStrategy<V, E>,
{
    fn eq(&self, other: &Graph<V, E, S2>) -> bool {
        if self.graph_type != other.graph_type
            || self.vertex_count() != other.vertex_count()
            || self.edge_count() != other.edge_count()
        {
            return false;
        }
        if !self.specifics.vertices().all(|v| other.contains_vertex(v)) {
            return false;
        }
        self.edges
            .tokens()
            .all(|e| match (self.edges.lookup(e), other.edges.lookup(e)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::Ops;
    use quickcheck_macros::quickcheck;

    fn directed_multigraph() -> Graph<u32, EdgeId> {
        GraphBuilder::new(GraphType::directed_pseudograph())
            .edge_supplier(EdgeIdFactory::new())
            .build()
            .unwrap()
    }

    #[test]
    fn directed_multigraph_degrees() {
        let mut g = directed_multigraph();
        for v in 1..=5 {
            assert!(g.add_vertex(v).unwrap());
        }
        for (s, t) in [(1, 2), (2, 3), (2, 3), (2, 4), (4, 4), (5, 5), (5, 5), (5, 2)] {
            assert!(g.add_edge(&s, &t).unwrap().is_some());
        }
        assert_eq!(g.degree_of(&2).unwrap(), 5);
        assert_eq!(g.in_degree_of(&2).unwrap(), 2);
        assert_eq!(g.out_degree_of(&2).unwrap(), 3);
        assert!(g.outgoing_edges_of(&3).unwrap().is_empty());
        assert_eq!(g.degree_of(&5).unwrap(), 5);
        assert_eq!(g.get_all_edges(&2, &3).unwrap().len(), 2);
        assert_eq!(g.get_all_edges(&3, &2).unwrap().len(), 0);
    }

    #[test]
    fn simple_directed_graph_rejects_loops_and_ignores_multi_edges() {
        let mut g: Graph<&str, EdgeId> = GraphBuilder::new(GraphType::directed_simple())
            .edge_supplier(EdgeIdFactory::new())
            .build()
            .unwrap();
        g.add_vertex("v").unwrap();
        g.add_vertex("w").unwrap();
        assert!(matches!(
            g.add_edge(&"v", &"v"),
            Err(GraphError::InvariantViolation(_))
        ));
        let e = g.add_edge(&"v", &"w").unwrap();
        assert!(e.is_some());
        assert_eq!(g.add_edge(&"v", &"w").unwrap(), None);
        assert_eq!(g.edge_count(), 1);
        // opposite direction is another pair
        assert!(g.add_edge(&"w", &"v").unwrap().is_some());

        // an explicit edge breaking the rules is an error
        assert!(matches!(
            g.add_edge_with(&"v", &"w", EdgeId(100)),
            Err(GraphError::InvariantViolation(_))
        ));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn absent_vertices() {
        let mut g = directed_multigraph();
        g.add_vertex(1).unwrap();
        assert!(matches!(
            g.add_edge(&1, &2),
            Err(GraphError::UnknownElement { .. })
        ));
        assert!(matches!(g.degree_of(&2), Err(GraphError::UnknownElement { .. })));
        assert!(matches!(g.edges_of(&2), Err(GraphError::UnknownElement { .. })));
        assert_eq!(g.get_edge(&1, &2), None);
        assert_eq!(g.get_all_edges(&1, &2), None);
        assert_eq!(g.remove_all_edges(&1, &2).unwrap(), None);
        assert_eq!(g.get_all_edges(&1, &1), Some(empty_snapshot()));
        assert_eq!(g.remove_all_edges(&1, &1).unwrap(), Some(empty_snapshot()));
        assert!(!g.remove_vertex(&2).unwrap());
        assert!(!g.add_vertex(1).unwrap());
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn explicit_edges() {
        let mut g: Graph<u32, &str> = Graph::new(GraphType::directed_multigraph()).unwrap();
        for v in 1..=3 {
            g.add_vertex(v).unwrap();
        }
        assert!(g.add_edge_with(&1, &2, "x").unwrap());
        assert!(!g.add_edge_with(&1, &2, "x").unwrap());
        let res = g.add_edge_with(&1, &3, "x");
        assert!(matches!(res, Err(GraphError::EdgeAlreadyAttached { .. })));
        assert_eq!(g.edge_target(&"x").unwrap(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree_of(&3).unwrap(), 0);

        // no edge supplier
        assert!(matches!(g.add_edge(&1, &2), Err(GraphError::Unsupported(_))));
        assert!(matches!(g.add_new_vertex(), Err(GraphError::Unsupported(_))));
    }

    #[test]
    fn undirected_explicit_edge_in_either_orientation() {
        let mut g: Graph<u32, &str> = Graph::new(GraphType::multigraph()).unwrap();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        assert!(g.add_edge_with(&1, &2, "x").unwrap());
        assert!(!g.add_edge_with(&2, &1, "x").unwrap());
        assert_eq!(g.get_edge(&2, &1), Some("x"));
        assert_eq!(g.incoming_edges_of(&1).unwrap(), g.outgoing_edges_of(&1).unwrap());
    }

    #[test]
    fn remove_edges() {
        let mut g = directed_multigraph();
        for v in 1..=3 {
            g.add_vertex(v).unwrap();
        }
        let a = g.add_edge(&1, &2).unwrap().unwrap();
        let b = g.add_edge(&1, &2).unwrap().unwrap();
        let c = g.add_edge(&2, &3).unwrap().unwrap();

        assert_eq!(g.remove_edge_between(&1, &2).unwrap(), Some(a));
        assert_eq!(g.remove_edge_between(&3, &2).unwrap(), None);
        assert!(!g.remove_edge(&a).unwrap());
        let removed = g.remove_all_edges(&1, &2).unwrap().unwrap();
        assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec![b]);
        assert_eq!(g.edge_set().into_iter().collect::<Vec<_>>(), vec![c]);
        assert_eq!(g.out_degree_of(&1).unwrap(), 0);
        assert_eq!(g.in_degree_of(&2).unwrap(), 0);
    }

    #[test]
    fn remove_vertex_cascades() {
        let mut g = directed_multigraph();
        for v in 1..=4 {
            g.add_vertex(v).unwrap();
        }
        for (s, t) in [(1, 2), (2, 2), (3, 2), (2, 4), (3, 4)] {
            g.add_edge(&s, &t).unwrap();
        }
        let degree = g.degree_of(&2).unwrap();
        let before = g.edge_count();
        assert!(g.remove_vertex(&2).unwrap());
        assert!(!g.contains_vertex(&2));
        assert_eq!(g.edge_count(), before - degree + 1);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.vertex_set().into_iter().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(g.out_degree_of(&1).unwrap(), 0);
    }

    #[test]
    fn rejected_supplied_tokens_are_used_up() {
        let registry = EdgeRegistry::new();
        let mut holder: Graph<u32, EdgeId> = GraphBuilder::new(GraphType::directed_multigraph())
            .shared_registry(registry.clone())
            .build()
            .unwrap();
        let mut g: Graph<u32, EdgeId> = GraphBuilder::new(GraphType::directed_multigraph())
            .edge_supplier(EdgeIdFactory::new())
            .shared_registry(registry)
            .build()
            .unwrap();
        for v in 1..=2 {
            holder.add_vertex(v).unwrap();
            g.add_vertex(v).unwrap();
        }
        holder.add_edge_with(&1, &2, EdgeId(0)).unwrap();

        assert!(matches!(
            g.add_edge(&1, &2),
            Err(GraphError::EdgeAlreadyAttached { .. })
        ));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.out_degree_of(&1).unwrap(), 0);
        assert_eq!(g.add_edge(&1, &2).unwrap(), Some(EdgeId(1)));
    }

    #[test]
    fn acyclic_graphs_take_edges_without_a_cycle_search() {
        let mut g: Graph<u32, &str> = Graph::new(GraphType::directed_acyclic()).unwrap();
        for v in 1..=3 {
            g.add_vertex(v).unwrap();
        }
        assert!(g.add_edge_with(&1, &2, "a").unwrap());
        assert!(g.add_edge_with(&2, &3, "b").unwrap());
        assert!(g.add_edge_with(&3, &1, "c").unwrap());
        assert_eq!(g.edge_count(), 3);
        assert!(matches!(
            g.add_edge_with(&1, &1, "d"),
            Err(GraphError::InvariantViolation(_))
        ));
    }

    #[test]
    fn weights() {
        let mut g: Graph<u32, EdgeId> = GraphBuilder::new(GraphType::simple().as_weighted())
            .edge_supplier(EdgeIdFactory::new())
            .build()
            .unwrap();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.add_vertex(3).unwrap();
        let a = g.add_weighted_edge(&1, &2, 2.5).unwrap().unwrap();
        let b = g.add_edge(&2, &3).unwrap().unwrap();
        assert_eq!(g.edge_weight(&a).unwrap(), 2.5);
        assert_eq!(g.edge_weight(&b).unwrap(), DEFAULT_EDGE_WEIGHT);
        g.set_edge_weight(&b, -1.0).unwrap();
        assert_eq!(g.edge_weight(&b).unwrap(), -1.0);
        assert!(matches!(
            g.set_edge_weight(&b, f64::NAN),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            g.edge_weight(&EdgeId(99)),
            Err(GraphError::UnknownElement { .. })
        ));

        let mut g = directed_multigraph();
        g.add_vertex(1).unwrap();
        let e = g.add_edge(&1, &1).unwrap().unwrap();
        assert_eq!(g.edge_weight(&e).unwrap(), DEFAULT_EDGE_WEIGHT);
        assert!(matches!(g.set_edge_weight(&e, 3.0), Err(GraphError::Unsupported(_))));
        assert!(matches!(
            g.add_weighted_edge(&1, &1, 3.0),
            Err(GraphError::Unsupported(_))
        ));
    }

    #[test]
    fn frozen_graphs_reject_mutations() {
        let mut g = directed_multigraph();
        g.add_vertex(1).unwrap();
        let e = g.add_edge(&1, &1).unwrap().unwrap();
        let mut g = g.freeze();
        assert!(!g.graph_type().is_modifiable());
        assert!(matches!(g.add_vertex(2), Err(GraphError::Unsupported(_))));
        assert!(matches!(g.add_edge(&1, &1), Err(GraphError::Unsupported(_))));
        assert!(matches!(g.remove_edge(&e), Err(GraphError::Unsupported(_))));
        assert!(matches!(g.remove_vertex(&1), Err(GraphError::Unsupported(_))));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree_of(&1).unwrap(), 2);
    }

    #[test]
    fn mixed_graphs_are_rejected() {
        let t = GraphTypeBuilder::mixed().build().unwrap();
        let res: GraphResult<Graph<u32, u32>> = Graph::new(t);
        assert!(matches!(res, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn canonical_string() {
        let mut g: Graph<u32, &str> = Graph::new(GraphType::pseudograph()).unwrap();
        assert_eq!(g.to_string(), "([], [])");
        for v in [3, 1, 2] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge_with(&3, &1, "a").unwrap();
        g.add_edge_with(&2, &2, "b").unwrap();
        assert_eq!(g.to_string(), "([3, 1, 2], [(3,1), (2,2)])");
    }

    #[test]
    fn debug_lists_outgoing_edges() {
        let mut g: Graph<u32, &str> = Graph::new(GraphType::directed_simple()).unwrap();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.add_edge_with(&1, &2, "a").unwrap();
        assert_eq!(format!("{:?}", g), "1\n  --\"a\"-> 2\n2\n");
    }

    #[test]
    fn graphs_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Graph<u32, EdgeId>>();
        assert_send::<Graph<VertexId, EdgeId, IntegerStorage>>();
    }

    fn check_degree_sums<S>(g: &Graph<VertexId, EdgeId, S>)
    where
        S: StorageStrategy<VertexId, EdgeId>,
    {
        let vs = g.vertex_set();
        if g.graph_type().is_directed() {
            let outs: usize = vs.iter().map(|v| g.out_degree_of(v).unwrap()).sum();
            let ins: usize = vs.iter().map(|v| g.in_degree_of(v).unwrap()).sum();
            assert_eq!(outs, g.edge_count());
            assert_eq!(ins, g.edge_count());
        } else {
            let degrees: usize = vs.iter().map(|v| g.degree_of(v).unwrap()).sum();
            assert_eq!(degrees, 2 * g.edge_count());
        }
        for e in g.edge_set() {
            let src = g.edge_source(&e).unwrap();
            let snk = g.edge_target(&e).unwrap();
            assert!(g.outgoing_edges_of(&src).unwrap().contains(&e));
            assert!(g.incoming_edges_of(&snk).unwrap().contains(&e));
            assert!(g.get_all_edges(&src, &snk).unwrap().contains(&e));
        }
    }

    #[quickcheck]
    fn directed_degree_sums(ops: Ops) {
        let mut g: Graph<VertexId, EdgeId> = Graph::new(GraphType::directed_pseudograph()).unwrap();
        ops.apply(&mut g);
        check_degree_sums(&g);
    }

    #[quickcheck]
    fn undirected_degree_sums(ops: Ops) {
        let mut g: Graph<VertexId, EdgeId> = Graph::new(GraphType::pseudograph()).unwrap();
        ops.apply(&mut g);
        check_degree_sums(&g);
    }

    #[quickcheck]
    fn storage_strategies_agree(ops: Ops) {
        let mut hashed: Graph<VertexId, EdgeId> = Graph::new(GraphType::directed_pseudograph()).unwrap();
        let mut fx: Graph<VertexId, EdgeId, IntegerStorage> =
            Graph::new(GraphType::directed_pseudograph()).unwrap();
        ops.apply(&mut hashed);
        ops.apply(&mut fx);
        check_degree_sums(&fx);
        assert!(hashed == fx);
        assert_eq!(
            hashed.vertex_set().into_iter().collect::<Vec<_>>(),
            fx.vertex_set().into_iter().collect::<Vec<_>>()
        );
        assert_eq!(
            hashed.edge_set().into_iter().collect::<Vec<_>>(),
            fx.edge_set().into_iter().collect::<Vec<_>>()
        );
    }

    #[quickcheck]
    fn removing_a_vertex_removes_its_degree_in_edges(ops: Ops) {
        let mut g: Graph<VertexId, EdgeId> = Graph::new(GraphType::pseudograph()).unwrap();
        ops.apply(&mut g);
        for v in g.vertex_set() {
            let loops = g
                .edges_of(&v)
                .unwrap()
                .iter()
                .filter(|e| g.edge_source(e).unwrap() == g.edge_target(e).unwrap())
                .count();
            let degree = g.degree_of(&v).unwrap();
            let before = g.edge_count();
            assert!(g.remove_vertex(&v).unwrap());
            assert!(!g.contains_vertex(&v));
            // a self-loop counts twice in the degree but is one edge
            assert_eq!(g.edge_count(), before - (degree - loops));
        }
        assert_eq!(g.edge_count(), 0);
    }
}
