use crate::error::GraphResult;
use crate::graph::*;
use std::marker::PhantomData;

/// Fluent construction of a [Graph].
///
/// Built graphs record their edge tokens in [EdgeRegistry::thread_default]
/// unless [GraphBuilder::shared_registry] or [GraphBuilder::isolated] says otherwise.
///
/// ```rust
/// use algograph_store::graph::*;
///
/// let registry = EdgeRegistry::new();
/// let g: Graph<VertexId, EdgeId, IntegerStorage> = GraphBuilder::new(GraphType::multigraph())
///     .storage::<IntegerStorage>()
///     .vertex_supplier(VertexIdFactory::new())
///     .edge_supplier(EdgeIdFactory::new())
///     .shared_registry(registry.clone())
///     .build()
///     .unwrap();
/// assert!(g.graph_type().is_allowing_multiple_edges());
/// ```
pub struct GraphBuilder<V, E, S = DefaultStorage> {
    graph_type: GraphType,
    registry: Membership<V, E>,
    vertex_supplier: Option<Box<dyn Supplier<V> + Send>>,
    edge_supplier: Option<Box<dyn Supplier<E> + Send>>,
    _storage: PhantomData<S>,
}

/// Which [EdgeRegistry] the built graph records its edge tokens in.
enum Membership<V, E> {
    ThreadDefault,
    Shared(EdgeRegistry<V, E>),
    Isolated,
}

impl<V, E> GraphBuilder<V, E, DefaultStorage> {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            registry: Membership::ThreadDefault,
            vertex_supplier: None,
            edge_supplier: None,
            _storage: PhantomData,
        }
    }
}

impl<V, E, S> GraphBuilder<V, E, S> {
    /// Switches the storage strategy.
    pub fn storage<S2>(self) -> GraphBuilder<V, E, S2> {
        GraphBuilder {
            graph_type: self.graph_type,
            registry: self.registry,
            vertex_supplier: self.vertex_supplier,
            edge_supplier: self.edge_supplier,
            _storage: PhantomData,
        }
    }

    /// Makes [GrowableGraph::add_new_vertex] available.
    pub fn vertex_supplier<F>(mut self, supplier: F) -> Self
    where
        F: Supplier<V> + Send + 'static,
    {
        self.vertex_supplier = Some(Box::new(supplier));
        self
    }

    /// Makes [GrowableGraph::add_edge] available.
    pub fn edge_supplier<F>(mut self, supplier: F) -> Self
    where
        F: Supplier<E> + Send + 'static,
    {
        self.edge_supplier = Some(Box::new(supplier));
        self
    }

    /// Records edge tokens in `registry` instead of the thread's default one.
    pub fn shared_registry(mut self, registry: EdgeRegistry<V, E>) -> Self {
        self.registry = Membership::Shared(registry);
        self
    }

    /// Records edge tokens in no registry at all,
    /// so other graphs may use the same tokens with any endpoints.
    pub fn isolated(mut self) -> Self {
        self.registry = Membership::Isolated;
        self
    }
}

impl<V, E, S> GraphBuilder<V, E, S>
where
    V: Element + 'static,
    E: Element + 'static,
    S: StorageStrategy<V, E>,
{
    /// Fails with [GraphError::InvalidArgument](crate::GraphError::InvalidArgument)
    /// if the graph type is mixed.
    pub fn build(self) -> GraphResult<Graph<V, E, S>> {
        let registry = match self.registry {
            Membership::ThreadDefault => Some(EdgeRegistry::thread_default()),
            Membership::Shared(registry) => Some(registry),
            Membership::Isolated => None,
        };
        Graph::from_parts(
            self.graph_type,
            registry,
            self.vertex_supplier,
            self.edge_supplier,
        )
    }
}
