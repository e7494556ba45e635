use std::cmp::Ordering;

/// The edge token of a foreign graph: the nodes it connects.
///
/// For undirected graphs `source` and `target` are in canonical order,
/// as picked by the adapter's [EdgeOrderingPolicy].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointPair<N> {
    pub source: N,
    pub target: N,
}

impl<N> EndpointPair<N> {
    pub fn new(source: N, target: N) -> Self {
        Self { source, target }
    }
}

impl<N: std::fmt::Display> std::fmt::Display for EndpointPair<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.source, self.target)
    }
}

/// Decides which endpoint of an undirected foreign edge is reported as its source.
///
/// The endpoint that compares less is the source.
pub enum EdgeOrderingPolicy<N> {
    /// The natural order of nodes. See [EdgeOrderingPolicy::natural].
    Natural(fn(&N, &N) -> Ordering),
    /// A caller-supplied order.
    Comparator(Box<dyn Fn(&N, &N) -> Ordering>),
    /// The order in which the adapter first saw the nodes.
    InsertionOrder,
}

impl<N: Ord> EdgeOrderingPolicy<N> {
    pub fn natural() -> Self {
        EdgeOrderingPolicy::Natural(<N as Ord>::cmp)
    }
}

impl<N> EdgeOrderingPolicy<N> {
    pub fn comparator<F>(cmp: F) -> Self
    where
        F: Fn(&N, &N) -> Ordering + 'static,
    {
        EdgeOrderingPolicy::Comparator(Box::new(cmp))
    }
}

impl<N> std::fmt::Debug for EdgeOrderingPolicy<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeOrderingPolicy::Natural(_) => write!(f, "Natural"),
            EdgeOrderingPolicy::Comparator(_) => write!(f, "Comparator"),
            EdgeOrderingPolicy::InsertionOrder => write!(f, "InsertionOrder"),
        }
    }
}
