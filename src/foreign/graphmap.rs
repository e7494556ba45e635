use crate::foreign::*;
use petgraph::graphmap::{GraphMap, NodeTrait};
use petgraph::{Direction, EdgeType};
use std::fmt::Debug;

impl<N, W, Ty> ForeignGraph for GraphMap<N, W, Ty>
where
    N: NodeTrait + Debug,
    W: EdgeValue,
    Ty: EdgeType,
{
    type Node = N;

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn is_weighted(&self) -> bool {
        W::WEIGHTED
    }

    fn node_count(&self) -> usize {
        GraphMap::node_count(self)
    }

    fn edge_count(&self) -> usize {
        GraphMap::edge_count(self)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(GraphMap::nodes(self))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (N, N)> + '_> {
        Box::new(GraphMap::all_edges(self).map(|(a, b, _)| (a, b)))
    }

    fn neighbors(&self, n: N, dir: Direction) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(GraphMap::neighbors_directed(self, n, dir))
    }

    fn contains_node(&self, n: N) -> bool {
        GraphMap::contains_node(self, n)
    }

    fn contains_edge(&self, a: N, b: N) -> bool {
        GraphMap::contains_edge(self, a, b)
    }

    fn add_node(&mut self, n: N) -> bool {
        if GraphMap::contains_node(self, n) {
            return false;
        }
        GraphMap::add_node(self, n);
        true
    }

    fn remove_node(&mut self, n: N) -> bool {
        GraphMap::remove_node(self, n)
    }

    fn add_edge(&mut self, a: N, b: N) -> bool {
        // GraphMap overwrites the value of an existing edge
        if GraphMap::contains_edge(self, a, b) {
            return false;
        }
        GraphMap::add_edge(self, a, b, W::default_value());
        true
    }

    fn remove_edge(&mut self, a: N, b: N) -> bool {
        GraphMap::remove_edge(self, a, b).is_some()
    }

    fn edge_weight(&self, a: N, b: N) -> Option<f64> {
        GraphMap::edge_weight(self, a, b).map(|w| w.weight())
    }

    fn set_edge_weight(&mut self, a: N, b: N, weight: f64) -> bool {
        match GraphMap::edge_weight_mut(self, a, b) {
            Some(w) => {
                *w = W::from_weight(weight);
                true
            }
            None => false,
        }
    }
}
