use crate::error::GraphResult;
use crate::graph::*;
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// What a graph is written as: its type, then vertices and edges in insertion order.
#[derive(Serialize, Deserialize)]
struct GraphRecord<V, E> {
    graph_type: GraphType,
    vertices: Vec<V>,
    edges: Vec<EdgeRecord<V, E>>,
}

#[derive(Serialize, Deserialize)]
struct EdgeRecord<V, E> {
    edge: E,
    source: V,
    target: V,
    weight: Option<f64>,
}

impl<V, E, S> Serialize for Graph<V, E, S>
where
    V: Element + Serialize,
    E: Element + Serialize,
    S: StorageStrategy<V, E>,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let edges = self.edge_set();
        let mut edge_records = Vec::with_capacity(edges.len());
        for e in edges {
            let source = self.edge_source(&e).map_err(Se::Error::custom)?;
            let target = self.edge_target(&e).map_err(Se::Error::custom)?;
            let weight = if self.graph_type().is_weighted() {
                Some(self.edge_weight(&e).map_err(Se::Error::custom)?)
            } else {
                None
            };
            edge_records.push(EdgeRecord {
                edge: e,
                source,
                target,
                weight,
            });
        }
        let record = GraphRecord {
            graph_type: self.graph_type(),
            vertices: self.vertex_set().into_iter().collect(),
            edges: edge_records,
        };
        record.serialize(serializer)
    }
}

impl<'de, V, E, S> Deserialize<'de> for Graph<V, E, S>
where
    V: Element + Deserialize<'de> + 'static,
    E: Element + Deserialize<'de> + 'static,
    S: StorageStrategy<V, E>,
{
    /// Replays the record through the engine, so a corrupt record is rejected
    /// by the same checks as any other mutation.
    ///
    /// The restored graph has no suppliers and joins the thread's default registry,
    /// where it may hold the same tokens as the graph it was written from.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = GraphRecord::<V, E>::deserialize(deserializer)?;
        let frozen = !record.graph_type.is_modifiable();
        let mut graph: Graph<V, E, S> =
            Graph::new(record.graph_type.as_modifiable()).map_err(D::Error::custom)?;
        for v in record.vertices {
            if !graph.add_vertex(v).map_err(D::Error::custom)? {
                return Err(D::Error::custom("duplicate vertex"));
            }
        }
        for e in record.edges {
            if !graph
                .insert_edge(&e.source, &e.target, e.edge, e.weight)
                .map_err(D::Error::custom)?
            {
                return Err(D::Error::custom("duplicate edge"));
            }
        }
        Ok(if frozen { graph.freeze() } else { graph })
    }
}

impl<V, E, S> Graph<V, E, S>
where
    V: Element + Serialize,
    E: Element + Serialize,
    S: StorageStrategy<V, E>,
{
    /// Encodes the graph with `bincode`.
    pub fn to_bytes(&self) -> GraphResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}

impl<V, E, S> Graph<V, E, S>
where
    V: Element + DeserializeOwned + 'static,
    E: Element + DeserializeOwned + 'static,
    S: StorageStrategy<V, E>,
{
    /// Decodes a graph written by [Graph::to_bytes].
    pub fn from_bytes(bytes: &[u8]) -> GraphResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::directed::Ops;
    use quickcheck_macros::quickcheck;

    fn sample() -> Graph<String, u32> {
        let mut g: Graph<String, u32> = Graph::new(GraphType::pseudograph().as_weighted()).unwrap();
        for v in ["c", "a", "b"] {
            g.add_vertex(v.to_string()).unwrap();
        }
        let (a, b, c) = ("a".to_string(), "b".to_string(), "c".to_string());
        g.add_edge_with(&b, &a, 7).unwrap();
        g.add_edge_with(&c, &c, 3).unwrap();
        g.add_edge_with(&a, &b, 1).unwrap();
        g.set_edge_weight(&3, 0.5).unwrap();
        g
    }

    #[test]
    fn round_trip_keeps_order_and_weights() {
        let g = sample();
        let bytes = g.to_bytes().unwrap();
        let h: Graph<String, u32> = Graph::from_bytes(&bytes).unwrap();
        assert!(g == h);
        assert_eq!(h.to_string(), "([c, a, b], [(b,a), (c,c), (a,b)])");
        assert_eq!(h.edge_weight(&3).unwrap(), 0.5);
        assert_eq!(h.edge_weight(&7).unwrap(), DEFAULT_EDGE_WEIGHT);
        assert_eq!(h.degree_of(&"c".to_string()).unwrap(), 2);
    }

    #[test]
    fn round_trip_keeps_frozen_graphs_frozen() {
        let g = sample().freeze();
        let h: Graph<String, u32> = Graph::from_bytes(&g.to_bytes().unwrap()).unwrap();
        assert!(!h.graph_type().is_modifiable());
        assert!(g == h);
    }

    #[test]
    fn restored_graphs_keep_tokens_on_their_endpoints() {
        let g = sample();
        let mut h: Graph<String, u32> = Graph::from_bytes(&g.to_bytes().unwrap()).unwrap();
        let registry: EdgeRegistry<String, u32> = EdgeRegistry::thread_default();
        assert_eq!(registry.holders(&7), 2);
        let (a, c) = ("a".to_string(), "c".to_string());
        assert!(h.remove_edge(&7).unwrap());
        assert!(matches!(
            h.add_edge_with(&a, &c, 7),
            Err(GraphError::EdgeAlreadyAttached { .. })
        ));
        drop(g);
        assert!(h.add_edge_with(&a, &c, 7).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        let res: GraphResult<Graph<String, u32>> = Graph::from_bytes(&[1, 2, 3]);
        assert!(matches!(res, Err(GraphError::Serialization(_))));
    }

    #[test]
    fn records_breaking_the_graph_type_are_rejected() {
        let mut g: Graph<u32, u32> = Graph::new(GraphType::directed_pseudograph()).unwrap();
        g.add_vertex(1).unwrap();
        g.add_edge_with(&1, &1, 0).unwrap();
        let bytes = g.to_bytes().unwrap();

        let record: GraphRecord<u32, u32> = bincode::deserialize(&bytes).unwrap();
        let tampered = GraphRecord {
            graph_type: GraphType::directed_simple(),
            ..record
        };
        let bytes = bincode::serialize(&tampered).unwrap();
        let res: GraphResult<Graph<u32, u32>> = Graph::from_bytes(&bytes);
        assert!(matches!(res, Err(GraphError::Serialization(_))));
    }

    #[quickcheck]
    fn round_trip_preserves_structure(ops: Ops) {
        let mut g: Graph<VertexId, EdgeId, IntegerStorage> =
            Graph::new(GraphType::directed_pseudograph()).unwrap();
        ops.apply(&mut g);
        let h: Graph<VertexId, EdgeId, IntegerStorage> = Graph::from_bytes(&g.to_bytes().unwrap()).unwrap();
        assert!(g == h);
        assert_eq!(
            g.edge_set().into_iter().collect::<Vec<_>>(),
            h.edge_set().into_iter().collect::<Vec<_>>()
        );
        for v in g.vertex_set() {
            assert_eq!(g.degree_of(&v).unwrap(), h.degree_of(&v).unwrap());
        }
    }
}
