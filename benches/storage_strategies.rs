use algograph_store::graph::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, default_storage, integer_storage);
criterion_main!(benches);

fn default_storage(c: &mut Criterion) {
    cases::<DefaultStorage>(c, "default_storage");
}

fn integer_storage(c: &mut Criterion) {
    cases::<IntegerStorage>(c, "integer_storage");
}

type G<S> = Graph<VertexId, EdgeId, S>;

fn cases<S>(c: &mut Criterion, prefix: &str)
where
    S: StorageStrategy<VertexId, EdgeId>,
{
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    c.bench_function(&(prefix.to_string() + "/add_vertex"), |b| {
        b.iter(|| add_vertices::<S>(vertex_size))
    });
    c.bench_function(&(prefix.to_string() + "/add_vertex and add_edge"), |b| {
        b.iter(|| add_vertices_and_edges::<S>(vertex_size, edge_size))
    });

    let (g, vertices, edges) = add_vertices_and_edges::<S>(vertex_size, edge_size);
    c.bench_function(&(prefix.to_string() + "/vertex_set"), |b| {
        b.iter(|| black_box(g.vertex_set()))
    });
    c.bench_function(&(prefix.to_string() + "/edge_set"), |b| {
        b.iter(|| black_box(g.edge_set()))
    });
    c.bench_function(&(prefix.to_string() + "/contains_vertex"), |b| {
        b.iter(|| contains_vertex(&g, &vertices))
    });
    c.bench_function(&(prefix.to_string() + "/contains_edge"), |b| {
        b.iter(|| contains_edge(&g, &edges))
    });
    c.bench_function(&(prefix.to_string() + "/degree_of"), |b| {
        b.iter(|| degree_of(&g, &vertices))
    });
    c.bench_function(&(prefix.to_string() + "/remove_edges"), |b| {
        b.iter_batched(
            || add_vertices_and_edges::<S>(vertex_size, edge_size),
            |(mut g, _, edges)| remove_edges(&mut g, &edges),
            BatchSize::LargeInput,
        )
    });
    c.bench_function(&(prefix.to_string() + "/remove_vertices"), |b| {
        b.iter_batched(
            || add_vertices_and_edges::<S>(vertex_size, edge_size),
            |(mut g, vertices, _)| remove_vertices(&mut g, &vertices),
            BatchSize::LargeInput,
        )
    });
}

fn new_graph<S>() -> G<S>
where
    S: StorageStrategy<VertexId, EdgeId>,
{
    GraphBuilder::new(GraphType::directed_pseudograph())
        .storage::<S>()
        .vertex_supplier(VertexIdFactory::new())
        .edge_supplier(EdgeIdFactory::new())
        .isolated()
        .build()
        .unwrap()
}

fn add_vertices<S>(vertex_size: usize) -> G<S>
where
    S: StorageStrategy<VertexId, EdgeId>,
{
    let mut g = new_graph::<S>();
    for _ in 0..vertex_size {
        let _ = g.add_new_vertex();
    }
    g
}

fn add_vertices_and_edges<S>(
    vertex_size: usize,
    edge_size: usize,
) -> (G<S>, Vec<VertexId>, Vec<EdgeId>)
where
    S: StorageStrategy<VertexId, EdgeId>,
{
    let mut g = new_graph::<S>();
    let mut vertices = vec![];
    let mut edges = vec![];
    for _ in 0..vertex_size {
        let vid = g.add_new_vertex().unwrap();
        vertices.push(vid);
    }
    for _ in 0..edge_size {
        let v0 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        let v1 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        if let Some(eid) = g.add_edge(&v0, &v1).unwrap() {
            edges.push(eid);
        }
    }
    (g, vertices, edges)
}

fn contains_vertex<S>(g: &G<S>, vertices: &[VertexId])
where
    S: StorageStrategy<VertexId, EdgeId>,
{
    let vid = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
    black_box(g.contains_vertex(&vid));
}

fn contains_edge<S>(g: &G<S>, edges: &[EdgeId])
where
    S: StorageStrategy<VertexId, EdgeId>,
{
    let eid = edges[rand::thread_rng().gen::<usize>() % edges.len()];
    black_box(g.contains_edge(&eid));
}

fn degree_of<S>(g: &G<S>, vertices: &[VertexId])
where
    S: StorageStrategy<VertexId, EdgeId>,
{
    let vid = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
    black_box(g.degree_of(&vid).unwrap());
}

fn remove_edges<S>(g: &mut G<S>, edges: &[EdgeId])
where
    S: StorageStrategy<VertexId, EdgeId>,
{
    for e in edges {
        let _ = black_box(g.remove_edge(e));
    }
}

fn remove_vertices<S>(g: &mut G<S>, vertices: &[VertexId])
where
    S: StorageStrategy<VertexId, EdgeId>,
{
    for v in vertices {
        let _ = black_box(g.remove_vertex(v));
    }
}
