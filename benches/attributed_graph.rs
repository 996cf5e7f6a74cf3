use attrgraph::{attribute::*, graph::*, low_level::*};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static NODE_SIZE: usize = std::env::var("NODE_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, topology, attributed);
criterion_main!(benches);

fn topology(c: &mut Criterion) {
    let node_size = *NODE_SIZE;
    let edge_size = *EDGE_SIZE;
    c.bench_function("topology/add_node and add_edge", |b| {
        b.iter(|| {
            let mut g = TreeBackedTopology::new();
            let nodes: Vec<_> = (0..node_size).map(|_| g.add_node()).collect();
            for _ in 0..edge_size {
                let (s, t) = random_pair(nodes.len());
                let _ = g.add_edge(nodes[s], nodes[t], s % 2 == 0);
            }
            g
        })
    });
}

fn attributed(c: &mut Criterion) {
    let node_size = *NODE_SIZE;
    println!("NODE_SIZE: {}", node_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    c.bench_function("attributed/add_node", |b| {
        b.iter(|| add_nodes(node_size))
    });
    c.bench_function("attributed/add_node and add_edge", |b| {
        b.iter(|| add_nodes_and_edges(node_size, edge_size))
    });

    let g = add_nodes_and_edges(node_size, edge_size);
    c.bench_function("attributed/iter_nodes", |b| {
        b.iter(|| {
            for v in g.nodes() {
                black_box(v.index());
            }
        })
    });
    c.bench_function("attributed/iter_edges", |b| {
        b.iter(|| {
            for e in g.edges() {
                black_box(e.is_directed());
            }
        })
    });
    c.bench_function("attributed/node by id", |b| {
        b.iter(|| {
            let (s, _) = random_pair(node_size);
            black_box(g.node(&*format!("n{}", s)).map(|v| v.index()))
        })
    });
    c.bench_function("attributed/neighbors", |b| {
        b.iter(|| {
            let (s, _) = random_pair(node_size);
            black_box(g.neighbors(s).count())
        })
    });
    c.bench_function("attributed/remove_edges", |b| {
        let mut g = g.clone();
        b.iter(|| {
            for i in 0..edge_size {
                let _ = black_box(g.remove_edge(&*format!("e{}", i)));
            }
        })
    });
    c.bench_function("attributed/remove_nodes", |b| {
        let mut g = g.clone();
        b.iter(|| {
            for i in 0..node_size {
                let _ = black_box(g.remove_node(&*format!("n{}", i)));
            }
        })
    });
}

fn random_pair(n: usize) -> (usize, usize) {
    let mut rng = rand::thread_rng();
    (rng.gen::<usize>() % n, rng.gen::<usize>() % n)
}

fn add_nodes(node_size: usize) -> AttributedGraph {
    let mut g = AttributedGraph::with_config(
        "bench",
        GraphConfig::default().node_capacity(node_size),
    );
    for i in 0..node_size {
        let v = g.add_node(&format!("n{}", i)).unwrap();
        let _ = v.add_attribute("rank", i);
    }
    g
}

fn add_nodes_and_edges(node_size: usize, edge_size: usize) -> AttributedGraph {
    let mut g = add_nodes(node_size);
    for i in 0..edge_size {
        let (s, t) = random_pair(node_size);
        let _ = g.add_edge(&format!("e{}", i), s, t, i % 2 == 0);
    }
    g
}
