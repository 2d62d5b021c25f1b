use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::graph::AdjacencyGraph;

impl AdjacencyGraph {
    /// Random graph with `vertex_count` vertices and `edge_count` edges whose
    /// endpoints are drawn uniformly, seeded from `seed`. This is deterministic.
    ///
    /// Self-loops and parallel edges may occur.
    ///
    /// # Panics
    /// If `edge_count > 0` while `vertex_count == 0`.
    pub fn random_seeded(vertex_count: usize, edge_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(vertex_count, edge_count, &mut rng)
    }

    /// Same as [`AdjacencyGraph::random_seeded`], with a thread-local random source.
    pub fn random(vertex_count: usize, edge_count: usize) -> Self {
        Self::with_rng(vertex_count, edge_count, &mut rand::rng())
    }

    fn with_rng<R: Rng>(vertex_count: usize, edge_count: usize, rng: &mut R) -> Self {
        assert!(
            vertex_count > 0 || edge_count == 0,
            "cannot place {edge_count} edges on an empty graph"
        );

        let mut graph = AdjacencyGraph::new(vertex_count);
        for _ in 0..edge_count {
            let v = rng.random_range(0..vertex_count);
            let w = rng.random_range(0..vertex_count);
            graph.add_edge(v, w);
        }

        info!(vertex_count, edge_count, "generated random graph");
        graph
    }
}
