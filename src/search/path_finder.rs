use tracing::{debug, trace};

use crate::{
    graph::Graph,
    search::neighbor_scan::{NeighborScan, Resume},
    sets::marks::{BitMarks, MarkSet},
    statistics::TraversalStats,
};

/// Paths from a fixed source vertex to every vertex reachable from it.
///
/// # Invariants
/// - `marked[source]` is set.
/// - For every marked `v != source`, `edge_to[v]` is `Some(u)` where `u` is
///   marked and adjacent to `v`. Following `edge_to` from any marked vertex
///   reaches `source` without repeating a vertex: the entries form a tree
///   rooted at `source`.
/// - `edge_to[source]` and `edge_to[v]` for unmarked `v` are `None`.
/// - Nothing changes after construction.
///
/// # Algorithm
/// The constructor runs an iterative depth-first search over an explicit
/// frontier. It repeatedly looks at the vertex on top of the frontier and
/// pushes its first unmarked neighbor, recording where it came from. When the
/// top vertex has no unmarked neighbor left it is popped. The traversal ends
/// when the frontier is empty. The recursive formulation would visit vertices
/// and build `edge_to` in exactly the same order, but its depth is bounded by
/// the native call stack.
///
/// Paths are depth-first paths: they depend on adjacency order and are not
/// shortest paths.
///
/// # Examples
///
/// ```
/// use depthpaths::{graph::AdjacencyGraph, search::PathFinder};
///
/// let graph = AdjacencyGraph::from_edges(5, &[(0, 1), (0, 2), (1, 3), (3, 4)]);
/// let paths = PathFinder::new(&graph, 2);
///
/// assert!(paths.has_path_to(4));
/// assert_eq!(paths.path_to(4), Some(vec![2, 0, 1, 3, 4]));
/// ```
#[derive(Clone, Debug)]
pub struct PathFinder {
    source: usize,
    marked: BitMarks,
    edge_to: Box<[Option<usize>]>,
    stats: TraversalStats,
}

impl PathFinder {
    /// Computes a path between `source` and every other vertex of `graph`,
    /// resuming each adjacency scan where it last stopped.
    ///
    /// # Panics
    /// If `source` is not a vertex of `graph`.
    pub fn new(graph: &(impl Graph + ?Sized), source: usize) -> Self {
        Self::with_scan::<Resume>(graph, source)
    }

    /// Same as [`PathFinder::new`], with an explicit neighbor scan strategy.
    /// Every strategy yields the same marks and the same paths.
    ///
    /// # Panics
    /// If `source` is not a vertex of `graph`.
    pub fn with_scan<S: NeighborScan>(graph: &(impl Graph + ?Sized), source: usize) -> Self {
        let vertex_count = graph.vertex_count();
        assert!(
            source < vertex_count,
            "source vertex {source} is out of range for a graph with {vertex_count} vertices"
        );

        let mut finder = PathFinder {
            source,
            marked: BitMarks::new(vertex_count),
            edge_to: vec![None; vertex_count].into_boxed_slice(),
            stats: TraversalStats::new(),
        };
        finder.dfs::<S>(graph);

        debug!(
            source,
            reached = finder.marked.count(),
            vertex_count,
            edges_scanned = finder.stats.get_edges_scanned(),
            max_depth = finder.stats.get_max_frontier_depth(),
            "depth-first traversal done"
        );
        finder
    }

    fn dfs<S: NeighborScan>(&mut self, graph: &(impl Graph + ?Sized)) {
        let mut cursor = S::cursor(graph.vertex_count());
        let mut frontier = vec![self.source];
        self.marked.mark(self.source);
        self.stats.bump_discovered(frontier.len());

        // the top of the frontier stays in place until it has no unmarked neighbor left
        while let Some(&v) = frontier.last() {
            match S::first_unmarked(&mut cursor, graph, &self.marked, v, &mut self.stats) {
                Some(w) => {
                    self.marked.mark(w);
                    self.edge_to[w] = Some(v);
                    frontier.push(w);
                    self.stats.bump_discovered(frontier.len());
                    trace!(vertex = w, from = v, depth = frontier.len(), "discovered");
                }
                None => {
                    frontier.pop();
                    self.stats.bump_pops();
                }
            }
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.edge_to.len()
    }

    /// Number of vertices reachable from the source, the source included.
    pub fn reachable_count(&self) -> usize {
        self.marked.count()
    }

    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }

    /// Is there a path between the source vertex and `v`?
    ///
    /// # Panics
    /// If `v` is not a vertex of the graph.
    pub fn has_path_to(&self, v: usize) -> bool {
        self.validate_vertex(v);
        self.marked.is_marked(v)
    }

    /// The vertex from which `v` was first discovered. `None` for the source
    /// and for vertices that cannot be reached.
    ///
    /// # Panics
    /// If `v` is not a vertex of the graph.
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.validate_vertex(v);
        self.edge_to[v]
    }

    /// A path from the source to `v`, both ends included, or `None` if `v`
    /// cannot be reached. Each call returns a new vector.
    ///
    /// # Panics
    /// If `v` is not a vertex of the graph.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(v) {
            return None;
        }

        // edge_to ends the chain at the source
        let mut path: Vec<usize> = std::iter::successors(Some(v), |&x| self.edge_to[x]).collect();
        path.reverse();
        Some(path)
    }

    fn validate_vertex(&self, v: usize) {
        assert!(
            v < self.edge_to.len(),
            "vertex {v} is out of range for a graph with {} vertices",
            self.edge_to.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::{graph::AdjacencyGraph, search::Rescan};

    // Vertices 0..5, edges 0-1, 0-2, 1-3, 3-4
    // Adjacency: 0: [1, 2], 1: [0, 3], 2: [0], 3: [1, 4], 4: [3]
    fn setup_exercise_graph() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(5, &[(0, 1), (0, 2), (1, 3), (3, 4)])
    }

    fn bfs_reachable(graph: &AdjacencyGraph, source: usize) -> Vec<bool> {
        let mut seen = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::from([source]);
        seen[source] = true;
        while let Some(v) = queue.pop_front() {
            for &w in graph.neighbors(v) {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        seen
    }

    fn recursive_edge_to(graph: &AdjacencyGraph, source: usize) -> Vec<Option<usize>> {
        fn visit(graph: &AdjacencyGraph, v: usize, marked: &mut [bool], edge_to: &mut [Option<usize>]) {
            marked[v] = true;
            for &w in graph.neighbors(v) {
                if !marked[w] {
                    edge_to[w] = Some(v);
                    visit(graph, w, marked, edge_to);
                }
            }
        }

        let mut marked = vec![false; graph.vertex_count()];
        let mut edge_to = vec![None; graph.vertex_count()];
        visit(graph, source, &mut marked, &mut edge_to);
        edge_to
    }

    fn assert_valid_path(graph: &AdjacencyGraph, source: usize, target: usize, path: &[usize]) {
        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&target));
        for pair in path.windows(2) {
            assert!(
                graph.neighbors(pair[0]).contains(&pair[1]),
                "{} - {} is not an edge",
                pair[0],
                pair[1]
            );
        }
        let distinct: HashSet<_> = path.iter().collect();
        assert_eq!(distinct.len(), path.len(), "path {path:?} repeats a vertex");
    }

    #[test]
    fn test_exercise_graph_from_vertex_2() {
        let graph = setup_exercise_graph();
        let paths = PathFinder::new(&graph, 2);

        for v in 0..5 {
            assert!(paths.has_path_to(v));
        }
        assert_eq!(paths.path_to(4), Some(vec![2, 0, 1, 3, 4]));
        assert_eq!(paths.path_to(2), Some(vec![2]));
        assert_eq!(paths.path_to(0), Some(vec![2, 0]));
        assert_eq!(paths.reachable_count(), 5);

        assert_eq!(paths.predecessor(2), None);
        assert_eq!(paths.predecessor(0), Some(2));
        assert_eq!(paths.predecessor(1), Some(0));
        assert_eq!(paths.predecessor(3), Some(1));
        assert_eq!(paths.predecessor(4), Some(3));
    }

    #[test]
    fn test_disconnected_vertex_has_no_path() {
        let graph = AdjacencyGraph::from_edges(3, &[(0, 1)]);
        let paths = PathFinder::new(&graph, 0);

        assert!(!paths.has_path_to(2));
        assert_eq!(paths.path_to(2), None);
        assert_eq!(paths.predecessor(2), None);
        assert_eq!(paths.path_to(1), Some(vec![0, 1]));
        assert_eq!(paths.reachable_count(), 2);
    }

    #[test]
    fn test_single_vertex_graph() {
        let graph = AdjacencyGraph::new(1);
        let paths = PathFinder::new(&graph, 0);

        assert!(paths.has_path_to(0));
        assert_eq!(paths.path_to(0), Some(vec![0]));
        assert_eq!(paths.source(), 0);
        assert_eq!(paths.vertex_count(), 1);
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let graph = AdjacencyGraph::from_edges(3, &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 2)]);
        let paths = PathFinder::new(&graph, 0);

        assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(paths.predecessor(0), None);
    }

    #[test]
    fn test_path_to_is_idempotent() {
        let graph = setup_exercise_graph();
        let paths = PathFinder::new(&graph, 2);

        let first = paths.path_to(4);
        let second = paths.path_to(4);
        assert_eq!(first, second);
        assert_ne!(first.unwrap().as_ptr(), second.unwrap().as_ptr());
    }

    #[test]
    fn test_depth_first_path_is_not_shortest() {
        // triangle 0-1-2 with 0 listing 1 first: the path to 2 goes through 1
        let graph = AdjacencyGraph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]);
        let paths = PathFinder::new(&graph, 0);

        assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_stats_on_exercise_graph() {
        let graph = setup_exercise_graph();
        let paths = PathFinder::new(&graph, 2);
        let stats = paths.stats();

        assert_eq!(stats.get_vertices_discovered(), 5);
        assert_eq!(stats.get_frontier_pops(), 5);
        // frontier holds 2, 0, 1, 3, 4 at its deepest
        assert_eq!(stats.get_max_frontier_depth(), 5);
        // each adjacency entry is inspected once when scans resume
        assert_eq!(stats.get_edges_scanned(), 8);
    }

    #[test]
    fn test_rescan_inspects_more_entries() {
        let graph = setup_exercise_graph();
        let resumed = PathFinder::new(&graph, 2);
        let rescanned = PathFinder::with_scan::<Rescan>(&graph, 2);

        assert!(
            rescanned.stats().get_edges_scanned() > resumed.stats().get_edges_scanned()
        );
        assert_eq!(
            rescanned.stats().get_vertices_discovered(),
            resumed.stats().get_vertices_discovered()
        );
    }

    #[test]
    fn test_scans_build_identical_trees() {
        for seed in 0..20 {
            let graph = AdjacencyGraph::random_seeded(60, 70, seed);
            let resumed = PathFinder::new(&graph, 0);
            let rescanned = PathFinder::with_scan::<Rescan>(&graph, 0);

            for v in 0..60 {
                assert_eq!(resumed.has_path_to(v), rescanned.has_path_to(v));
                assert_eq!(resumed.predecessor(v), rescanned.predecessor(v));
            }
        }
    }

    #[test]
    fn test_matches_recursive_formulation() {
        for seed in 0..20 {
            let graph = AdjacencyGraph::random_seeded(40, 55, seed);
            let source = (seed as usize) % 40;
            let paths = PathFinder::new(&graph, source);
            let expected = recursive_edge_to(&graph, source);

            for (v, &edge) in expected.iter().enumerate() {
                assert_eq!(paths.predecessor(v), edge, "seed {seed}, vertex {v}");
            }
        }
    }

    #[test]
    fn test_reachability_matches_bfs_on_random_graphs() {
        for seed in 0..30 {
            // sparse graphs so that several components show up
            let graph = AdjacencyGraph::random_seeded(80, 60, seed);
            let source = (seed as usize * 7) % 80;
            let paths = PathFinder::new(&graph, source);
            let reachable = bfs_reachable(&graph, source);

            assert!(paths.has_path_to(source));
            for v in 0..80 {
                assert_eq!(paths.has_path_to(v), reachable[v], "seed {seed}, vertex {v}");
                match paths.path_to(v) {
                    Some(path) => assert_valid_path(&graph, source, v, &path),
                    None => assert!(!reachable[v]),
                }
            }
            assert_eq!(
                paths.reachable_count(),
                reachable.iter().filter(|&&r| r).count()
            );
        }
    }

    #[test]
    fn test_predecessors_are_marked_neighbors() {
        let graph = AdjacencyGraph::random_seeded(100, 150, 99);
        let paths = PathFinder::new(&graph, 5);

        for v in 0..100 {
            if let Some(u) = paths.predecessor(v) {
                assert!(paths.has_path_to(u));
                assert!(graph.neighbors(v).contains(&u));
            }
        }
    }

    #[test]
    fn test_deep_path_graph_does_not_overflow() {
        let n = 500_000;
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|v| (v, v + 1)).collect();
        let graph = AdjacencyGraph::from_edges(n, &edges);
        let paths = PathFinder::new(&graph, 0);

        assert!(paths.has_path_to(n - 1));
        assert_eq!(paths.stats().get_max_frontier_depth(), n);

        let path = paths.path_to(n - 1).unwrap();
        assert_eq!(path.len(), n);
        assert!(path.iter().copied().eq(0..n));
    }

    #[test]
    fn test_queries_from_many_threads() {
        let graph = setup_exercise_graph();
        let paths = std::sync::Arc::new(PathFinder::new(&graph, 2));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let paths = std::sync::Arc::clone(&paths);
                std::thread::spawn(move || paths.path_to(4))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(vec![2, 0, 1, 3, 4]));
        }
    }

    #[test]
    #[should_panic(expected = "source vertex 5 is out of range")]
    fn test_source_out_of_range_panics() {
        let graph = setup_exercise_graph();
        PathFinder::new(&graph, 5);
    }

    #[test]
    #[should_panic]
    fn test_empty_graph_has_no_valid_source() {
        let graph = AdjacencyGraph::new(0);
        PathFinder::new(&graph, 0);
    }

    #[test]
    #[should_panic(expected = "vertex 7 is out of range")]
    fn test_has_path_to_out_of_range_panics() {
        let graph = setup_exercise_graph();
        let paths = PathFinder::new(&graph, 0);
        paths.has_path_to(7);
    }

    #[test]
    #[should_panic]
    fn test_path_to_out_of_range_panics() {
        let graph = setup_exercise_graph();
        let paths = PathFinder::new(&graph, 0);
        paths.path_to(5);
    }
}
