use std::fmt::{self, Display};

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    vertices_discovered: usize,
    edges_scanned: usize,
    frontier_pops: usize,
    max_frontier_depth: usize,
}

impl TraversalStats {
    pub fn new() -> Self {
        TraversalStats {
            vertices_discovered: 0,
            edges_scanned: 0,
            frontier_pops: 0,
            max_frontier_depth: 0,
        }
    }

    /// Record that a vertex was marked and pushed, leaving the frontier `depth` deep
    pub fn bump_discovered(&mut self, depth: usize) {
        self.vertices_discovered += 1;
        self.max_frontier_depth = self.max_frontier_depth.max(depth);
    }

    /// Record that `amount` adjacency entries were inspected while looking for an
    /// unmarked neighbor
    pub fn bump_edges(&mut self, amount: usize) {
        self.edges_scanned += amount
    }

    /// Record that an exhausted vertex left the frontier
    pub fn bump_pops(&mut self) {
        self.frontier_pops += 1
    }

    pub fn get_vertices_discovered(&self) -> usize {
        self.vertices_discovered
    }

    pub fn get_edges_scanned(&self) -> usize {
        self.edges_scanned
    }

    pub fn get_frontier_pops(&self) -> usize {
        self.frontier_pops
    }

    pub fn get_max_frontier_depth(&self) -> usize {
        self.max_frontier_depth
    }
}

impl Display for TraversalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "discovered: {}, edges scanned: {}, pops: {}, max depth: {}",
            self.vertices_discovered, self.edges_scanned, self.frontier_pops, self.max_frontier_depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = TraversalStats::new();
        assert_eq!(stats.get_vertices_discovered(), 0);
        assert_eq!(stats.get_edges_scanned(), 0);
        assert_eq!(stats.get_frontier_pops(), 0);
        assert_eq!(stats.get_max_frontier_depth(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(TraversalStats::default(), TraversalStats::new());
    }

    #[test]
    fn test_bump_discovered_tracks_max_depth() {
        let mut stats = TraversalStats::new();
        stats.bump_discovered(1);
        stats.bump_discovered(3);
        stats.bump_discovered(2);
        assert_eq!(stats.get_vertices_discovered(), 3);
        assert_eq!(stats.get_max_frontier_depth(), 3);
    }

    #[test]
    fn test_bump_edges_accumulates() {
        let mut stats = TraversalStats::new();
        stats.bump_edges(5);
        stats.bump_edges(0);
        stats.bump_edges(3);
        assert_eq!(stats.get_edges_scanned(), 8);
        assert_eq!(stats.get_vertices_discovered(), 0);
    }

    #[test]
    fn test_bump_pops() {
        let mut stats = TraversalStats::new();
        stats.bump_pops();
        stats.bump_pops();
        assert_eq!(stats.get_frontier_pops(), 2);
    }

    #[test]
    fn test_display_and_json() {
        let mut stats = TraversalStats::new();
        stats.bump_discovered(1);
        stats.bump_edges(42);

        assert_eq!(
            stats.to_string(),
            "discovered: 1, edges scanned: 42, pops: 0, max depth: 1"
        );

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["edges_scanned"], 42);
        assert_eq!(json["max_frontier_depth"], 1);
    }
}
