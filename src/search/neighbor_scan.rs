use crate::{graph::Graph, sets::marks::MarkSet, statistics::TraversalStats};

/// Strategy used by the depth-first traversal to find, for the vertex on top
/// of the frontier, the first neighbor (in adjacency order) that is not marked.
///
/// Marks are never cleared during a traversal, so every strategy returns the
/// same neighbor for the same state. They only differ in how many adjacency
/// entries they inspect to get there.
pub trait NeighborScan {
    /// Per-traversal scratch state, created once and dropped with the traversal.
    type Cursor;

    fn cursor(vertex_count: usize) -> Self::Cursor;

    /// Returns the first unmarked neighbor of `v`, or `None` when all of them
    /// are marked. Inspected entries are recorded into `stats`.
    fn first_unmarked<G, M>(
        cursor: &mut Self::Cursor,
        graph: &G,
        marks: &M,
        v: usize,
        stats: &mut TraversalStats,
    ) -> Option<usize>
    where
        G: Graph + ?Sized,
        M: MarkSet;
}

// Scan mode 1: every lookup restarts from the beginning of the adjacency list.
// A vertex that is returned to k times costs k * degree inspections.
pub struct Rescan;

impl NeighborScan for Rescan {
    type Cursor = ();

    fn cursor(_vertex_count: usize) -> Self::Cursor {}

    fn first_unmarked<G, M>(
        _cursor: &mut Self::Cursor,
        graph: &G,
        marks: &M,
        v: usize,
        stats: &mut TraversalStats,
    ) -> Option<usize>
    where
        G: Graph + ?Sized,
        M: MarkSet,
    {
        let neighbors = graph.neighbors(v);
        match neighbors.iter().position(|&w| !marks.is_marked(w)) {
            Some(offset) => {
                stats.bump_edges(offset + 1);
                Some(neighbors[offset])
            }
            None => {
                stats.bump_edges(neighbors.len());
                None
            }
        }
    }
}

// Scan mode 2: one resume position per vertex. Entries before the position are
// known to be marked, so each adjacency entry is inspected at most once over
// the whole traversal.
pub struct Resume;

impl NeighborScan for Resume {
    type Cursor = Box<[usize]>;

    fn cursor(vertex_count: usize) -> Self::Cursor {
        vec![0; vertex_count].into_boxed_slice()
    }

    fn first_unmarked<G, M>(
        cursor: &mut Self::Cursor,
        graph: &G,
        marks: &M,
        v: usize,
        stats: &mut TraversalStats,
    ) -> Option<usize>
    where
        G: Graph + ?Sized,
        M: MarkSet,
    {
        let neighbors = graph.neighbors(v);
        let start = cursor[v];
        match neighbors[start..].iter().position(|&w| !marks.is_marked(w)) {
            Some(offset) => {
                // the returned neighbor gets marked by the caller right away,
                // so the next lookup can start past it
                cursor[v] = start + offset + 1;
                stats.bump_edges(offset + 1);
                Some(neighbors[start + offset])
            }
            None => {
                cursor[v] = neighbors.len();
                stats.bump_edges(neighbors.len() - start);
                None
            }
        }
    }
}
