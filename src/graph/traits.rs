/// Read-only view of an undirected graph whose vertices are `0..vertex_count()`.
///
/// # Invariants
/// - Every index returned by `neighbors(v)` is smaller than `vertex_count()`.
/// - The relation is symmetric: if `w` appears in `neighbors(v)`, `v` appears
///   in `neighbors(w)`.
/// - Repeated calls to `neighbors(v)` return the same sequence in the same
///   order for the lifetime of the value.
pub trait Graph {
    fn vertex_count(&self) -> usize;

    /// Adjacency list of `v`, in enumeration order.
    ///
    /// # Panics
    /// Implementations panic if `v >= vertex_count()`.
    fn neighbors(&self, v: usize) -> &[usize];
}

impl<G: Graph + ?Sized> Graph for &G {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn neighbors(&self, v: usize) -> &[usize] {
        (**self).neighbors(v)
    }
}
