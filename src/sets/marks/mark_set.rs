/// Write-once boolean marks over vertex indices.
///
/// A mark, once set, is never cleared. Traversals rely on this to skip
/// adjacency entries for good.
pub trait MarkSet {
    fn is_marked(&self, v: usize) -> bool;

    /// Marks `v`. Returns `true` if `v` was not marked before.
    fn mark(&mut self, v: usize) -> bool;
}
