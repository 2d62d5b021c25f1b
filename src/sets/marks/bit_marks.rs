use crate::sets::marks::MarkSet;

/// A fixed-capacity set of vertex marks packed into 64-bit words.
///
/// # Examples
///
/// ```
/// use depthpaths::sets::marks::{BitMarks, MarkSet};
///
/// let mut marks = BitMarks::new(10);
/// assert!(!marks.is_marked(3));
///
/// assert!(marks.mark(3));
/// assert!(marks.is_marked(3));
/// assert_eq!(marks.count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct BitMarks {
    words: Box<[u64]>,
    capacity: usize,
    count: usize,
}

impl BitMarks {
    /// Constructs a new [`BitMarks`] with room for `capacity` vertices,
    /// none of them marked.
    pub fn new(capacity: usize) -> Self {
        BitMarks {
            words: vec![0u64; capacity.div_ceil(64)].into_boxed_slice(),
            capacity,
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of marked vertices.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Iterates over the marks of `0..capacity`, in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.capacity).map(|v| self.is_marked(v))
    }
}

impl MarkSet for BitMarks {
    /// # Panics
    ///
    /// Panics if `v >= capacity`.
    fn is_marked(&self, v: usize) -> bool {
        assert!(v < self.capacity);

        self.words[v / 64] & (1u64 << (v % 64)) != 0
    }

    /// # Panics
    ///
    /// Panics if `v >= capacity`.
    fn mark(&mut self, v: usize) -> bool {
        assert!(v < self.capacity);

        let word = &mut self.words[v / 64];
        let bit = 1u64 << (v % 64);
        let fresh = *word & bit == 0;
        *word |= bit;
        if fresh {
            self.count += 1;
        }
        fresh
    }
}
