//! Dense per-state table.

/// A dense `nodes × (max_depth + 1)` table indexed by `(node, position)`,
/// stored in row-major order (one row per node).
///
/// Holds per-state search data such as best costs and parent links.
///
/// # Examples
///
/// ```
/// use u_primepath::search::StateTable;
///
/// let mut table = StateTable::new(3, 4, u64::MAX);
/// table.set(1, 2, 17);
/// assert_eq!(table.get(1, 2), 17);
/// assert_eq!(table.get(1, 3), u64::MAX);
/// assert_eq!(table.num_nodes(), 3);
/// assert_eq!(table.max_depth(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct StateTable<T> {
    data: Vec<T>,
    nodes: usize,
    width: usize,
}

impl<T: Copy> StateTable<T> {
    /// Creates a table for positions `0..=max_depth`, every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `nodes × (max_depth + 1)` overflows `usize`.
    pub fn new(nodes: usize, max_depth: usize, fill: T) -> Self {
        let Some((width, len)) = max_depth
            .checked_add(1)
            .and_then(|width| Some((width, nodes.checked_mul(width)?)))
        else {
            panic!("state table for {nodes} nodes at depth {max_depth} overflows usize");
        };
        Self {
            data: vec![fill; len],
            nodes,
            width,
        }
    }

    /// Returns the value stored for `(node, position)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, node: usize, position: usize) -> T {
        self.data[self.index(node, position)]
    }

    /// Stores `value` for `(node, position)`.
    pub fn set(&mut self, node: usize, position: usize, value: T) {
        let i = self.index(node, position);
        self.data[i] = value;
    }

    /// All positions of one node, indexed by position.
    pub fn row(&self, node: usize) -> &[T] {
        let start = node * self.width;
        &self.data[start..start + self.width]
    }

    /// Number of nodes (rows).
    pub fn num_nodes(&self) -> usize {
        self.nodes
    }

    /// Largest position stored.
    pub fn max_depth(&self) -> usize {
        self.width - 1
    }

    fn index(&self, node: usize, position: usize) -> usize {
        debug_assert!(position < self.width, "position {position} beyond table");
        node * self.width + position
    }
}

impl<T: Copy + Ord> StateTable<T> {
    /// Position holding the smallest value in `node`'s row.
    ///
    /// Ties resolve to the smallest position. Cells equal to `empty` are
    /// skipped; returns `None` if the whole row is empty.
    pub fn argmin_position(&self, node: usize, empty: T) -> Option<usize> {
        self.row(node)
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != empty)
            .min_by(|(pa, a), (pb, b)| a.cmp(b).then(pa.cmp(pb)))
            .map(|(p, _)| p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_unbounded_depth_panics_cleanly() {
        let _ = StateTable::new(2, usize::MAX, 0u8);
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_table_size_overflow_panics_cleanly() {
        let _ = StateTable::new(usize::MAX / 2, 2, 0u8);
    }

    #[test]
    fn test_new_is_filled() {
        let t = StateTable::new(2, 3, 0u64);
        assert_eq!(t.row(0), &[0, 0, 0, 0]);
        assert_eq!(t.row(1).len(), 4);
    }

    #[test]
    fn test_rows_are_independent() {
        let mut t = StateTable::new(3, 2, 0u64);
        t.set(0, 2, 5);
        t.set(1, 0, 7);
        assert_eq!(t.row(0), &[0, 0, 5]);
        assert_eq!(t.row(1), &[7, 0, 0]);
        assert_eq!(t.row(2), &[0, 0, 0]);
    }

    #[test]
    fn test_zero_depth() {
        let mut t = StateTable::new(2, 0, None::<usize>);
        t.set(1, 0, Some(0));
        assert_eq!(t.get(1, 0), Some(0));
        assert_eq!(t.max_depth(), 0);
    }

    #[test]
    fn test_argmin_position() {
        let mut t = StateTable::new(1, 4, u64::MAX);
        assert_eq!(t.argmin_position(0, u64::MAX), None);
        t.set(0, 3, 10);
        t.set(0, 1, 12);
        assert_eq!(t.argmin_position(0, u64::MAX), Some(3));
        t.set(0, 2, 10);
        // tie: smallest position wins
        assert_eq!(t.argmin_position(0, u64::MAX), Some(2));
    }
}
