//! Priority frontier ordered by an explicit comparator.
//!
//! `std::collections::BinaryHeap` needs a total `Ord`, but the shortest-path
//! comparator is the negation of a strict order, so equal keys each precede
//! the other. The heap below is a plain array heap driven by a `precedes`
//! function. Sift-up and sift-down follow the textbook procedure step for
//! step, so ties between equal keys resolve the same way on every run.

/// A frontier entry: a node of the search arena plus its ordering key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) node: usize,
    pub(crate) y: i32,
    pub(crate) steps: u32,
}

/// Array binary heap; the root is the entry that precedes all others.
pub(crate) struct Frontier {
    entries: Vec<Entry>,
    precedes: fn(&Entry, &Entry) -> bool,
}

impl Frontier {
    pub(crate) fn new(precedes: fn(&Entry, &Entry) -> bool) -> Self {
        Self {
            entries: Vec::new(),
            precedes,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn push(&mut self, e: Entry) {
        self.entries.push(e);
        self.up(self.entries.len() - 1);
    }

    /// Remove and return the root.
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        let n = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, n);
        self.down(0, n);
        self.entries.pop()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (self.precedes)(&self.entries[i], &self.entries[j])
    }

    fn up(&mut self, mut j: usize) {
        while j > 0 {
            let i = (j - 1) / 2;
            if !self.less(j, i) {
                break;
            }
            self.entries.swap(i, j);
            j = i;
        }
    }

    /// Sift `i` down within the first `n` entries.
    fn down(&mut self, mut i: usize, n: usize) {
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut j = left;
            let right = left + 1;
            if right < n && self.less(right, left) {
                j = right;
            }
            if !self.less(j, i) {
                break;
            }
            self.entries.swap(i, j);
            i = j;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    fn entry(node: usize, y: i32, steps: u32) -> Entry {
        Entry { node, y, steps }
    }

    fn drain(f: &mut Frontier) -> Vec<usize> {
        std::iter::from_fn(|| f.pop()).map(|e| e.node).collect()
    }

    #[test]
    fn empty_pop() {
        let mut f = Frontier::new(Mode::Longest.comparator());
        assert_eq!(f.len(), 0);
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn longest_order() {
        let mut f = Frontier::new(Mode::Longest.comparator());
        f.push(entry(0, 2, 2));
        f.push(entry(1, 0, 1));
        f.push(entry(2, 1, 4));
        f.push(entry(3, 1, 6));
        assert_eq!(f.len(), 4);
        assert_eq!(drain(&mut f), vec![1, 3, 2, 0]);
    }

    #[test]
    fn shortest_order() {
        let mut f = Frontier::new(Mode::Shortest.comparator());
        f.push(entry(0, 0, 1));
        f.push(entry(1, 2, 5));
        f.push(entry(2, 2, 3));
        f.push(entry(3, 1, 1));
        assert_eq!(drain(&mut f), vec![2, 1, 3, 0]);
    }

    #[test]
    fn equal_keys_resolve_by_heap_position() {
        // Under the negated order each equal key precedes the other, so a
        // newly pushed duplicate always climbs to the root.
        let mut f = Frontier::new(Mode::Shortest.comparator());
        f.push(entry(0, 1, 1));
        f.push(entry(1, 1, 1));
        f.push(entry(2, 1, 1));
        assert_eq!(f.pop().map(|e| e.node), Some(2));
    }
}
