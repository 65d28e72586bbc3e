use std::fmt::Debug;

use crate::{Error, Result};

/// A `(vertex, priority)` pair stored in the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityEntry<P> {
    pub vertex: usize,
    pub priority: P,
}

/// Binary min-heap over vertices with decrease-key support.
///
/// Each vertex has at most one live entry. A vertex→position index tracks
/// where every live entry sits in the heap, so decrease-key locates the entry
/// in O(1) and restores order in O(log n). Entries are never mutated through
/// shared references: an update writes a fresh entry into the indexed slot.
#[derive(Debug, Clone)]
pub struct IndexedMinPriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries; the parent of slot `i` is slot `(i - 1) / 2`
    heap: Vec<PriorityEntry<P>>,

    /// Heap slot of each vertex's live entry, indexed by vertex id
    positions: Vec<Option<usize>>,
}

impl<P> Default for IndexedMinPriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> IndexedMinPriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedMinPriorityQueue {
            heap: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Creates an empty queue sized for vertex ids up to `max_vertex`
    pub fn with_capacity(max_vertex: usize) -> Self {
        IndexedMinPriorityQueue {
            heap: Vec::with_capacity(max_vertex),
            positions: vec![None; max_vertex + 1],
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if `vertex` has a live entry
    pub fn contains(&self, vertex: usize) -> bool {
        self.position(vertex).is_some()
    }

    /// Current priority of `vertex`, if it has a live entry
    pub fn priority(&self, vertex: usize) -> Option<P> {
        self.position(vertex).map(|pos| self.heap[pos].priority)
    }

    /// Adds a new entry for a vertex that is not yet in the queue
    pub fn insert(&mut self, vertex: usize, priority: P) -> Result<()> {
        if self.contains(vertex) {
            return Err(Error::DuplicateEntry(vertex));
        }

        let pos = self.heap.len();
        self.heap.push(PriorityEntry { vertex, priority });
        self.set_position(vertex, Some(pos));
        self.sift_up(pos);

        debug_assert!(self.is_heap(), "heap property violated after insert");
        Ok(())
    }

    /// Removes and returns the entry with the smallest priority
    pub fn extract_min(&mut self) -> Result<PriorityEntry<P>> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.set_position(min.vertex, None);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        debug_assert!(self.is_heap(), "heap property violated after extract_min");
        Ok(min)
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek_min(&self) -> Result<PriorityEntry<P>> {
        self.heap.first().copied().ok_or(Error::EmptyQueue)
    }

    /// Lowers the priority of `vertex`, or inserts it if it has no live entry.
    ///
    /// Raising a priority is rejected with [`Error::PriorityIncrease`].
    pub fn decrease_key(&mut self, vertex: usize, priority: P) -> Result<()> {
        let pos = match self.position(vertex) {
            Some(pos) => pos,
            None => return self.insert(vertex, priority),
        };
        if priority > self.heap[pos].priority {
            return Err(Error::PriorityIncrease(vertex));
        }

        self.heap[pos] = PriorityEntry { vertex, priority };
        self.sift_up(pos);

        debug_assert!(self.is_heap(), "heap property violated after decrease_key");
        Ok(())
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.positions[entry.vertex] = None;
        }
    }

    /// Checks the heap property and the consistency of the position index
    pub fn is_heap(&self) -> bool {
        let ordered = (1..self.heap.len())
            .all(|i| self.heap[(i - 1) / 2].priority <= self.heap[i].priority);
        let indexed = self
            .heap
            .iter()
            .enumerate()
            .all(|(pos, entry)| self.position(entry.vertex) == Some(pos));
        let live = self.positions.iter().filter(|p| p.is_some()).count();

        ordered && indexed && live == self.heap.len()
    }

    fn position(&self, vertex: usize) -> Option<usize> {
        self.positions.get(vertex).copied().flatten()
    }

    fn set_position(&mut self, vertex: usize, pos: Option<usize>) {
        if vertex >= self.positions.len() {
            self.positions.resize(vertex + 1, None);
        }
        self.positions[vertex] = pos;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].vertex] = Some(a);
        self.positions[self.heap[b].vertex] = Some(b);
    }

    /// Moves the entry at `pos` up while its parent has a strictly larger priority
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[parent].priority <= self.heap[pos].priority {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the entry at `pos` down while a child has a strictly smaller priority
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.heap[right].priority < self.heap[left].priority {
                right
            } else {
                left
            };

            if self.heap[smaller].priority >= self.heap[pos].priority {
                break;
            }
            self.swap(pos, smaller);
            pos = smaller;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_entries_through_swaps() {
        let mut queue = IndexedMinPriorityQueue::new();
        for (vertex, priority) in [(4, 40u32), (2, 20), (7, 70), (1, 10), (9, 5)] {
            queue.insert(vertex, priority).unwrap();
        }
        assert_eq!(queue.heap[0].vertex, 9);
        assert_eq!(queue.position(9), Some(0));

        queue.decrease_key(7, 1).unwrap();
        assert_eq!(queue.position(7), Some(0));
        assert!(queue.is_heap());

        queue.extract_min().unwrap();
        assert_eq!(queue.position(7), None);
        assert!(queue.is_heap());
    }

    #[test]
    fn clear_resets_the_index() {
        let mut queue = IndexedMinPriorityQueue::with_capacity(3);
        queue.insert(3, 1u64).unwrap();
        queue.insert(1, 2).unwrap();
        queue.clear();

        assert!(queue.is_empty());
        assert!(!queue.contains(3));
        queue.insert(3, 9).unwrap();
        assert_eq!(queue.priority(3), Some(9));
    }
}
