use std::fmt;

use crate::{Distance, Error, Result, Vertex};

/// A queued (vertex, distance) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: Vertex,
    pub distance: Distance,
}

/// A fixed-capacity binary min-heap of (vertex, distance) pairs ordered by distance.
///
/// The heap never grows: all storage is allocated up front and a `put` into a
/// full heap fails with [`Error::CapacityExceeded`]. Entries are not deduplicated,
/// so the same vertex may be queued several times with different distances.
///
/// Ties are never swapped in either direction, which makes the pop order of
/// equal-distance entries depend only on the sequence of operations:
/// - sift-up stops at a parent with an equal distance
/// - sift-down prefers the left child when both children are equal
#[derive(Debug)]
pub struct BoundedMinHeap {
    /// Heap array, 0-indexed, `tree.len()` is the logical size
    tree: Vec<HeapEntry>,

    capacity: usize,
}

impl BoundedMinHeap {
    /// Creates an empty heap able to hold `capacity` entries at once
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(BoundedMinHeap {
            tree: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Returns true if no entries are queued
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of queued entries
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns the fixed capacity of the heap
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<HeapEntry> {
        self.tree.first().copied()
    }

    /// Queues `vertex` with the given distance
    pub fn put(&mut self, vertex: Vertex, distance: Distance) -> Result<()> {
        if self.tree.len() == self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let element = HeapEntry { vertex, distance };
        let mut current = self.tree.len();
        self.tree.push(element);

        while current > 0 {
            let parent = (current - 1) / 2;
            if self.tree[parent].distance <= element.distance {
                break;
            }
            self.tree.swap(parent, current);
            current = parent;
        }
        Ok(())
    }

    /// Removes the minimum entry and returns its vertex
    pub fn remove_min(&mut self) -> Result<Vertex> {
        let last = self.tree.pop().ok_or(Error::EmptyQueue)?;
        let size = self.tree.len();
        if size == 0 {
            return Ok(last.vertex);
        }

        let min = std::mem::replace(&mut self.tree[0], last).vertex;

        let mut current = 0;
        // Only internal nodes have children
        while current < size / 2 {
            let mut child = 2 * current + 1;
            if child < size - 1 && self.tree[child].distance > self.tree[child + 1].distance {
                child += 1;
            }
            if self.tree[current].distance <= self.tree[child].distance {
                break;
            }
            self.tree.swap(current, child);
            current = child;
        }

        Ok(min)
    }
}

impl fmt::Display for BoundedMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.tree.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", entry.vertex, entry.distance)?;
        }
        f.write_str("]")
    }
}
