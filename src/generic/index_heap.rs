/*!
A max heap over a subset of a fixed collection of indexed values.

The heap is backed by a vector of values, one for each index, and a companion vector which tracks the location of an index on the heap, if the index is *active*.
Values persist when an index is removed from the heap, and so the heap also acts as a store of values which may be moved on and off the heap.

For example, the [atom database](crate::db::atom) stores the activity of each atom on an index heap, and the atoms without a value are (at least) those active on the heap.

```rust
# use marten_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(0, 70);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));
assert!(heap.pop_max().is_none());
```
*/

use std::cmp::Ordering;

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index.
    values: Vec<V>,

    /// The position of each index on the heap, if active.
    position_in_heap: Vec<Option<usize>>,

    /// The active indicies, arranged as a heap on their values.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position_in_heap: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Stores `value` at `index`, growing the structure as needed.
    /// Returns true if `index` was fresh, false otherwise.
    ///
    /// The index is not activated.
    /// If the index is active, the heap is updated to respect the value.
    pub fn add(&mut self, index: usize, value: V) -> bool {
        let fresh = self.values.len() <= index;
        if fresh {
            self.values.resize_with(index + 1, V::default);
            self.position_in_heap.resize(index + 1, None);
        }
        self.revalue(index, value);
        fresh
    }

    /// Removes `index` from the heap, if active.
    /// Returns true if `index` was removed, false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(heap_index) = self.heap_index(index) else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.swap(heap_index, last);
        self.heap.pop();
        self.position_in_heap[index] = None;

        if heap_index < self.heap.len() {
            self.heapify_down(heap_index);
            self.heapify_up(heap_index);
        }
        true
    }

    /// Activates `index` on the heap.
    /// Returns true if the index was inactive, false otherwise.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.heap_index(index) {
            None => {
                self.heap.push(index);
                let heap_index = self.heap.len() - 1;
                self.position_in_heap[index] = Some(heap_index);
                self.heapify_up(heap_index);
                true
            }
            Some(_) => false,
        }
    }

    /// True if `index` is active, false otherwise.
    pub fn is_active(&self, index: usize) -> bool {
        self.heap_index(index).is_some()
    }

    /// Restores the heap property around `index`, if active.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(heap_index) = self.heap_index(index) {
            self.heapify_up(heap_index);
            if let Some(heap_index) = self.heap_index(index) {
                self.heapify_down(heap_index);
            }
        }
    }

    /// The active index with the largest value, if any index is active.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Removes and returns the active index with the largest value, if any index is active.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// Rebuilds the heap from the current values of active indicies.
    pub fn heapify(&mut self) {
        for heap_index in (0..self.heap.len() / 2).rev() {
            self.heapify_down(heap_index)
        }
    }

    /// The value stored at `index`.
    ///
    /// # Panics
    /// If `index` has not been added.
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Applies `f` to each stored value.
    ///
    /// As the order of values is unchanged by any monotone `f`, no update is made to the heap.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// Sets the value of `index` to `value`, and updates the heap, if `index` is active.
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value;
        self.heapify_if_active(index);
    }

    /// A count of indicies stored.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of active indicies.
    pub fn active_count(&self) -> usize {
        self.heap.len()
    }

    /// True if no index is active, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn heap_index(&self, index: usize) -> Option<usize> {
        self.position_in_heap.get(index).copied().flatten()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position_in_heap[self.heap[a]] = Some(a);
        self.position_in_heap[self.heap[b]] = Some(b);
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        matches!(
            self.values[self.heap[a]].partial_cmp(&self.values[self.heap[b]]),
            Some(Ordering::Greater)
        )
    }

    /// Moves the index at `heap_index` down the heap until both children are no larger.
    fn heapify_down(&mut self, mut heap_index: usize) {
        loop {
            let left = (2 * heap_index) + 1;
            let right = left + 1;

            let mut largest = heap_index;
            if left < self.heap.len() && self.greater(left, largest) {
                largest = left;
            }
            if right < self.heap.len() && self.greater(right, largest) {
                largest = right;
            }

            if largest == heap_index {
                break;
            }
            self.swap(heap_index, largest);
            heap_index = largest;
        }
    }

    /// Moves the index at `heap_index` up the heap while the parent is smaller.
    fn heapify_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;
            if !self.greater(heap_index, parent) {
                break;
            }
            self.swap(heap_index, parent);
            heap_index = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_simple() {
        let mut heap = IndexHeap::default();
        for (index, value) in [(6, 10), (5, 20), (4, 30), (1, 60), (0, 70)] {
            heap.add(index, value);
            heap.activate(index);
        }

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(6));
        assert!(heap.pop_max().is_none());
    }

    #[test]
    fn heap_revalue() {
        let mut heap = IndexHeap::default();
        for (index, value) in [(6, 10), (4, 30), (1, 60), (0, 70)] {
            heap.add(index, value);
            heap.activate(index);
        }

        heap.revalue(6, 100);
        heap.revalue(0, 0);

        assert_eq!(heap.pop_max(), Some(6));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(0));
    }

    #[test]
    fn heap_scale_then_heapify() {
        let mut heap = IndexHeap::default();
        for index in 0..5 {
            heap.add(index, index as f64);
            heap.activate(index);
        }
        heap.apply_to_all(|value| value * 1e-3);
        heap.heapify();

        assert_eq!(heap.peek_max(), Some(4));
        assert!((heap.value_at(4) - 4e-3).abs() < f64::EPSILON);
    }

    #[test]
    fn heap_remove() {
        let mut heap = IndexHeap::default();
        for index in [6, 5, 4, 1, 0] {
            heap.add(index, index);
            heap.activate(index);
        }

        assert!(heap.remove(4));
        assert!(!heap.remove(4));
        assert!(heap.remove(6));
        assert!(!heap.add(4, 10));
        assert!(heap.activate(4));
        assert!(!heap.activate(4));

        assert_eq!(heap.active_count(), 4);
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
    }
}
