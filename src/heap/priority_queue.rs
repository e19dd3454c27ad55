use std::cmp::{max, Ordering};
use std::fmt::{self, Display};

use crate::heap::comparator::{Comparator, NaturalOrder};
use crate::heap::HeapError;

/// The capacity reserved by a freshly created queue.
const INITIAL_CAPACITY: usize = 10;

/// A minimum-oriented priority queue stored as an implicit binary heap.
///
/// For every occupied position `i`, the elements at `2i + 1` and `2i + 2` (when present) are never
/// ranked below the element at `i` by the queue's [`Comparator`]. The queue is comparator-agnostic:
/// ties are resolved only by the comparator, never by the queue itself.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, C = NaturalOrder> {
    /// The heap, laid out level by level.
    elements: Vec<T>,

    /// The number of slots reserved for the heap. It grows by a quarter each time the queue is
    /// full, or more if a bigger size is explicitly requested.
    capacity: usize,

    comparator: C,
}

impl<T: Ord> PriorityQueue<T, NaturalOrder> {
    /// Creates an empty queue ordered by the natural order of `T`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for PriorityQueue<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty queue that orders its elements with the given comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            elements: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            comparator,
        }
    }

    /// Inserts a new element into the queue.
    pub fn push(&mut self, item: T) {
        self.ensure_capacity(self.elements.len() + 1);
        self.elements.push(item);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the minimum element of the queue.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.elements.is_empty() {
            return Err(HeapError::EmptyQueue);
        }

        // the last element takes the place of the root and then sinks to its position.
        let minimum = self.elements.swap_remove(0);
        self.sift_down(0);
        Ok(minimum)
    }

    /// Returns a reference to the minimum element without removing it.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.elements.first().ok_or(HeapError::EmptyQueue)
    }

    /// Removes the first element found that compares as equal to `item` and returns it. Nothing
    /// happens if there is no such element.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let position = self.position_of(item)?;
        let removed = self.elements.swap_remove(position);

        // the hole has been filled with the last element, which could now violate the heap property
        // either with its new parent or with its new children.
        if position < self.elements.len() {
            if position > 0 && self.is_below(position, Self::parent(position)) {
                self.sift_up(position);
            } else {
                self.sift_down(position);
            }
        }

        Some(removed)
    }

    /// Returns true if the queue holds an element that compares as equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.position_of(item).is_some()
    }

    /// Replaces the content of the queue with the given elements, establishing the heap property in
    /// linear time.
    pub fn heapify<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.clear();
        let items = items.into_iter();
        self.ensure_capacity(items.size_hint().0);
        for item in items {
            self.ensure_capacity(self.elements.len() + 1);
            self.elements.push(item);
        }

        for position in (0..self.elements.len() / 2).rev() {
            self.sift_down(position);
        }
    }

    /// Removes every element and brings the capacity back to its initial value.
    pub fn clear(&mut self) {
        self.elements = Vec::with_capacity(INITIAL_CAPACITY);
        self.capacity = INITIAL_CAPACITY;
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The number of slots currently reserved for the heap.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Iterates over the elements in storage order, which is not the extraction order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Empties the queue by repeatedly extracting the minimum, returning the elements sorted
    /// according to the comparator.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks that every element is not ranked below its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|position| !self.is_below(position, Self::parent(position)))
    }

    fn ensure_capacity(&mut self, requested: usize) {
        if requested <= self.capacity {
            return;
        }
        self.capacity = max(requested, self.capacity + (self.capacity >> 2));
        self.elements.reserve_exact(self.capacity - self.elements.len());
    }

    fn position_of(&self, item: &T) -> Option<usize> {
        self.elements
            .iter()
            .position(|element| self.comparator.compare(element, item) == Ordering::Equal)
    }

    #[inline(always)]
    fn parent(position: usize) -> usize {
        (position - 1) / 2
    }

    /// Returns true if the element at `a` has to be extracted before the one at `b`.
    #[inline(always)]
    fn is_below(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.elements[a], &self.elements[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = Self::parent(position);
            if !self.is_below(position, parent) {
                break;
            }
            self.elements.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * position + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.is_below(right, left) {
                right
            } else {
                left
            };

            if !self.is_below(smaller, position) {
                break;
            }
            self.elements.swap(position, smaller);
            position = smaller;
        }
    }
}

impl<T: Display, C> Display for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::comparator::Reversed;

    #[test]
    fn pop_returns_elements_in_ascending_order() {
        let mut queue = PriorityQueue::new();
        for value in [18, 15, 13, 25, 1, 40, 7] {
            queue.push(value);
        }

        assert_eq!(queue.into_sorted_vec(), vec![1, 7, 13, 15, 18, 25, 40]);
    }

    #[test]
    fn pop_and_peek_fail_on_empty_queue() {
        let mut queue = PriorityQueue::<u32>::new();

        assert_eq!(queue.peek(), Err(HeapError::EmptyQueue));
        assert_eq!(queue.pop(), Err(HeapError::EmptyQueue));

        queue.push(3);
        assert_eq!(queue.pop(), Ok(3));
        assert_eq!(queue.pop(), Err(HeapError::EmptyQueue));
    }

    #[test]
    fn capacity_grows_by_a_quarter() {
        let mut queue = PriorityQueue::new();
        for value in 0..INITIAL_CAPACITY {
            queue.push(value);
        }
        assert_eq!(queue.capacity(), INITIAL_CAPACITY);

        queue.push(INITIAL_CAPACITY);
        assert_eq!(queue.capacity(), 12);

        queue.heapify(0..100);
        assert_eq!(queue.capacity(), 100);
        assert_eq!(queue.len(), 100);
    }

    #[test]
    fn remove_keeps_heap_property() {
        let mut queue = PriorityQueue::new();
        queue.heapify([50, 10, 40, 20, 30, 60, 70, 15, 25]);

        assert_eq!(queue.remove(&40), Some(40));
        assert_eq!(queue.remove(&99), None);
        assert!(queue.is_valid());
        assert!(!queue.contains(&40));
        assert!(queue.contains(&70));

        assert_eq!(queue.remove(&10), Some(10));
        assert!(queue.is_valid());
        assert_eq!(queue.peek(), Ok(&15));
    }

    #[test]
    fn removed_hole_filled_by_a_smaller_element_sifts_up() {
        let mut queue = PriorityQueue::new();
        // once heapified, the last element (4) ends up smaller than the parent of 15.
        queue.heapify([1, 10, 2, 11, 12, 4, 5, 13, 14, 15, 16, 3]);
        assert!(queue.is_valid());

        queue.remove(&15);
        assert!(queue.is_valid());
        assert_eq!(queue.into_sorted_vec(), vec![1, 2, 3, 4, 5, 10, 11, 12, 13, 14, 16]);
    }

    #[test]
    fn closures_and_reversed_comparators_are_honoured() {
        let mut by_length = PriorityQueue::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        for word in ["three", "a", "fifteen", "to"] {
            by_length.push(word);
        }
        assert_eq!(by_length.pop(), Ok("a"));
        // equality is decided by the comparator, not by the values
        assert!(by_length.contains(&"xy"));

        let mut max_queue = PriorityQueue::with_comparator(Reversed(NaturalOrder));
        max_queue.heapify([3, 9, 1, 7]);
        assert_eq!(max_queue.into_sorted_vec(), vec![9, 7, 3, 1]);
    }

    #[test]
    fn display_shows_storage_order() {
        let mut queue = PriorityQueue::new();
        assert_eq!(queue.to_string(), "[]");

        queue.push(2);
        queue.push(1);
        assert_eq!(queue.to_string(), "[1,2]");
    }
}
