use std::cmp::Ordering;

use thiserror::Error;

/// Binary min-heap ordered by `T: Ord`.
///
/// Ties are resolved by `Ord` alone, so two heaps fed the same elements in
/// the same order always pop them in the same order.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeapError {
    #[error("extract from an empty heap")]
    Underflow,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn build(source: Vec<T>) -> Self {
        let mut heap = MinHeap { elements: source };
        let n = heap.heap_size();
        for i in (0..n / 2).rev() {
            heap.min_heapify(i);
        }
        heap
    }

    #[cfg(test)]
    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size())
            .all(|i| self.elements[Self::parent(i)] <= self.elements[i])
    }

    fn min_heapify(&mut self, mut i: usize) {
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < self.heap_size() && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < self.heap_size() && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let mut i = self.heap_size() - 1;
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[i].cmp(&self.elements[p]) != Ordering::Less {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Underflow);
        }
        let last = self.heap_size() - 1;
        self.elements.swap(0, last);
        let result = self.elements.pop().ok_or(HeapError::Underflow)?;
        self.min_heapify(0);
        Ok(result)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
