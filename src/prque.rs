use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry ranked by priority. Equal priorities rank the earlier push higher, so
/// both queues below behave deterministically on ties.
struct Element<V> {
    value: V,
    priority: f64,
    seq: u64,
}

impl<V> Ord for Element<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<V> PartialOrd for Element<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Eq for Element<V> {}

impl<V> PartialEq for Element<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// Max-queue: `pop` yields the highest priority first, FIFO among equals.
pub struct PriorityQueue<V> {
    heap: BinaryHeap<Element<V>>,
    next_seq: u64,
}

impl<V> PriorityQueue<V> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, value: V, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Element {
            value,
            priority,
            seq,
        });
    }

    pub fn pop(&mut self) -> Option<(V, f64)> {
        self.heap.pop().map(|el| (el.value, el.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V> Default for PriorityQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the `capacity` highest-priority values offered so far.
///
/// The weakest retained value sits on top of a min-heap. Once the queue is full a new
/// value only gets in by strictly beating it; among equal priorities the most
/// recently admitted value is the first to go.
pub struct BoundedQueue<V> {
    heap: BinaryHeap<Reverse<Element<V>>>,
    capacity: usize,
    next_seq: u64,
}

impl<V> BoundedQueue<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            capacity,
            next_seq: 0,
        }
    }

    /// Returns whether `value` was admitted.
    pub fn offer(&mut self, value: V, priority: f64) -> bool {
        if self.heap.len() >= self.capacity {
            let beats_weakest = self
                .heap
                .peek()
                .map_or(false, |Reverse(weakest)| priority > weakest.priority);
            if !beats_weakest {
                return false;
            }
            self.heap.pop();
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Element {
            value,
            priority,
            seq,
        }));
        true
    }

    /// Priority a newcomer has to beat, once the queue is full.
    pub fn threshold(&self) -> Option<f64> {
        if self.is_full() {
            self.heap.peek().map(|Reverse(weakest)| weakest.priority)
        } else {
            None
        }
    }

    /// Whether something with priority up to `bound` could still be admitted.
    pub fn could_admit(&self, bound: f64) -> bool {
        match self.threshold() {
            None => true,
            Some(threshold) => bound > threshold,
        }
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drains the queue strongest first.
    pub fn into_sorted_vec(self) -> Vec<(V, f64)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(el)| (el.value, el.priority))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_prque_pops_highest_bound_first() {
        let mut frontier = PriorityQueue::new();
        frontier.push((0, "c"), 8.0);
        frontier.push((3, "d"), 1.0);
        frontier.push((1, "ca"), 8.0);
        frontier.push((5, "cab"), 2.5);
        assert_eq!(frontier.len(), 4);

        let expected = vec![
            ((0, "c"), 8.0),
            ((1, "ca"), 8.0),
            ((5, "cab"), 2.5),
            ((3, "d"), 1.0),
        ];
        let mut got = Vec::with_capacity(frontier.len());
        while let Some(entry) = frontier.pop() {
            got.push(entry);
        }

        assert_eq!(got, expected);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_prque_ties_pop_in_push_order() {
        let mut queue = PriorityQueue::new();
        queue.push("first", 5.0);
        queue.push("second", 5.0);
        queue.push("top", 7.0);
        queue.push("third", 5.0);

        let order: Vec<_> = std::iter::from_fn(|| queue.pop().map(|(v, _)| v)).collect();
        assert_eq!(order, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_bounded_keeps_best() {
        let mut best = BoundedQueue::new(2);
        assert!(best.offer("a", 1.0));
        assert!(best.offer("b", 4.0));
        assert!(best.is_full());
        assert!(best.offer("c", 3.0));
        assert!(!best.offer("d", 2.0));

        assert_eq!(best.threshold(), Some(3.0));
        assert_eq!(best.into_sorted_vec(), vec![("b", 4.0), ("c", 3.0)]);
    }

    #[test]
    fn test_bounded_ties_do_not_evict() {
        let mut best = BoundedQueue::new(1);
        assert!(best.offer("first", 2.0));
        assert!(!best.offer("second", 2.0));
        assert!(!best.could_admit(2.0));
        assert!(best.could_admit(2.5));

        assert_eq!(best.into_sorted_vec(), vec![("first", 2.0)]);
    }

    #[test]
    fn test_bounded_evicts_latest_among_equal_weakest() {
        let mut best = BoundedQueue::new(3);
        best.offer("x", 1.0);
        best.offer("y", 1.0);
        best.offer("z", 1.0);
        best.offer("w", 9.0);

        assert_eq!(best.into_sorted_vec(), vec![("w", 9.0), ("x", 1.0), ("y", 1.0)]);
    }

    #[test]
    fn test_bounded_threshold_only_when_full() {
        let mut best = BoundedQueue::new(2);
        best.offer((), 1.0);

        assert_eq!(best.threshold(), None);
        assert!(best.could_admit(0.5));
    }
}
