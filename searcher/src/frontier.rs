//! Containers which order the frontier of a search.
//!
//! None of these know anything about searching: they only decide which
//! item comes out next.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::{BinaryHeap, VecDeque};
use std::default::Default;

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Item;

    fn pop(&mut self) -> Option<Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchQueue for Stack<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.items.pop()
    }

    fn push(&mut self, item: Self::Item) {
        self.items.push(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First in, first out.
#[derive(Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchQueue for Queue<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.items.pop_front()
    }

    fn push(&mut self, item: Self::Item) {
        self.items.push_back(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Wrapper which sorts heap entries so that the smallest
/// priority, then the oldest insertion, is popped first.
#[derive(Debug)]
struct Prioritized<T, P> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<T, P> PartialEq for Prioritized<T, P>
where
    P: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P> Eq for Prioritized<T, P> where P: PartialOrd {}

impl<T, P> Ord for Prioritized<T, P>
where
    P: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T, P> PartialOrd for Prioritized<T, P>
where
    P: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with insertion-order tie breaking.
///
/// There is no decrease-key: pushing the same logical item again with a
/// better priority leaves the old entry in place, and callers are expected
/// to skip stale entries when they pop them.
///
/// Priorities which can't be compared (e.g. `NaN`) are treated as equal.
#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Prioritized<T, P>>,
    sequence: u64,
}

impl<T, P> PriorityQueue<T, P>
where
    P: PartialOrd,
{
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Prioritized {
            priority,
            sequence: self.sequence,
            item,
        });
        self.sequence += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|p| p.item)
    }

    /// Priority of the item which would be popped next.
    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|p| &p.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}
