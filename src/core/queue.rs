//! Generic first-in, first-out queue.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered FIFO container over a single element type.
///
/// Elements leave the queue in exactly the order they entered. Dequeuing
/// from an empty queue is an ordinary outcome and yields `None`.
///
/// # Example
///
/// ```rust
/// use shapekit::core::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), Some(3));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item to the tail of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the earliest-inserted remaining item.
    ///
    /// Returns `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Look at the item the next `dequeue` would return.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of items waiting to be dequeued.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is waiting; `dequeue` would return `None`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from front (oldest) to back (newest) without consuming.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Drop every waiting item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    /// Drains the queue in dequeue order.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
