//! FIFO queue used to drive level-order traversal.

use std::collections::VecDeque;
use std::fmt;

use itertools::Itertools;

/// First-in-first-out buffer.
///
/// Backed by a `VecDeque` so both ends are O(1) amortized. When used by a
/// traversal it only ever holds arena handles, never the nodes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Appends `element` at the back. Never fails, there is no capacity bound.
    pub fn enqueue(&mut self, element: T) {
        self.elements.push_back(element);
    }

    /// Removes and returns the front element, `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.elements.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_returns_oldest_element() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_is_empty_tracks_contents() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        queue.enqueue(1);
        assert!(!queue.is_empty());
        queue.dequeue();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_display() {
        let queue: Queue<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(queue.to_string(), "[10, 20, 30]");
    }
}
