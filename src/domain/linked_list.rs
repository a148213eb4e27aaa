//! Singly linked list: head points at the first node, the last node points at nothing.

use std::fmt;

use itertools::Itertools;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds `value` as the new head.
    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Adds `value` as the new tail.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Removes the head.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Removes the tail.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.pop();
        }
        self.remove_after(self.len - 2)
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Value of the node at `index`, `None` past the tail.
    pub fn node_at(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Inserts `value` directly after the node at `index`.
    /// Returns `false` and leaves the list untouched if there is no such node.
    pub fn insert_after(&mut self, index: usize, value: T) -> bool {
        match self.node_at_mut(index) {
            Some(node) => {
                let next = node.next.take();
                node.next = Some(Box::new(Node { value, next }));
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Unlinks the node following the one at `index` and returns its value.
    pub fn remove_after(&mut self, index: usize) -> Option<T> {
        let node = self.node_at_mut(index)?;
        let removed = node.next.take()?;
        node.next = removed.next;
        self.len -= 1;
        Some(removed.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor?.next.as_deref_mut();
        }
        cursor
    }
}

// Unlink iteratively, the default drop would recurse once per node.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push(value);
        }
        list
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty List");
        }
        write!(f, "{}", self.iter().join(" -> "))
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
