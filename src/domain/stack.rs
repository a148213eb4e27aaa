//! Last-in-first-out stack.

use std::fmt;

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    storage: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    pub fn push(&mut self, element: T) {
        self.storage.push(element);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.storage.last()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().collect(),
        }
    }
}

/// Renders the top element first, framed by dividers:
///
/// ```text
/// -----top-----
/// 5
/// 10
/// ----------
/// ```
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-----top-----")?;
        let elements = self.storage.iter().rev().join("\n");
        if !elements.is_empty() {
            writeln!(f, "{}", elements)?;
        }
        write!(f, "----------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_returns_last_pushed() {
        let mut stack = Stack::new();
        stack.push(20);
        stack.push(10);
        stack.push(5);
        assert_eq!(stack.peek(), Some(&5));
        assert_eq!(stack.pop(), Some(5));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_display_top_first() {
        let stack: Stack<i32> = [20, 10, 5].into_iter().collect();
        assert_eq!(stack.to_string(), "-----top-----\n5\n10\n20\n----------");
    }

    #[test]
    fn test_display_empty() {
        let stack: Stack<i32> = Stack::new();
        assert_eq!(stack.to_string(), "-----top-----\n----------");
    }
}
