//! Frontier strategies.
//!
//! The frontier (a.k.a. open list) holds the nodes awaiting exploration, and
//! decides which one is explored next.

use std::collections::VecDeque;
use std::fmt::Debug;

/// A container of pending entries.
pub trait Frontier<E>: Debug {
    fn push(&mut self, e: E);
    fn pop(&mut self) -> Option<E>;
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Breadth-first frontier (queue).
///
/// Paths come out in non-decreasing number of transitions.
#[derive(Debug)]
pub struct Fifo<E> {
    queue: VecDeque<E>,
}

impl<E> Fifo<E> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl<E> Default for Fifo<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Debug> Frontier<E> for Fifo<E> {
    #[inline(always)]
    fn push(&mut self, e: E) {
        self.queue.push_back(e);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<E> {
        self.queue.pop_front()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.queue.len()
    }
    fn capacity(&self) -> usize {
        self.queue.capacity()
    }
}

/// Depth-first frontier (stack).
///
/// Memory is bounded by the exploration depth rather than by the frontier
/// width, but paths come out in no particular length order.
#[derive(Debug)]
pub struct Lifo<E> {
    stack: Vec<E>,
}

impl<E> Lifo<E> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }
}

impl<E> Default for Lifo<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Debug> Frontier<E> for Lifo<E> {
    #[inline(always)]
    fn push(&mut self, e: E) {
        self.stack.push(e);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<E> {
        self.stack.pop()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.stack.len()
    }
    fn capacity(&self) -> usize {
        self.stack.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<u8>>(mut f: F) -> Vec<u8> {
        for e in [1, 2, 3] {
            f.push(e);
        }
        assert_eq!(f.len(), 3);
        let mut out = vec![];
        while let Some(e) = f.pop() {
            out.push(e);
        }
        assert!(f.is_empty());
        out
    }

    #[test]
    fn fifo_is_a_queue() {
        assert_eq!(drain(Fifo::new()), vec![1, 2, 3]);
    }

    #[test]
    fn lifo_is_a_stack() {
        assert_eq!(drain(Lifo::new()), vec![3, 2, 1]);
    }

    #[test]
    fn empty_pop() {
        assert_eq!(Fifo::<u8>::default().pop(), None);
        assert_eq!(Lifo::<u8>::default().pop(), None);
    }
}
