use std::cmp::Ordering;
use std::cmp::min;
use std::fmt::Debug;

use derive_more::Display;

use crate::derank::derank_by;
use crate::frontier::Frontier;
use crate::space::Cost;

/// Which end of the cost order gets explored first.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum CostOrder {
    /// Smallest cost first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Largest cost first.
    #[display("descending")]
    Descending,
}

impl CostOrder {
    /// Compares two costs so that the one to be explored first is `Less`.
    #[inline(always)]
    #[must_use]
    pub fn rank<C: Ord>(&self, a: &C, b: &C) -> Ordering {
        match self {
            CostOrder::Ascending => a.cmp(b),
            CostOrder::Descending => b.cmp(a),
        }
    }
}

/// An entry of the `CostHeap`.
///
/// Carries the cost and a small handle to the actual node, so heap operations
/// move as little data as possible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostHeapNode<C, T>
where
    C: Cost,
{
    pub cost: C,
    pub node: T,
}

impl<C, T> CostHeapNode<C, T>
where
    C: Cost,
{
    pub fn new(cost: C, node: T) -> Self {
        Self { cost, node }
    }
}

const HEAP_ARITY: usize = 8usize;
#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    crate::heap_primitives::index_parent::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_left(i: usize) -> usize {
    crate::heap_primitives::index_first_children::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_right(i: usize) -> usize {
    crate::heap_primitives::index_last_children::<HEAP_ARITY>(i)
}

/// A priority frontier that pops the best cost according to a `CostOrder`.
///
/// Ties are broken arbitrarily, insertion order is not preserved.
#[derive(Debug)]
pub struct CostHeap<C, T>
where
    C: Cost,
{
    heap: Vec<CostHeapNode<C, T>>,
    order: CostOrder,
}

impl<C, T> CostHeap<C, T>
where
    C: Cost,
    T: Debug,
{
    pub fn new(order: CostOrder) -> Self {
        Self {
            heap: vec![],
            order,
        }
    }
    pub fn with_capacity(order: CostOrder, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            order,
        }
    }

    pub fn order(&self) -> CostOrder {
        self.order
    }

    /// The best entry, if any.
    pub fn peek(&self) -> Option<&CostHeapNode<C, T>> {
        self.heap.first()
    }

    #[inline(always)]
    fn better(&self, l: usize, r: usize) -> bool {
        self.order.rank(&self.heap[l].cost, &self.heap[r].cost) == Ordering::Less
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }

    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        // Every node goes after its parent node, if any.
        for i in 1..self.heap.len() {
            let p = up(i);
            debug_assert!(
                !self.better(i, p),
                "Node[{p}]={:?} ranks worse than child [{i}]={:?}. Out of heap of len={}",
                self.heap[p],
                self.heap[i],
                self.heap.len(),
            );
        }
    }

    /// Pops the top node from a Heap with at least 2 elements.
    ///
    /// Works by unfairly sifting down the top node to the last level, where it
    /// can be swapped with the very last element of the array and popped.
    /// Temporarily breaks invariants around the node sifting down unfairly.
    fn pop_non_trivial_heap(&mut self) -> Option<CostHeapNode<C, T>> {
        debug_assert!(self.heap.len() > 1, "It doesn't get easier. Why are you calling this?");

        // 1. Pretend there's a hole at the root, and bubble the best children up
        //    till the hole reaches the bottom.
        // 2. If the hole is not the last element, swap it for the last one and
        //    restore the order above it.
        // 3. Now the last element is the one that was at the top, pop it.
        let len = self.heap.len();
        let last = len - 1;

        let mut hole = 0;
        let mut child = down_left(hole);
        while child < len {
            debug_assert_eq!(child + HEAP_ARITY, down_right(hole) + 1);
            let order = self.order;
            child += derank_by(&self.heap[child..min(child + HEAP_ARITY, len)], |l, r| {
                order.rank(&l.cost, &r.cost) != Ordering::Greater
            });

            self.heap.swap(hole, child);

            hole = child;
            child = down_left(hole);
        }

        debug_assert!(hole <= last, "The hole={hole} is past last={last}");
        if hole != last {
            self.heap.swap(hole, last);
            self.sift_up(hole);
        }

        self.heap.pop()
    }

    /// Raises a node, returning its new index.
    #[inline(always)]
    fn sift_up(&mut self, index: usize) -> usize {
        debug_assert!(index < self.heap.len(), "Index out of bounds...");

        let mut pos = index;
        while pos > 0 {
            let parent = up(pos);
            if !self.better(pos, parent) {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
        pos
    }
}

impl<C, T> Frontier<CostHeapNode<C, T>> for CostHeap<C, T>
where
    C: Cost,
    T: Debug,
{
    fn push(&mut self, n: CostHeapNode<C, T>) {
        self.verify_heap();
        let heap_index = self.heap.len();
        self.heap.push(n);
        self.sift_up(heap_index);
        self.verify_heap();
    }

    fn pop(&mut self) -> Option<CostHeapNode<C, T>> {
        self.verify_heap();
        let node = match self.heap.len() {
            0 | 1 => self.heap.pop(),
            _ => self.pop_non_trivial_heap(),
        };
        self.verify_heap();
        node
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.heap.len()
    }
    fn capacity(&self) -> usize {
        self.heap.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Score {
        points: u32,
    }
    impl Cost for Score {}

    fn drain(heap: &mut CostHeap<Score, usize>) -> Vec<u32> {
        let mut out = vec![];
        while let Some(n) = heap.pop() {
            out.push(n.cost.points);
        }
        out
    }

    #[test]
    fn heap_works() {
        let mut heap = CostHeap::<Score, usize>::new(CostOrder::Ascending);
        heap.push(CostHeapNode::new(Score { points: 3 }, 7));
        assert_eq!(heap.peek().map(|n| n.node), Some(7));
        assert_eq!(heap.pop(), Some(CostHeapNode::new(Score { points: 3 }, 7)));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn heap_sorts_in_both_orders() {
        for order in [CostOrder::Ascending, CostOrder::Descending] {
            let mut heap = CostHeap::<Score, usize>::new(order);
            for (i, points) in [3, 5, 6, 1, 4, 2, 9, 0, 8, 7].into_iter().enumerate() {
                heap.push(CostHeapNode::new(Score { points }, i));
            }
            let sorted = drain(&mut heap);
            match order {
                CostOrder::Ascending => assert_eq!(sorted, (0..10).collect::<Vec<_>>()),
                CostOrder::Descending => assert_eq!(sorted, (0..10).rev().collect::<Vec<_>>()),
            }
        }
    }

    #[test]
    fn random_pushes_and_pops() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xC057);
        let mut heap = CostHeap::<Score, usize>::with_capacity(CostOrder::Ascending, 1024);
        let mut reference: Vec<u32> = vec![];

        for i in 0..2_000usize {
            if rng.random_bool(0.6) || reference.is_empty() {
                let points = rng.random_range(0..100u32);
                heap.push(CostHeapNode::new(Score { points }, i));
                reference.push(points);
            } else {
                let best = *reference.iter().min().unwrap();
                let at = reference.iter().position(|&p| p == best).unwrap();
                reference.swap_remove(at);
                assert_eq!(heap.pop().map(|n| n.cost.points), Some(best));
            }
            assert_eq!(heap.len(), reference.len());
        }

        reference.sort_unstable();
        assert_eq!(drain(&mut heap), reference);
    }

    #[test]
    fn rank_follows_order() {
        let (a, b) = (Score { points: 1 }, Score { points: 2 });
        assert_eq!(CostOrder::Ascending.rank(&a, &b), Ordering::Less);
        assert_eq!(CostOrder::Descending.rank(&a, &b), Ordering::Greater);
        assert_eq!(CostOrder::default(), CostOrder::Ascending);
    }
}
