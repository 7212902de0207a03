//! Seeded random directed graphs.
//!
//! Nodes charge a toll when entered, so the graph doubles as a `CostSpace`.
//! Nodes can also be forbidden, which the invariant rejects.

use std::collections::VecDeque;

use derive_more::Display;

use crate::space::Cost;
use crate::space::CostSpace;
use crate::space::Space;
use crate::space::State;
use crate::space::Transition;

const MAX_TOLL: u32 = 9;

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
#[display("#{id}")]
pub struct GraphNode {
    pub id: usize,
}
impl State for GraphNode {}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
#[display("-> #{to}")]
pub struct Edge {
    pub to: usize,
}

impl Transition<GraphNode> for Edge {
    #[inline(always)]
    fn apply(&self, s: &mut GraphNode) {
        s.id = self.to;
    }
}

/// Sum of the tolls paid along a path.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Toll(pub u32);
impl Cost for Toll {}

#[derive(Clone)]
pub struct RandomGraphSpace {
    edges: Vec<Vec<usize>>,
    tolls: Vec<u32>,
    forbidden: Vec<bool>,
}

impl RandomGraphSpace {
    /// Builds a graph of `nodes` nodes with up to `max_degree` out-edges each.
    ///
    /// Parallel edges and self-loops are allowed.
    pub fn new<R: rand::Rng>(rng: &mut R, nodes: usize, max_degree: usize) -> Self {
        let mut edges = Vec::with_capacity(nodes);
        let mut tolls = Vec::with_capacity(nodes);
        for _ in 0..nodes {
            let degree = rng.random_range(0..=max_degree);
            edges.push((0..degree).map(|_| rng.random_range(0..nodes)).collect());
            tolls.push(rng.random_range(1..=MAX_TOLL));
        }

        Self {
            edges,
            tolls,
            forbidden: vec![false; nodes],
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self, n: &GraphNode) -> &[usize] {
        &self.edges[n.id]
    }
    pub fn toll(&self, n: &GraphNode) -> Toll {
        Toll(self.tolls[n.id])
    }

    /// Makes the invariant reject a node.
    pub fn forbid(&mut self, id: usize) {
        self.forbidden[id] = true;
    }
    pub fn is_forbidden(&self, id: usize) -> bool {
        self.forbidden[id]
    }

    /// Number of edges from `start` to every node avoiding forbidden ones, or
    /// `None` for unreachable nodes.
    pub fn distances_from(&self, start: &GraphNode) -> Vec<Option<usize>> {
        let mut distances = vec![None; self.len()];
        if self.forbidden[start.id] {
            return distances;
        }

        let mut queue = VecDeque::from([start.id]);
        distances[start.id] = Some(0);
        while let Some(from) = queue.pop_front() {
            let d = distances[from].unwrap_or_default();
            for &to in &self.edges[from] {
                if !self.forbidden[to] && distances[to].is_none() {
                    distances[to] = Some(d + 1);
                    queue.push_back(to);
                }
            }
        }
        distances
    }
}

impl Space<GraphNode> for RandomGraphSpace {
    type Transition = Edge;

    fn transitions(&self, s: &GraphNode) -> Vec<Edge> {
        self.edges(s).iter().map(|&to| Edge { to }).collect()
    }

    #[inline(always)]
    fn valid(&self, s: &GraphNode) -> bool {
        !self.forbidden[s.id]
    }
}

impl CostSpace<GraphNode, Toll> for RandomGraphSpace {
    #[inline(always)]
    fn combine(&self, candidate: &GraphNode, parent_cost: &Toll) -> Toll {
        Toll(parent_cost.0 + self.tolls[candidate.id])
    }
}

impl std::fmt::Debug for RandomGraphSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let edges: usize = self.edges.iter().map(Vec::len).sum();
        write!(f, "RandomGraph({} nodes, {edges} edges)", self.len())
    }
}
