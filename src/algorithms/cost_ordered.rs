//! Cost-ordered reachability search.
//!
//! Always explores the pending node with the best cost, as given by a
//! `CostOrder`. Unlike Dijkstra's algorithm it does not stop at (or only
//! report) the cheapest goal: it keeps going until the frontier is exhausted,
//! so later goal paths may be costlier than earlier ones. It enumerates goal
//! paths under a cost-guided exploration order, nothing more.

use std::fmt::Debug;

use crate::data_structures::cost_heap::CostHeap;
use crate::data_structures::cost_heap::CostHeapNode;
use crate::data_structures::cost_heap::CostOrder;
use crate::frontier::Frontier;
use crate::search::SearchStats;
use crate::search::SearchTree;
use crate::search::SearchTreeIndex;
use crate::search::SearchTreeNode;
use crate::space::Cost;
use crate::space::CostSpace;
use crate::space::Path;
use crate::space::State;
use crate::visited::VisitedSet;

/// Cost-ordered search over a `CostSpace`.
pub struct CostOrderedSearch<Sp, St, C, G>
where
    Sp: CostSpace<St, C>,
    St: State,
    C: Cost,
    G: FnMut(&St) -> bool,
{
    /// All the Search Nodes. Naturally forms a Search Tree as each node may
    /// have a parent Node.
    search_tree: SearchTree<St>,
    /// A heap of `(C, SearchTreeIndex)`. Costs live only here, as nodes are
    /// never re-ranked.
    open: CostHeap<C, SearchTreeIndex>,
    /// States that were already expanded.
    closed: VisitedSet<St>,

    space: Sp,
    goal: G,

    stats: SearchStats,
}

impl<Sp, St, C, G> CostOrderedSearch<Sp, St, C, G>
where
    Sp: CostSpace<St, C>,
    St: State,
    C: Cost,
    G: FnMut(&St) -> bool,
{
    /// Initialises the Search
    #[must_use]
    pub fn new(initial: St, initial_cost: C, order: CostOrder, space: Sp, goal: G) -> Self {
        let mut search = Self {
            search_tree: SearchTree::new(),
            open: CostHeap::with_capacity(order, 1024),
            closed: VisitedSet::new(),
            space,
            goal,
            stats: SearchStats::default(),
        };

        if search.space.valid(&initial) {
            let root = search.search_tree.push(initial, None);
            search.open.push(CostHeapNode::new(initial_cost, root));
            search.stats.pushed += 1;
        } else {
            log::debug!("Initial state {initial:?} breaks the invariant. Nothing to explore");
        }

        search
    }

    /// Runs the search until the next goal node is popped.
    ///
    /// The goal node is expanded before returning, so resuming the search
    /// continues exactly where a single run would.
    #[must_use]
    pub fn find_next_goal(&mut self) -> Option<Path<St>> {
        self.find_next_goal_with_cost().map(|(path, _cost)| path)
    }

    /// Like `find_next_goal`, but also returns the cost the goal node was
    /// ranked with.
    #[must_use]
    pub fn find_next_goal_with_cost(&mut self) -> Option<(Path<St>, C)> {
        while let Some(heap_node) = self.open.pop() {
            self.stats.popped += 1;
            let CostHeapNode {
                cost,
                node: node_index,
            } = heap_node;

            let found = if (self.goal)(self.search_tree[node_index].state()) {
                self.stats.goals += 1;
                let path = self.search_tree.path(node_index);
                log::debug!(
                    "Goal #{} found with cost {cost:?} after {} transitions: {:?}",
                    self.stats.goals,
                    path.len(),
                    path.end()
                );
                Some((path, cost.clone()))
            } else {
                None
            };

            self.expand(node_index, &cost);

            if found.is_some() {
                return found;
            }
        }

        log::debug!("Frontier exhausted. {:?}", self.stats);
        None
    }

    /// Generates the successors of a node, unless its state was expanded
    /// already.
    fn expand(&mut self, node_index: SearchTreeIndex, cost: &C) {
        let state = self.search_tree[node_index].state();
        if self.closed.contains(state) {
            self.stats.duplicates += 1;
            return;
        }
        let state = state.clone();
        self.closed.mark_visited(state.clone());
        self.stats.expanded += 1;

        for t in self.space.transitions(&state) {
            let successor = self.space.apply(&state, &t);
            self.stats.generated += 1;

            if !self.space.valid(&successor) {
                log::trace!("Rejected {successor:?}, reached from {state:?}");
                self.stats.rejected += 1;
                continue;
            }

            let successor_cost = self.space.combine(&successor, cost);
            let child = self.search_tree.push(successor, Some(node_index));
            self.open.push(CostHeapNode::new(successor_cost, child));
            self.stats.pushed += 1;
        }
    }

    /// Runs the search to completion, collecting every goal path.
    #[must_use]
    pub fn find_all(&mut self) -> Vec<Path<St>> {
        let mut paths = vec![];
        while let Some(path) = self.find_next_goal() {
            paths.push(path);
        }
        paths
    }

    /// Whether there are nodes left to explore.
    pub fn is_done(&self) -> bool {
        self.open.is_empty()
    }

    pub fn order(&self) -> CostOrder {
        self.open.order()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn space(&self) -> &Sp {
        &self.space
    }

    pub fn write_memory_stats<W: std::io::Write>(&self, out: W) -> std::io::Result<()> {
        use std::mem::size_of;

        self.stats.write(
            out,
            "CostOrderedSearch",
            (
                self.search_tree.len(),
                self.search_tree.capacity(),
                size_of::<SearchTreeNode<St>>(),
            ),
            (
                self.open.len(),
                self.open.capacity(),
                size_of::<CostHeapNode<C, SearchTreeIndex>>(),
            ),
            (self.closed.len(), self.closed.capacity(), size_of::<St>()),
        )
    }
    pub fn print_memory_stats(&self) {
        self.write_memory_stats(std::io::stdout().lock()).unwrap()
    }
}

impl<Sp, St, C, G> Iterator for CostOrderedSearch<Sp, St, C, G>
where
    Sp: CostSpace<St, C>,
    St: State,
    C: Cost,
    G: FnMut(&St) -> bool,
{
    type Item = Path<St>;
    fn next(&mut self) -> Option<Self::Item> {
        self.find_next_goal()
    }
}

impl<Sp, St, C, G> Debug for CostOrderedSearch<Sp, St, C, G>
where
    Sp: CostSpace<St, C>,
    St: State,
    C: Cost,
    G: FnMut(&St) -> bool,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("CostOrderedSearch")
            .field("search_tree", &self.search_tree)
            .field("open", &self.open.len())
            .field("order", &self.open.order())
            .field("closed", &self.closed)
            .field("space", &self.space)
            .field("stats", &self.stats)
            .finish()
    }
}
