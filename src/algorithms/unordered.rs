//! Breadth-first and depth-first reachability search.

use std::fmt::Debug;

use crate::frontier::Fifo;
use crate::frontier::Frontier;
use crate::frontier::Lifo;
use crate::search::SearchStats;
use crate::search::SearchTree;
use crate::search::SearchTreeIndex;
use crate::search::SearchTreeNode;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;
use crate::visited::VisitedSet;

/// Breadth-first search. Goal paths come out shortest first.
pub type BreadthFirstSearch<Sp, St, G> = UnorderedSearch<Sp, St, Fifo<SearchTreeIndex>, G>;
/// Depth-first search.
pub type DepthFirstSearch<Sp, St, G> = UnorderedSearch<Sp, St, Lifo<SearchTreeIndex>, G>;

/// Reachability search whose exploration order only depends on the frontier.
///
/// Enumerates every goal node popped from the frontier. A goal node is still
/// expanded, so goal paths that go through other goals are reported too.
pub struct UnorderedSearch<Sp, St, Fr, G>
where
    Sp: Space<St>,
    St: State,
    Fr: Frontier<SearchTreeIndex>,
    G: FnMut(&St) -> bool,
{
    /// All the Search Nodes. Naturally forms a Search Tree as each node may
    /// have a parent Node.
    search_tree: SearchTree<St>,
    /// Nodes awaiting expansion.
    open: Fr,
    /// States that were already expanded.
    closed: VisitedSet<St>,

    space: Sp,
    goal: G,

    stats: SearchStats,
}

impl<Sp, St, Fr, G> UnorderedSearch<Sp, St, Fr, G>
where
    Sp: Space<St>,
    St: State,
    Fr: Frontier<SearchTreeIndex> + Default,
    G: FnMut(&St) -> bool,
{
    /// Initialises the Search
    #[must_use]
    pub fn new(initial: St, space: Sp, goal: G) -> Self {
        Self::with_frontier(initial, space, goal, Fr::default())
    }
}

impl<Sp, St, Fr, G> UnorderedSearch<Sp, St, Fr, G>
where
    Sp: Space<St>,
    St: State,
    Fr: Frontier<SearchTreeIndex>,
    G: FnMut(&St) -> bool,
{
    /// Initialises the Search on a given (empty) frontier.
    #[must_use]
    pub fn with_frontier(initial: St, space: Sp, goal: G, open: Fr) -> Self {
        debug_assert!(open.is_empty());
        let mut search = Self {
            search_tree: SearchTree::new(),
            open,
            closed: VisitedSet::new(),
            space,
            goal,
            stats: SearchStats::default(),
        };

        if search.space.valid(&initial) {
            let root = search.search_tree.push(initial, None);
            search.open.push(root);
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
        while let Some(node_index) = self.open.pop() {
            self.stats.popped += 1;

            let path = if (self.goal)(self.search_tree[node_index].state()) {
                self.stats.goals += 1;
                let path = self.search_tree.path(node_index);
                log::debug!(
                    "Goal #{} found after {} transitions: {:?}",
                    self.stats.goals,
                    path.len(),
                    path.end()
                );
                Some(path)
            } else {
                None
            };

            self.expand(node_index);

            if path.is_some() {
                return path;
            }
        }

        log::debug!("Frontier exhausted. {:?}", self.stats);
        None
    }

    /// Generates the successors of a node, unless its state was expanded
    /// already.
    fn expand(&mut self, node_index: SearchTreeIndex) {
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

            let child = self.search_tree.push(successor, Some(node_index));
            self.open.push(child);
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
            "UnorderedSearch",
            (
                self.search_tree.len(),
                self.search_tree.capacity(),
                size_of::<SearchTreeNode<St>>(),
            ),
            (
                self.open.len(),
                self.open.capacity(),
                size_of::<SearchTreeIndex>(),
            ),
            (self.closed.len(), self.closed.capacity(), size_of::<St>()),
        )
    }
    pub fn print_memory_stats(&self) {
        self.write_memory_stats(std::io::stdout().lock()).unwrap()
    }
}

impl<Sp, St, Fr, G> Iterator for UnorderedSearch<Sp, St, Fr, G>
where
    Sp: Space<St>,
    St: State,
    Fr: Frontier<SearchTreeIndex>,
    G: FnMut(&St) -> bool,
{
    type Item = Path<St>;
    fn next(&mut self) -> Option<Self::Item> {
        self.find_next_goal()
    }
}

impl<Sp, St, Fr, G> Debug for UnorderedSearch<Sp, St, Fr, G>
where
    Sp: Space<St>,
    St: State,
    Fr: Frontier<SearchTreeIndex>,
    G: FnMut(&St) -> bool,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("UnorderedSearch")
            .field("search_tree", &self.search_tree)
            .field("open", &self.open.len())
            .field("closed", &self.closed)
            .field("space", &self.space)
            .field("stats", &self.stats)
            .finish()
    }
}
