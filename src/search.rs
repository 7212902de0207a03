use std::fmt::Debug;

use nonmax::NonMaxUsize;

use crate::space::Path;
use crate::space::State;

/// A reference to a `SearchTreeNode<St>`.
///
/// Indices are stable for the whole search, as nodes are never removed.
/// `NonMaxUsize` leaves a niche so `Option<SearchTreeIndex>` stays as wide as a
/// `usize`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchTreeIndex {
    index: NonMaxUsize,
}

impl SearchTreeIndex {
    #[inline(always)]
    fn new(index: usize) -> Self {
        Self {
            index: NonMaxUsize::new(index).expect("Search tree outgrew usize::MAX nodes"),
        }
    }

    #[inline(always)]
    pub fn get(&self) -> usize {
        self.index.get()
    }
}

/// A node of the trace forest: a state and how it was reached.
#[derive(Debug)]
pub struct SearchTreeNode<St>
where
    St: State,
{
    pub(crate) parent: Option<SearchTreeIndex>,
    pub(crate) state: St,
}

impl<St> SearchTreeNode<St>
where
    St: State,
{
    pub fn new(state: St, parent: Option<SearchTreeIndex>) -> Self {
        Self { parent, state }
    }

    pub fn state(&self) -> &St {
        &self.state
    }
    pub fn parent(&self) -> Option<SearchTreeIndex> {
        self.parent
    }
}

/// All the nodes created during a search.
///
/// Each node points to its parent, so they naturally form a tree rooted at the
/// initial state. The tree only grows, and a node only points to nodes created
/// before it, so there are no cycles to worry about.
pub struct SearchTree<St>
where
    St: State,
{
    nodes: Vec<SearchTreeNode<St>>,
}

impl<St> SearchTree<St>
where
    St: State,
{
    #[inline(always)]
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new node reached from `parent`.
    #[inline(always)]
    pub fn push(&mut self, state: St, parent: Option<SearchTreeIndex>) -> SearchTreeIndex {
        debug_assert!(parent.is_none_or(|p| p.get() < self.nodes.len()));
        let index = SearchTreeIndex::new(self.nodes.len());
        self.nodes.push(SearchTreeNode::new(state, parent));
        index
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reconstructs the Path leading to a node.
    #[must_use]
    pub fn path(&self, mut node_index: SearchTreeIndex) -> Path<St> {
        let mut states = vec![self[node_index].state.clone()];

        while let Some(parent_index) = self[node_index].parent {
            debug_assert!(parent_index.get() < node_index.get());
            states.push(self[parent_index].state.clone());
            node_index = parent_index;
        }

        Path::from_reversed(states)
    }

    /// Number of ancestors of a node.
    #[must_use]
    pub fn depth(&self, mut node_index: SearchTreeIndex) -> usize {
        let mut depth = 0usize;
        while let Some(parent_index) = self[node_index].parent {
            depth += 1;
            node_index = parent_index;
        }
        depth
    }
}

impl<St> Default for SearchTree<St>
where
    St: State,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<St> std::ops::Index<SearchTreeIndex> for SearchTree<St>
where
    St: State,
{
    type Output = SearchTreeNode<St>;

    #[inline(always)]
    fn index(&self, index: SearchTreeIndex) -> &Self::Output {
        &self.nodes[index.get()]
    }
}

impl<St> std::fmt::Debug for SearchTree<St>
where
    St: State,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}

/// Counters of a search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken out of the frontier.
    pub popped: usize,
    /// Popped nodes whose state had its transitions generated.
    pub expanded: usize,
    /// Popped nodes whose state was already expanded through another node.
    pub duplicates: usize,
    /// Candidate successors produced by transitions.
    pub generated: usize,
    /// Candidates discarded by the invariant.
    pub rejected: usize,
    /// Nodes pushed onto the frontier, including the root.
    pub pushed: usize,
    /// Goal nodes found.
    pub goals: usize,
}

impl SearchStats {
    pub(crate) fn write<W: std::io::Write>(
        &self,
        mut out: W,
        name: &str,
        nodes: (usize, usize, usize),
        open: (usize, usize, usize),
        closed: (usize, usize, usize),
    ) -> std::io::Result<()> {
        use size::Size;
        use thousands::Separable;

        writeln!(out, "{name} Stats:")?;
        for (label, (len, capacity, item_size)) in
            [("Nodes", nodes), ("Open", open), ("Closed", closed)]
        {
            writeln!(
                out,
                "  - |{label}|:{:width$}{} ({})",
                "",
                len.separate_with_commas(),
                Size::from_bytes(len * item_size),
                width = 8 - label.len(),
            )?;
            writeln!(
                out,
                "  - |{label}|*:{:width$}{} ({})",
                "",
                capacity.separate_with_commas(),
                Size::from_bytes(capacity * item_size),
                width = 7 - label.len(),
            )?;
        }
        writeln!(out, "  - Popped nodes:    {}", self.popped.separate_with_commas())?;
        writeln!(out, "  - Expanded nodes:  {}", self.expanded.separate_with_commas())?;
        writeln!(out, "  - Duplicate pops:  {}", self.duplicates.separate_with_commas())?;
        writeln!(out, "  - Generated:       {}", self.generated.separate_with_commas())?;
        writeln!(out, "  - Rejected:        {}", self.rejected.separate_with_commas())?;
        writeln!(out, "  - Pushed:          {}", self.pushed.separate_with_commas())?;
        writeln!(out, "  - Goals:           {}", self.goals.separate_with_commas())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Word {
        text: &'static str,
    }
    impl State for Word {}

    fn w(text: &'static str) -> Word {
        Word { text }
    }

    #[test]
    fn index_niche() {
        assert_eq!(
            std::mem::size_of::<Option<SearchTreeIndex>>(),
            std::mem::size_of::<usize>()
        );
    }

    #[test]
    fn reconstructs_paths_from_shared_ancestors() {
        let mut tree = SearchTree::new();
        let root = tree.push(w("cold"), None);
        let cord = tree.push(w("cord"), Some(root));
        let card = tree.push(w("card"), Some(cord));
        let ward = tree.push(w("ward"), Some(card));
        let warm = tree.push(w("warm"), Some(ward));
        let corm = tree.push(w("corm"), Some(cord));

        assert_eq!(tree.len(), 6);
        assert_eq!(tree.depth(root), 0);
        assert_eq!(tree.depth(warm), 4);

        let path = tree.path(warm);
        let words: Vec<_> = path.iter().map(|s| s.text).collect();
        assert_eq!(words, vec!["cold", "cord", "card", "ward", "warm"]);

        let path = tree.path(corm);
        let words: Vec<_> = path.iter().map(|s| s.text).collect();
        assert_eq!(words, vec!["cold", "cord", "corm"]);

        assert_eq!(tree.path(root), Path::new_from_start(w("cold")));
    }

    #[test]
    fn stats_report() {
        let stats = SearchStats {
            popped: 1234,
            expanded: 1000,
            ..Default::default()
        };
        let mut out = vec![];
        stats
            .write(&mut out, "Test", (3, 4, 8), (0, 0, 8), (1, 1, 8))
            .unwrap();
        let report = String::from_utf8(out).unwrap();
        assert!(report.starts_with("Test Stats:\n"));
        assert!(report.contains("  - Popped nodes:    1,234\n"));
        assert!(report.contains("  - Expanded nodes:  1,000\n"));
    }
}
