use rustc_hash::FxHashSet;

use crate::space::State;

/// States that were already expanded (a.k.a. closed list).
pub struct VisitedSet<St>
where
    St: State,
{
    states: FxHashSet<St>,
}

impl<St> VisitedSet<St>
where
    St: State,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: FxHashSet::default(),
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn contains(&self, s: &St) -> bool {
        self.states.contains(s)
    }

    /// Marks a state as expanded.
    ///
    /// Returns whether the state was new.
    #[inline(always)]
    pub fn mark_visited(&mut self, s: St) -> bool {
        self.states.insert(s)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.states.len()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.states.capacity()
    }
}

impl<St> Default for VisitedSet<St>
where
    St: State,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<St> std::fmt::Debug for VisitedSet<St>
where
    St: State,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "VisitedSet{{({} states)}}", self.len())
    }
}
