use std::fmt::Debug;
use std::hash::Hash;

/// One configuration of the modelled system.
///
/// States are compared by value: two states are the same for deduplication
/// purposes iff they compare equal (and hash equally).
///
/// This is an opt-in marker. Downstream crates can only implement it for their
/// own aggregate types, so primitives and borrowed values are rejected at
/// compile time.
pub trait State: Clone + Debug + PartialEq + Eq + Hash + 'static {}

/// An ordered value guiding exploration in cost-aware search.
///
/// `Ord` must be a consistent total order, otherwise the exploration order is
/// undefined (but the search still terminates on finite spaces).
pub trait Cost: Clone + Debug + PartialEq + Eq + PartialOrd + Ord + 'static {}

/// A mutation producing one successor from a copy of the current state.
///
/// Closures taking `&mut St` (boxed or not) are transitions, but tagged enums of
/// moves usually read better and are cheaper to carry around.
pub trait Transition<St> {
    fn apply(&self, state: &mut St);
}

impl<St, F> Transition<St> for F
where
    F: Fn(&mut St),
{
    #[inline(always)]
    fn apply(&self, state: &mut St) {
        self(state)
    }
}

/// The transition system a search explores.
pub trait Space<St>: Debug
where
    St: State,
{
    type Transition: Transition<St>;

    /// Lists the transitions available from a state.
    ///
    /// An empty list is a dead end.
    fn transitions(&self, s: &St) -> Vec<Self::Transition>;

    /// Invariant every candidate successor must satisfy to be explored.
    fn valid(&self, _s: &St) -> bool {
        true
    }

    /// Applies a transition to an independent copy of `s`.
    #[inline(always)]
    fn apply(&self, s: &St, t: &Self::Transition) -> St {
        let mut successor = s.clone();
        t.apply(&mut successor);
        successor
    }

    /// Checks that every step of a path is a valid transition of this space.
    fn valid_path(&self, p: &Path<St>) -> bool {
        let states = p.states();
        if states.iter().skip(1).any(|s| !self.valid(s)) {
            return false;
        }
        states.windows(2).all(|step| {
            let (from, to) = (&step[0], &step[1]);
            self.transitions(from)
                .iter()
                .any(|t| self.apply(from, t) == *to)
        })
    }
}

/// A `Space` whose successors carry a cost.
pub trait CostSpace<St, C>: Space<St>
where
    St: State,
    C: Cost,
{
    /// Computes the cost of reaching `candidate` from a node of cost `parent_cost`.
    fn combine(&self, candidate: &St, parent_cost: &C) -> C;
}

impl<St, Sp> Space<St> for &Sp
where
    St: State,
    Sp: Space<St>,
{
    type Transition = Sp::Transition;

    #[inline(always)]
    fn transitions(&self, s: &St) -> Vec<Self::Transition> {
        (**self).transitions(s)
    }
    #[inline(always)]
    fn valid(&self, s: &St) -> bool {
        (**self).valid(s)
    }
}

impl<St, C, Sp> CostSpace<St, C> for &Sp
where
    St: State,
    C: Cost,
    Sp: CostSpace<St, C>,
{
    #[inline(always)]
    fn combine(&self, candidate: &St, parent_cost: &C) -> C {
        (**self).combine(candidate, parent_cost)
    }
}

/// A sequence of states from the initial state to a goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<St>
where
    St: State,
{
    states: Vec<St>,
}

impl<St> Path<St>
where
    St: State,
{
    #[inline(always)]
    pub fn new_from_start(start: St) -> Self {
        Self {
            states: vec![start],
        }
    }

    /// Builds a Path from states collected goal-first.
    pub(crate) fn from_reversed(mut states: Vec<St>) -> Self {
        debug_assert!(!states.is_empty());
        states.reverse();
        Self { states }
    }

    pub fn start(&self) -> &St {
        &self.states[0]
    }
    pub fn end(&self) -> &St {
        &self.states[self.states.len() - 1]
    }

    /// Number of transitions taken.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.states.len() - 1
    }
    /// Whether the start is already a goal.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn states(&self) -> &[St] {
        &self.states
    }
    pub fn iter(&self) -> std::slice::Iter<'_, St> {
        self.states.iter()
    }
    pub fn into_states(self) -> Vec<St> {
        self.states
    }
}

impl<St> From<Path<St>> for Vec<St>
where
    St: State,
{
    fn from(p: Path<St>) -> Self {
        p.states
    }
}

impl<'a, St> IntoIterator for &'a Path<St>
where
    St: State,
{
    type Item = &'a St;
    type IntoIter = std::slice::Iter<'a, St>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl<St> std::fmt::Display for Path<St>
where
    St: State + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, s) in self.states.iter().enumerate() {
            writeln!(f, "{i}: {s}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    struct Counter {
        n: u8,
    }
    impl State for Counter {}
    impl std::fmt::Display for Counter {
        fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "#{}", self.n)
        }
    }

    #[derive(Debug)]
    struct Increments;

    fn increment(c: &mut Counter) {
        c.n += 1;
    }

    impl Space<Counter> for Increments {
        type Transition = fn(&mut Counter);

        fn transitions(&self, s: &Counter) -> Vec<Self::Transition> {
            if s.n < 3 {
                vec![increment as fn(&mut Counter)]
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn closures_are_transitions() {
        let double = |c: &mut Counter| c.n *= 2;
        let mut c = Counter { n: 3 };
        double.apply(&mut c);
        assert_eq!(c, Counter { n: 6 });

        let boxed: Box<dyn Fn(&mut Counter)> = Box::new(|c| c.n = 0);
        boxed.apply(&mut c);
        assert_eq!(c, Counter { n: 0 });
    }

    #[test]
    fn apply_leaves_the_original_untouched() {
        let s = Counter { n: 1 };
        let t = Increments.transitions(&s).remove(0);
        assert_eq!(Increments.apply(&s, &t), Counter { n: 2 });
        assert_eq!(s, Counter { n: 1 });
    }

    #[test]
    fn path_accessors() {
        let p = Path::from_reversed(vec![Counter { n: 2 }, Counter { n: 1 }, Counter { n: 0 }]);
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
        assert_eq!(*p.start(), Counter { n: 0 });
        assert_eq!(*p.end(), Counter { n: 2 });
        assert_eq!(p.to_string(), "0: #0\n1: #1\n2: #2\n");

        let single = Path::new_from_start(Counter { n: 7 });
        assert!(single.is_empty());
        assert_eq!(single.start(), single.end());
    }

    #[test]
    fn valid_path_follows_transitions() {
        let good = Path::from_reversed(vec![Counter { n: 2 }, Counter { n: 1 }, Counter { n: 0 }]);
        assert!(Increments.valid_path(&good));

        let skipping = Path::from_reversed(vec![Counter { n: 2 }, Counter { n: 0 }]);
        assert!(!Increments.valid_path(&skipping));

        let past_the_end = Path::from_reversed(vec![Counter { n: 4 }, Counter { n: 3 }]);
        assert!(!Increments.valid_path(&past_the_end));
    }
}
