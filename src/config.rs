//! Search configurations.
//!
//! A configuration bundles everything a search needs but the goal: the initial
//! state, the space (transition generator and invariant), and for cost-aware
//! searches the initial cost, the cost-combination function and which end of
//! the cost order goes first.
//!
//! Spaces can be written as types implementing `Space`/`CostSpace`, or put
//! together from closures with `FnSpace` and `FnCostSpace`.

use std::fmt::Debug;
use std::marker::PhantomData;

use derive_more::Display;

use crate::algorithms::cost_ordered::CostOrderedSearch;
use crate::algorithms::unordered::BreadthFirstSearch;
use crate::algorithms::unordered::DepthFirstSearch;
use crate::algorithms::unordered::UnorderedSearch;
use crate::frontier::Fifo;
use crate::frontier::Frontier;
use crate::frontier::Lifo;
use crate::search::SearchTreeIndex;
use crate::space::Cost;
use crate::space::CostSpace;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;
use crate::space::Transition;

pub use crate::data_structures::cost_heap::CostOrder;

/// Exploration order of cost-free searches.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum SearchOrder {
    /// Queue frontier. Paths come out in non-decreasing number of transitions.
    #[default]
    #[display("breadth-first")]
    BreadthFirst,
    /// Stack frontier.
    #[display("depth-first")]
    DepthFirst,
}

/// A frontier picked at runtime from a `SearchOrder`.
#[derive(Debug)]
pub enum OrderedFrontier {
    BreadthFirst(Fifo<SearchTreeIndex>),
    DepthFirst(Lifo<SearchTreeIndex>),
}

impl From<SearchOrder> for OrderedFrontier {
    fn from(order: SearchOrder) -> Self {
        match order {
            SearchOrder::BreadthFirst => OrderedFrontier::BreadthFirst(Fifo::new()),
            SearchOrder::DepthFirst => OrderedFrontier::DepthFirst(Lifo::new()),
        }
    }
}

impl Frontier<SearchTreeIndex> for OrderedFrontier {
    #[inline(always)]
    fn push(&mut self, e: SearchTreeIndex) {
        match self {
            OrderedFrontier::BreadthFirst(f) => f.push(e),
            OrderedFrontier::DepthFirst(f) => f.push(e),
        }
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<SearchTreeIndex> {
        match self {
            OrderedFrontier::BreadthFirst(f) => f.pop(),
            OrderedFrontier::DepthFirst(f) => f.pop(),
        }
    }
    fn len(&self) -> usize {
        match self {
            OrderedFrontier::BreadthFirst(f) => f.len(),
            OrderedFrontier::DepthFirst(f) => f.len(),
        }
    }
    fn capacity(&self) -> usize {
        match self {
            OrderedFrontier::BreadthFirst(f) => f.capacity(),
            OrderedFrontier::DepthFirst(f) => f.capacity(),
        }
    }
}

/// A configuration for breadth-first or depth-first reachability search.
#[derive(Clone, Debug)]
pub struct StateSpace<Sp, St>
where
    Sp: Space<St>,
    St: State,
{
    initial: St,
    space: Sp,
}

impl<Sp, St> StateSpace<Sp, St>
where
    Sp: Space<St>,
    St: State,
{
    pub fn new(initial: St, space: Sp) -> Self {
        Self { initial, space }
    }

    pub fn initial(&self) -> &St {
        &self.initial
    }
    pub fn space(&self) -> &Sp {
        &self.space
    }

    /// Starts a lazy search, yielding goal paths as they are found.
    pub fn search<G>(&self, goal: G, order: SearchOrder) -> UnorderedSearch<&Sp, St, OrderedFrontier, G>
    where
        G: FnMut(&St) -> bool,
    {
        UnorderedSearch::with_frontier(self.initial.clone(), &self.space, goal, order.into())
    }

    /// Finds every goal path reachable from the initial state, in discovery
    /// order. An empty result means no goal is reachable.
    pub fn check<G>(&self, goal: G, order: SearchOrder) -> Vec<Path<St>>
    where
        G: FnMut(&St) -> bool,
    {
        let paths = match order {
            SearchOrder::BreadthFirst => {
                BreadthFirstSearch::new(self.initial.clone(), &self.space, goal).find_all()
            }
            SearchOrder::DepthFirst => {
                DepthFirstSearch::new(self.initial.clone(), &self.space, goal).find_all()
            }
        };
        log::debug!("{order} search found {} goal paths", paths.len());
        paths
    }
}

/// A configuration for cost-ordered reachability search.
#[derive(Clone, Debug)]
pub struct CostStateSpace<Sp, St, C>
where
    Sp: CostSpace<St, C>,
    St: State,
    C: Cost,
{
    initial: St,
    initial_cost: C,
    space: Sp,
    order: CostOrder,
}

impl<Sp, St, C> CostStateSpace<Sp, St, C>
where
    Sp: CostSpace<St, C>,
    St: State,
    C: Cost,
{
    /// Builds a configuration exploring the smallest cost first.
    pub fn new(initial: St, initial_cost: C, space: Sp) -> Self {
        Self {
            initial,
            initial_cost,
            space,
            order: CostOrder::Ascending,
        }
    }

    pub fn with_order(self, order: CostOrder) -> Self {
        Self { order, ..self }
    }

    pub fn initial(&self) -> &St {
        &self.initial
    }
    pub fn initial_cost(&self) -> &C {
        &self.initial_cost
    }
    pub fn space(&self) -> &Sp {
        &self.space
    }
    pub fn order(&self) -> CostOrder {
        self.order
    }

    /// Starts a lazy search, yielding goal paths as they are found.
    pub fn search<G>(&self, goal: G) -> CostOrderedSearch<&Sp, St, C, G>
    where
        G: FnMut(&St) -> bool,
    {
        CostOrderedSearch::new(
            self.initial.clone(),
            self.initial_cost.clone(),
            self.order,
            &self.space,
            goal,
        )
    }

    /// Finds every goal path reachable from the initial state, in discovery
    /// order. An empty result means no goal is reachable.
    ///
    /// Paths are not sorted by cost, and the first one is not guaranteed to be
    /// the cheapest.
    pub fn check<G>(&self, goal: G) -> Vec<Path<St>>
    where
        G: FnMut(&St) -> bool,
    {
        let paths = self.search(goal).find_all();
        log::debug!("{} cost search found {} goal paths", self.order, paths.len());
        paths
    }
}

fn always_valid<St>(_: &St) -> bool {
    true
}

/// A `Space` made of closures.
///
/// `generator` lists the transitions available from a state, `invariant`
/// filters the candidate successors (everything is valid by default).
#[derive(Clone)]
pub struct FnSpace<St, T, G, I = fn(&St) -> bool>
where
    St: State,
    T: Transition<St>,
    G: Fn(&St) -> Vec<T>,
    I: Fn(&St) -> bool,
{
    generator: G,
    invariant: I,
    _phantom_state: PhantomData<fn(&St) -> T>,
}

impl<St, T, G> FnSpace<St, T, G>
where
    St: State,
    T: Transition<St>,
    G: Fn(&St) -> Vec<T>,
{
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            invariant: always_valid::<St>,
            _phantom_state: PhantomData,
        }
    }
}

impl<St, T, G, I> FnSpace<St, T, G, I>
where
    St: State,
    T: Transition<St>,
    G: Fn(&St) -> Vec<T>,
    I: Fn(&St) -> bool,
{
    /// Replaces the invariant.
    pub fn with_invariant<I2>(self, invariant: I2) -> FnSpace<St, T, G, I2>
    where
        I2: Fn(&St) -> bool,
    {
        FnSpace {
            generator: self.generator,
            invariant,
            _phantom_state: PhantomData,
        }
    }
}

impl<St, T, G, I> Space<St> for FnSpace<St, T, G, I>
where
    St: State,
    T: Transition<St>,
    G: Fn(&St) -> Vec<T>,
    I: Fn(&St) -> bool,
{
    type Transition = T;

    #[inline(always)]
    fn transitions(&self, s: &St) -> Vec<T> {
        (self.generator)(s)
    }
    #[inline(always)]
    fn valid(&self, s: &St) -> bool {
        (self.invariant)(s)
    }
}

impl<St, T, G, I> Debug for FnSpace<St, T, G, I>
where
    St: State,
    T: Transition<St>,
    G: Fn(&St) -> Vec<T>,
    I: Fn(&St) -> bool,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "FnSpace<{}>", std::any::type_name::<St>())
    }
}

/// A `CostSpace` made of a `Space` and a cost-combination closure.
#[derive(Clone)]
pub struct FnCostSpace<Sp, St, C, F>
where
    Sp: Space<St>,
    St: State,
    C: Cost,
    F: Fn(&St, &C) -> C,
{
    space: Sp,
    combine: F,
    _phantom: PhantomData<fn(&St, &C) -> C>,
}

impl<Sp, St, C, F> FnCostSpace<Sp, St, C, F>
where
    Sp: Space<St>,
    St: State,
    C: Cost,
    F: Fn(&St, &C) -> C,
{
    pub fn new(space: Sp, combine: F) -> Self {
        Self {
            space,
            combine,
            _phantom: PhantomData,
        }
    }
}

impl<Sp, St, C, F> Space<St> for FnCostSpace<Sp, St, C, F>
where
    Sp: Space<St>,
    St: State,
    C: Cost,
    F: Fn(&St, &C) -> C,
{
    type Transition = Sp::Transition;

    #[inline(always)]
    fn transitions(&self, s: &St) -> Vec<Self::Transition> {
        self.space.transitions(s)
    }
    #[inline(always)]
    fn valid(&self, s: &St) -> bool {
        self.space.valid(s)
    }
}

impl<Sp, St, C, F> CostSpace<St, C> for FnCostSpace<Sp, St, C, F>
where
    Sp: Space<St>,
    St: State,
    C: Cost,
    F: Fn(&St, &C) -> C,
{
    #[inline(always)]
    fn combine(&self, candidate: &St, parent_cost: &C) -> C {
        (self.combine)(candidate, parent_cost)
    }
}

impl<Sp, St, C, F> Debug for FnCostSpace<Sp, St, C, F>
where
    Sp: Space<St>,
    St: State,
    C: Cost,
    F: Fn(&St, &C) -> C,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "FnCostSpace<{}>({:?})",
            std::any::type_name::<C>(),
            self.space
        )
    }
}
