//! Data structures backing the search frontiers.

pub mod cost_heap;
