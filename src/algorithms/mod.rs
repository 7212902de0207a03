//! Implementation of search algorithms.
//!
//! These algorithms enumerate goal paths on generic state spaces. All of them
//! expand each distinct state at most once and keep going until their frontier
//! is exhausted.

pub mod cost_ordered;
pub mod unordered;
