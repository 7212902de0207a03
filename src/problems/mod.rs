//! Implementation of search spaces and problems.
//!
//! These are clients of the generic engine: each one describes its states,
//! moves and invariant, and the engine does the rest.

pub mod crossing;
pub mod family;
pub mod random_graph;
