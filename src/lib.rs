use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod data_structures;
pub mod derank;
pub mod heap_primitives;

// Search space and configuration
// ------------------------------
pub mod config;
pub mod space;

// Search machinery
// ----------------
pub mod frontier;
pub mod search;
pub mod visited;

// Algorithms
// ----------
pub mod algorithms;

// Problems
// --------
pub mod problems;
