//! Candidate points and sidelobe-aware greedy suppression.
//!
//! Candidates are walked in descending value order; each accepted point
//! claims its footprint on an occupancy grid owned by the run.

pub(crate) mod grid;
pub(crate) mod point;
pub(crate) mod suppress;
