//! Tabu Search solver for the 0/1 knapsack problem.
//!
//! Given a fixed set of items (weight, benefit) and a capacity, the solver
//! iteratively improves a binary packing vector until no improvement is
//! found within a patience window:
//!
//! - **[`knapsack`]**: the immutable problem model (items + capacity) and
//!   the penalized objective. Overweight packings are not rejected; their
//!   value collapses through a multiplicative penalty term, so the search
//!   can still compare infeasible neighbors and steer back toward
//!   feasibility.
//! - **[`tabu`]**: the search itself. Single-bit-flip neighborhood
//!   generation, admissible-neighbor selection against a single-slot tabu
//!   memory, and the iteration/termination loop.
//!
//! # Architecture
//!
//! The crate is a pure, single-threaded library: the only nondeterministic
//! input is the random draw of the initial packing, taken from an
//! explicitly seeded RNG. Constructing problem instances from external
//! data, reporting results, and multi-start orchestration are all left to
//! the consumer.

pub mod knapsack;
pub mod tabu;
