//! 0/1 knapsack problem model.
//!
//! An instance is an ordered list of items, each with a weight and a
//! benefit, plus a capacity `b`. A candidate packing is a bit vector `s`
//! scored by the penalized objective
//!
//! ```text
//! f(s) = sum(benefit_j * s_j) * (1 - max(0, sum(weight_j * s_j) - b))
//! ```
//!
//! so an overweight packing is still comparable (its value drops toward
//! zero or below) rather than being filtered out as infeasible.

mod model;

pub use model::{Item, Knapsack, Solution};
