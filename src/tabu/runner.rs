//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Draw a uniformly random initial packing and evaluate it
//! 2. At each pass:
//!    a. Generate one flip neighbor per bit position
//!    b. Evaluate every neighbor
//!    c. Select the best admissible neighbor (re-flipping the forbidden
//!       bit is vetoed)
//!    d. On strict improvement, accept the neighbor and forbid undoing
//!       its flip
//! 3. Stop when the pass counter runs more than `patience` passes beyond
//!    the last improvement
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::TabuConfig;
use super::neighborhood::{flip_neighbors, flipped_bit};
use super::selector::select_neighbor;
use super::types::{SearchState, TabuMemory};
use crate::knapsack::{Knapsack, Solution};

/// Result of a Tabu Search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best packing found.
    pub best: Solution,
    /// Objective value credited to the best packing.
    pub best_value: i64,
    /// Total passes executed.
    pub iterations: usize,
    /// Pass at which the incumbent last improved.
    pub best_iteration: usize,
    /// Credited incumbent value after each pass, preceded by the initial
    /// packing's value. Non-decreasing.
    pub value_history: Vec<i64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes the search with an RNG built from the configured seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabu_knapsack::knapsack::Knapsack;
    /// use tabu_knapsack::tabu::{TabuConfig, TabuRunner};
    ///
    /// let sack = Knapsack::from_pairs(&[(4, 2), (5, 2), (7, 3), (9, 4), (6, 4)], 23);
    /// let config = TabuConfig::default().with_seed(42);
    /// let result = TabuRunner::run(&sack, &config);
    /// assert_eq!(result.best.len(), 5);
    /// ```
    pub fn run(problem: &Knapsack, config: &TabuConfig) -> TabuResult {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Executes the search drawing the initial packing from `rng`.
    ///
    /// The RNG is consulted only for that single draw; everything after it
    /// is deterministic.
    ///
    /// # Panics
    ///
    /// Panics if the configuration or the problem is invalid, or if the
    /// configured neighbor count exceeds the item count.
    pub fn run_with_rng<R: Rng>(
        problem: &Knapsack,
        config: &TabuConfig,
        rng: &mut R,
    ) -> TabuResult {
        config.validate().expect("invalid TabuConfig");
        problem.validate().expect("invalid Knapsack");

        let n = problem.len();
        let neighbor_count = config.neighbor_count.unwrap_or(n);
        assert!(
            neighbor_count <= n,
            "neighbor count {neighbor_count} exceeds item count {n}"
        );

        // Initial packing: each bit drawn uniformly.
        let incumbent: Solution = (0..n).map(|_| rng.random_range(0..2) == 1).collect();
        let incumbent_value = problem.evaluate(&incumbent);

        let mut state = SearchState {
            incumbent,
            incumbent_value,
            iteration: 0,
            best_iteration: 0,
        };
        let mut memory = TabuMemory::new();
        let mut value_history = vec![state.incumbent_value];

        // First pass. The memory is still empty, so no veto can apply and
        // an accepted move seeds the tabu slot. The credited incumbent
        // value stays at the initial packing's value: the main loop keeps
        // comparing against it until its own first acceptance refreshes it.
        let neighbors = flip_neighbors(&state.incumbent, neighbor_count);
        let values: Vec<i64> = neighbors.iter().map(|s| problem.evaluate(s)).collect();
        let pos = select_neighbor(&values, &memory, &state.incumbent, &neighbors);
        if values[pos] > state.incumbent_value {
            if let Some(bit) = flipped_bit(&state.incumbent, &neighbors[pos]) {
                memory.record(bit);
            }
            state.incumbent = neighbors[pos].clone();
            state.best_iteration = state.iteration;
        }
        state.iteration += 1;
        value_history.push(state.incumbent_value);

        // Main loop. Termination is checked before generating neighbors.
        while state.iteration - state.best_iteration <= config.patience {
            let neighbors = flip_neighbors(&state.incumbent, neighbor_count);
            let values: Vec<i64> = neighbors.iter().map(|s| problem.evaluate(s)).collect();
            let pos = select_neighbor(&values, &memory, &state.incumbent, &neighbors);
            if values[pos] > state.incumbent_value {
                if let Some(bit) = flipped_bit(&state.incumbent, &neighbors[pos]) {
                    memory.record(bit);
                }
                state.incumbent = neighbors[pos].clone();
                state.incumbent_value = values[pos];
                state.best_iteration = state.iteration;
            }
            state.iteration += 1;
            value_history.push(state.incumbent_value);
        }

        TabuResult {
            best: state.incumbent,
            best_value: state.incumbent_value,
            iterations: state.iteration,
            best_iteration: state.best_iteration,
            value_history,
        }
    }
}
