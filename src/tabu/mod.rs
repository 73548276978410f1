//! Tabu Search over single-bit-flip neighborhoods.
//!
//! A single-solution trajectory metaheuristic that uses short-term memory
//! (the tabu list) to forbid recently applied moves, preventing the search
//! from immediately undoing them.
//!
//! # Algorithm
//!
//! 1. Draw a uniformly random initial packing
//! 2. At each pass:
//!    a. Generate one neighbor per bit position by flipping that bit
//!    b. Evaluate every neighbor
//!    c. Select the best admissible neighbor; re-flipping the forbidden
//!       bit is vetoed and the choice redirected to a fallback
//!    d. On strict improvement, accept the neighbor and forbid undoing
//!       its flip
//! 3. Stop once the pass counter runs more than `patience` passes beyond
//!    the last improvement
//!
//! The memory holds exactly one forbidden move: each accepted flip
//! overwrites the previous entry. A conventional tabu list keeps a sliding
//! window of recent moves instead; see [`TabuMemory`] for the consequences
//! of the single slot.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod neighborhood;
mod runner;
mod selector;
mod types;

pub use config::TabuConfig;
pub use neighborhood::{flip_neighbors, flipped_bit};
pub use runner::{TabuResult, TabuRunner};
pub use selector::select_neighbor;
pub use types::{SearchState, TabuMemory};
