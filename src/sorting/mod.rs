//! Subsystem 1: minimum-cost configuration search.
//!
//! Transforms a multi-compartment arrangement of typed tokens into its goal
//! arrangement with the cheapest legal move sequence, using A* over the
//! implicit move graph.

// error module
mod error;
// value types shared by the whole subsystem
mod state;

// diagram codec
pub mod codec;
// admissible remaining-cost estimate
pub mod heuristic;
// legal-move enumeration
pub mod moves;
// A* driver
pub mod search;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::SearchError;
pub use search::solve;
pub use state::{Cell, Move, State, TokenType, COMPARTMENT_COUNT, DOORS, HALLWAY_LEN, STOP_CELLS};
