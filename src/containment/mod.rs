//! Subsystem 2: graph pursuit containment.
//!
//! An adversary races toward gateway nodes over an undirected network while
//! the defender severs one gateway-adjacent edge per round until no escape
//! remains.

// error module
mod error;
// adjacency structure and severable-edge bookkeeping
mod graph;

// unweighted shortest paths
pub mod bfs;
// edge-severing round loop
pub mod policy;
// adversary movement policy
pub mod virus;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::ContainmentError;
pub use graph::{is_gateway, AvailableEdge, NetworkGraph};
pub use policy::solve;
pub use virus::VirusMove;
