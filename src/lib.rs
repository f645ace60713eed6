//! Weighted state-space search for two corridor puzzles.
//!
//! Two independent subsystems share one hard kernel: exploring a
//! combinatorial state space under cost or distance metrics:
//!
//! - [`sorting`]: finds the minimum-cost move sequence that sorts typed
//!   tokens from an 11-cell hallway into four fixed-depth compartments,
//!   via A* with an admissible per-token heuristic.
//! - [`containment`]: simulates an adversary racing toward gateway nodes
//!   over an undirected graph while a defender severs one gateway-adjacent
//!   edge per round until no escape remains.
//!
//! Both run single-threaded and to completion within one call; each
//! invocation owns its priority queue or graph exclusively. The [`app`]
//! module is the thin I/O adapter around them (CLI, validation, printing).

pub mod app;
pub mod containment;
pub mod sorting;
