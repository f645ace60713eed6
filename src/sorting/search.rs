// search.rs
// ──────────────────────────────────────────────────────────────────────────────
// A* driver over the implicit state graph defined by the move generator.
// The frontier is a min-heap ordered by f = g + h with g as tie-break; a
// best-known-cost map provides lazy deletion: entries whose recorded g
// exceeds the map value are stale and skipped on pop. All edge costs are
// strictly positive and the state space is finite, so the loop terminates.
// ──────────────────────────────────────────────────────────────────────────────

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::error::SearchError;
use super::heuristic;
use super::moves;
use super::state::State;

/// A frontier entry. Derived ordering compares f, then g, then the state
/// cells, so heap behavior is deterministic.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    f: u64,
    g: u64,
    state: State,
}

/// Minimal total cost to transform `start` into `goal`, or
/// [`SearchError::NoSolution`] when the goal is unreachable.
pub fn solve(start: State, goal: &State, depth: usize) -> Result<u64, SearchError> {
    let start_h = heuristic::estimate(&start, depth);
    let mut best: HashMap<State, u64> = HashMap::new();
    best.insert(start.clone(), 0);

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(Entry {
        f: start_h,
        g: 0,
        state: start,
    }));

    while let Some(Reverse(Entry { g, state, .. })) = frontier.pop() {
        if state == *goal {
            return Ok(g);
        }

        // Stale entry superseded by a cheaper path found later.
        if best.get(&state).is_some_and(|&known| g > known) {
            continue;
        }

        for step in moves::generate(&state, depth) {
            let candidate_g = g + step.cost;
            let improved = best
                .get(&step.state)
                .map_or(true, |&known| candidate_g < known);
            if improved {
                best.insert(step.state.clone(), candidate_g);
                let h = heuristic::estimate(&step.state, depth);
                frontier.push(Reverse(Entry {
                    f: candidate_g + h,
                    g: candidate_g,
                    state: step.state,
                }));
            }
        }
    }

    Err(SearchError::NoSolution)
}
