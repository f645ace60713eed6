//! End-to-end tests for the configuration-search subsystem: codec round
//! trips, heuristic admissibility against exhaustively solved instances, and
//! A* optimality on hand-checked diagrams.

use corridor_solvers::sorting::{codec, heuristic, moves, solve, SearchError, State};

fn parse(text: &str) -> (State, State, usize) {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    codec::parse(&lines).unwrap()
}

/// Uniform-cost search without the heuristic. Slow but obviously correct;
/// used as the ground truth the heuristic must never overshoot.
fn brute_force_cost(start: &State, goal: &State, depth: usize) -> Option<u64> {
    use std::cmp::Reverse;
    use std::collections::{BinaryHeap, HashMap};

    let mut best: HashMap<State, u64> = HashMap::new();
    best.insert(start.clone(), 0);
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0u64, start.clone())));

    while let Some(Reverse((g, state))) = frontier.pop() {
        if state == *goal {
            return Some(g);
        }
        if best.get(&state).is_some_and(|&known| g > known) {
            continue;
        }
        for step in moves::generate(&state, depth) {
            let candidate = g + step.cost;
            if best.get(&step.state).map_or(true, |&known| candidate < known) {
                best.insert(step.state.clone(), candidate);
                frontier.push(Reverse((candidate, step.state)));
            }
        }
    }
    None
}

const SORTED_DEPTH_1: &str = "\
#############
#...........#
###A#B#C#D###
  #########
";

const SWAPPED_PAIR: &str = "\
#############
#...........#
###B#A#C#D###
  #########
";

const CANONICAL_DEPTH_2: &str = "\
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

#[test]
fn codec_round_trips_canonical_diagram() {
    let (start, _, depth) = parse(CANONICAL_DEPTH_2);
    assert_eq!(codec::serialize(&start, depth), CANONICAL_DEPTH_2);
}

#[test]
fn sorted_configuration_solves_for_zero() {
    let (start, goal, depth) = parse(SORTED_DEPTH_1);
    assert_eq!(solve(start, &goal, depth).unwrap(), 0);
}

#[test]
fn swapped_pair_costs_forty_six() {
    // Hand-solved: B out 2x10, A out 2x1, B in 2x10, A in 4x1.
    let (start, goal, depth) = parse(SWAPPED_PAIR);
    assert_eq!(solve(start, &goal, depth).unwrap(), 46);
}

#[test]
fn a_star_matches_brute_force_on_small_instances() {
    for text in [SORTED_DEPTH_1, SWAPPED_PAIR] {
        let (start, goal, depth) = parse(text);
        let expected = brute_force_cost(&start, &goal, depth).unwrap();
        assert_eq!(solve(start, &goal, depth).unwrap(), expected);
    }
}

#[test]
fn heuristic_never_overestimates_reachable_states() {
    let (start, goal, depth) = parse(SWAPPED_PAIR);
    // Walk every state within two moves of the start and compare the
    // estimate against the exhaustively computed remaining cost.
    let mut states = vec![start.clone()];
    for m in moves::generate(&start, depth) {
        for m2 in moves::generate(&m.state, depth) {
            states.push(m2.state);
        }
        states.push(m.state);
    }
    for state in states {
        if let Some(true_cost) = brute_force_cost(&state, &goal, depth) {
            assert!(
                heuristic::estimate(&state, depth) <= true_cost,
                "estimate overshoots for {}",
                state
            );
        }
    }
}

#[test]
fn known_depth_two_instance_solves_to_reference_cost() {
    // The classic depth-2 example configuration; its minimum is 12521.
    let (start, goal, depth) = parse(CANONICAL_DEPTH_2);
    assert_eq!(solve(start, &goal, depth).unwrap(), 12521);
}

#[test]
fn wedged_configuration_reports_no_solution() {
    // All stop cells hold tokens and every compartment's mover is foreign:
    // no move is legal, so the goal is unreachable.
    let (start, goal, depth) = parse(
        "#############\n#AA.A.A.A.AA#\n###B#A#C#D###\n  #########\n",
    );
    assert!(matches!(
        solve(start, &goal, depth),
        Err(SearchError::NoSolution)
    ));
}
