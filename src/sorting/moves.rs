// moves.rs
// ──────────────────────────────────────────────────────────────────────────────
// Enumerates every legal single-token relocation from a configuration. Two
// move classes exist: a hallway token entering its home compartment, and the
// topmost occupant of an unsettled compartment stepping out to a hallway stop
// cell. All returned successors differ from the source by exactly one token
// and conserve per-type token counts; the search layer ranks them by cost.
// ──────────────────────────────────────────────────────────────────────────────

use super::state::{Move, State, COMPARTMENT_COUNT, DOORS, STOP_CELLS};

/// All legal moves out of `state`.
pub fn generate(state: &State, depth: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    compartment_to_hallway(state, depth, &mut moves);
    hallway_to_compartment(state, depth, &mut moves);
    moves
}

/// A hallway token may enter its home compartment when the compartment holds
/// nothing foreign, the hallway between its cell and the door is clear, and a
/// slot is free. It always drops to the deepest empty slot.
fn hallway_to_compartment(state: &State, depth: usize, moves: &mut Vec<Move>) {
    for (cell_idx, cell) in state.hallway().iter().enumerate() {
        let Some(token) = cell.token() else { continue };

        let home = token.home();
        let door = token.door();
        let slots = state.compartment(home, depth);

        if !slots.iter().all(|c| c.is_empty() || c.token() == Some(token)) {
            continue;
        }

        // The path excludes the token's own cell but includes the door.
        let path = if cell_idx < door {
            cell_idx + 1..door + 1
        } else {
            door..cell_idx
        };
        if !state.hallway_clear(path) {
            continue;
        }

        let Some(slot) = (0..depth).rev().find(|&d| slots[d].is_empty()) else {
            continue;
        };

        let steps = cell_idx.abs_diff(door) as u64 + slot as u64 + 1;
        let target = State::compartment_start(home, depth) + slot;
        moves.push(Move {
            state: state.with_moved(cell_idx, target),
            cost: steps * token.weight(),
        });
    }
}

/// The topmost occupant of each unsettled compartment may step out to any
/// reachable stop cell. Deeper occupants are blocked until it leaves, so each
/// compartment contributes at most one mover per call.
fn compartment_to_hallway(state: &State, depth: usize, moves: &mut Vec<Move>) {
    for compartment in 0..COMPARTMENT_COUNT {
        if state.compartment_settled(compartment, depth) {
            continue;
        }

        let door = DOORS[compartment];
        let slots = state.compartment(compartment, depth);

        for (slot, cell) in slots.iter().enumerate() {
            let Some(token) = cell.token() else { continue };

            let exit_steps = slot as u64 + 1;
            let source = State::compartment_start(compartment, depth) + slot;

            for &stop in &STOP_CELLS {
                // The path includes the stop cell itself but never the door.
                let path = if stop < door { stop..door } else { door + 1..stop + 1 };
                if !state.hallway_clear(path) {
                    continue;
                }

                let steps = exit_steps + stop.abs_diff(door) as u64;
                moves.push(Move {
                    state: state.with_moved(source, stop),
                    cost: steps * token.weight(),
                });
            }

            // Only the topmost occupant moves; the rest are walled in.
            break;
        }
    }
}

/// Conserved per-type token counts, used by tests to check move closure.
#[cfg(test)]
fn token_counts(state: &State) -> [usize; COMPARTMENT_COUNT] {
    let mut counts = [0; COMPARTMENT_COUNT];
    for cell in state.cells() {
        if let Some(token) = cell.token() {
            counts[token.home()] += 1;
        }
    }
    counts
}
