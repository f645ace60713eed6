// heuristic.rs
// ──────────────────────────────────────────────────────────────────────────────
// Admissible remaining-cost estimate for the A* driver. Each token contributes
// independently, as if no other token could block its path; blocking can only
// raise the true cost, so the sum never overestimates.
// ──────────────────────────────────────────────────────────────────────────────

use super::state::{Cell, State, TokenType, COMPARTMENT_COUNT, DOORS};

/// Lower bound on the cost still needed to sort `state` into the goal.
pub fn estimate(state: &State, depth: usize) -> u64 {
    let mut h = hallway_contribution(state);

    for compartment in 0..COMPARTMENT_COUNT {
        let door = DOORS[compartment];
        let slots = state.compartment(compartment, depth);

        for (slot, cell) in slots.iter().enumerate() {
            let Some(token) = cell.token() else { continue };

            if token.home() == compartment {
                h += own_compartment_contribution(slot, token, slots);
            } else {
                h += foreign_compartment_contribution(slot, token, door);
            }
        }
    }

    h
}

/// Cost for every token waiting in the hallway: walk to its door, then one
/// step inside.
fn hallway_contribution(state: &State) -> u64 {
    let mut h = 0;
    for (cell_idx, cell) in state.hallway().iter().enumerate() {
        if let Some(token) = cell.token() {
            let to_door = cell_idx.abs_diff(token.door()) as u64;
            h += (to_door + 1) * token.weight();
        }
    }
    h
}

/// A token already in its home compartment still has to vacate if a foreign
/// token sits deeper: exit past `slot` cells, plus the cheapest detour back
/// (one hallway cell sideways and re-enter). With only family below it the
/// token never moves again.
fn own_compartment_contribution(slot: usize, token: TokenType, slots: &[Cell]) -> u64 {
    let blocked = slots[slot + 1..]
        .iter()
        .any(|c| c.token() != Some(token));
    if !blocked {
        return 0;
    }
    let exit = (slot as u64 + 1) * token.weight();
    let detour_and_reenter = (2 + 1) * token.weight();
    exit + detour_and_reenter
}

/// A token in the wrong compartment must exit, traverse the hallway between
/// the two doors and step inside its home.
fn foreign_compartment_contribution(slot: usize, token: TokenType, current_door: usize) -> u64 {
    let exit = (slot as u64 + 1) * token.weight();
    let hallway = current_door.abs_diff(token.door()) as u64 * token.weight();
    let enter = token.weight();
    exit + hallway + enter
}
