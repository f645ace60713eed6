// state.rs
// ──────────────────────────────────────────────────────────────────────────────
// Value-type representation of a sorting configuration: an 11-cell hallway
// followed by four fixed-depth compartments laid out as one flat cell array.
// States are immutable search keys: successors are fresh values produced by
// the move generator, never in-place edits. The type derives structural
// equality, hashing and ordering to serve the visited map and the priority
// queue directly.
//
// Slot convention used throughout the crate: within a compartment, slot 0 is
// the cell adjacent to the hallway; slot depth-1 is the innermost cell. The
// number of steps a token needs to leave slot d is therefore d + 1.
// ──────────────────────────────────────────────────────────────────────────────

use std::fmt;

/// Number of hallway cells.
pub const HALLWAY_LEN: usize = 11;

/// Number of compartments.
pub const COMPARTMENT_COUNT: usize = 4;

/// Hallway cells aligned with each compartment entrance, by compartment rank.
pub const DOORS: [usize; COMPARTMENT_COUNT] = [2, 4, 6, 8];

/// Hallway cells a token may stop on: every cell except the four doors.
pub const STOP_CELLS: [usize; 7] = [0, 1, 3, 5, 7, 9, 10];

/// The four token types, ranked by target compartment.
///
/// Each rank's per-step cost weight grows by a factor of ten, so misplacing a
/// high-rank token dominates the total cost of a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenType {
    A,
    B,
    C,
    D,
}

impl TokenType {
    pub const ALL: [TokenType; COMPARTMENT_COUNT] =
        [TokenType::A, TokenType::B, TokenType::C, TokenType::D];

    /// Per-step movement cost for this token type.
    pub fn weight(self) -> u64 {
        match self {
            TokenType::A => 1,
            TokenType::B => 10,
            TokenType::C => 100,
            TokenType::D => 1000,
        }
    }

    /// Index of the compartment this token must end up in.
    pub fn home(self) -> usize {
        self as usize
    }

    /// Hallway cell in front of this token's home compartment.
    pub fn door(self) -> usize {
        DOORS[self.home()]
    }

    /// The token type a compartment of the given rank is reserved for.
    pub fn for_compartment(idx: usize) -> TokenType {
        TokenType::ALL[idx]
    }

    /// Maps a diagram character to a token type, if it names one.
    pub fn from_char(c: char) -> Option<TokenType> {
        match c {
            'A' => Some(TokenType::A),
            'B' => Some(TokenType::B),
            'C' => Some(TokenType::C),
            'D' => Some(TokenType::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            TokenType::A => 'A',
            TokenType::B => 'B',
            TokenType::C => 'C',
            TokenType::D => 'D',
        }
    }
}

/// A single hallway or compartment cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    Empty,
    Occupied(TokenType),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn token(self) -> Option<TokenType> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(t) => Some(t),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(t) => t.as_char(),
        }
    }
}

/// A complete configuration: hallway cells followed by the cells of each
/// compartment in rank order, each compartment slot 0 first.
///
/// Token counts per type are conserved across every state the move generator
/// derives from this one; the cell vector length is fixed at
/// `HALLWAY_LEN + COMPARTMENT_COUNT * depth`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    cells: Vec<Cell>,
}

impl State {
    /// Builds a state from raw cells. The caller (codec or move generator)
    /// guarantees the layout invariant.
    pub fn from_cells(cells: Vec<Cell>) -> State {
        State { cells }
    }

    /// Compartment depth implied by the cell count.
    pub fn depth(&self) -> usize {
        (self.cells.len() - HALLWAY_LEN) / COMPARTMENT_COUNT
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The hallway portion of the state.
    pub fn hallway(&self) -> &[Cell] {
        &self.cells[..HALLWAY_LEN]
    }

    /// Flat index where compartment `idx` begins.
    pub fn compartment_start(idx: usize, depth: usize) -> usize {
        HALLWAY_LEN + idx * depth
    }

    /// The cells of compartment `idx`, slot 0 (nearest the hallway) first.
    pub fn compartment(&self, idx: usize, depth: usize) -> &[Cell] {
        let start = Self::compartment_start(idx, depth);
        &self.cells[start..start + depth]
    }

    /// True when compartment `idx` holds only its own token type or empties;
    /// nothing in it ever needs to move again.
    pub fn compartment_settled(&self, idx: usize, depth: usize) -> bool {
        let own = TokenType::for_compartment(idx);
        self.compartment(idx, depth)
            .iter()
            .all(|c| c.is_empty() || c.token() == Some(own))
    }

    /// True when every hallway cell in `range` is free.
    pub fn hallway_clear(&self, range: std::ops::Range<usize>) -> bool {
        self.cells[range.start..range.end].iter().all(|c| c.is_empty())
    }

    /// Returns a successor with the cells at `from` and `to` swapped
    /// (one of them empty in every legal move).
    pub fn with_moved(&self, from: usize, to: usize) -> State {
        let mut cells = self.cells.clone();
        cells.swap(from, to);
        State { cells }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.as_char())?;
        }
        Ok(())
    }
}

/// A legal single-token relocation: the resulting state and the cost incurred
/// to reach it from the predecessor.
#[derive(Clone, Debug)]
pub struct Move {
    pub state: State,
    pub cost: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_grow_tenfold_by_rank() {
        assert_eq!(TokenType::A.weight(), 1);
        assert_eq!(TokenType::B.weight(), 10);
        assert_eq!(TokenType::C.weight(), 100);
        assert_eq!(TokenType::D.weight(), 1000);
    }

    #[test]
    fn doors_align_with_home_compartments() {
        assert_eq!(TokenType::A.door(), 2);
        assert_eq!(TokenType::D.door(), 8);
    }

    #[test]
    fn settled_detects_foreign_occupants() {
        // Hallway empty, compartment 0 = [A, B] at depth 2, others empty.
        let mut cells = vec![Cell::Empty; HALLWAY_LEN + 8];
        cells[HALLWAY_LEN] = Cell::Occupied(TokenType::A);
        cells[HALLWAY_LEN + 1] = Cell::Occupied(TokenType::B);
        let state = State::from_cells(cells);
        assert!(!state.compartment_settled(0, 2));
        assert!(state.compartment_settled(1, 2));
    }

    #[test]
    fn with_moved_produces_a_distinct_value() {
        let mut cells = vec![Cell::Empty; HALLWAY_LEN + 4];
        cells[HALLWAY_LEN] = Cell::Occupied(TokenType::A);
        let state = State::from_cells(cells);
        let moved = state.with_moved(HALLWAY_LEN, 0);
        assert_ne!(state, moved);
        assert_eq!(moved.hallway()[0], Cell::Occupied(TokenType::A));
        assert!(moved.compartment(0, 1)[0].is_empty());
    }
}
