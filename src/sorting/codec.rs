// codec.rs
// ──────────────────────────────────────────────────────────────────────────────
// Translates the rectangular ASCII diagram into a flat `State` and back.
//
//     #############
//     #...........#
//     ###B#C#B#D###
//       #A#D#C#A#
//       #########
//
// Row 1 is the hallway; rows 2..2+depth are compartment rows read top to
// bottom, so the first compartment row lands in slot 0 (nearest the hallway)
// of each compartment, matching the slot convention in `state.rs`. The goal
// state derived alongside has an empty hallway and each compartment filled
// with its designated type.
// ──────────────────────────────────────────────────────────────────────────────

use super::error::SearchError;
use super::state::{Cell, State, TokenType, COMPARTMENT_COUNT, HALLWAY_LEN};

/// Column of each compartment within a diagram row.
const DIAGRAM_COLUMNS: [usize; COMPARTMENT_COUNT] = [3, 5, 7, 9];

/// Parses a diagram into `(start, goal, depth)`.
///
/// `depth` is the number of compartment rows: total rows minus the top wall,
/// the hallway row and the bottom wall. Structural defects (too few rows, a
/// short row, an unknown cell character) are reported as
/// [`SearchError::MalformedDiagram`]; the caller is expected to have
/// validated the input already.
pub fn parse(lines: &[String]) -> Result<(State, State, usize), SearchError> {
    if lines.len() < 4 {
        return Err(SearchError::MalformedDiagram(format!(
            "expected at least 4 diagram rows, got {}",
            lines.len()
        )));
    }
    let depth = lines.len() - 3;

    let mut cells = Vec::with_capacity(HALLWAY_LEN + COMPARTMENT_COUNT * depth);
    let hallway_row = lines[1].as_bytes();
    for col in 1..=HALLWAY_LEN {
        let byte = hallway_row.get(col).copied().ok_or_else(|| {
            SearchError::MalformedDiagram(format!("hallway row is shorter than {} cells", HALLWAY_LEN))
        })?;
        cells.push(cell_from_byte(byte)?);
    }

    // Compartment cells, one compartment at a time, slot 0 first.
    for compartment in 0..COMPARTMENT_COUNT {
        let column = DIAGRAM_COLUMNS[compartment];
        for row in 0..depth {
            let line = lines[2 + row].as_bytes();
            let byte = line.get(column).copied().ok_or_else(|| {
                SearchError::MalformedDiagram(format!(
                    "compartment row {} is missing column {}",
                    row, column
                ))
            })?;
            cells.push(cell_from_byte(byte)?);
        }
    }

    let start = State::from_cells(cells);

    let mut goal_cells = vec![Cell::Empty; HALLWAY_LEN];
    for compartment in 0..COMPARTMENT_COUNT {
        let own = TokenType::for_compartment(compartment);
        goal_cells.extend(std::iter::repeat(Cell::Occupied(own)).take(depth));
    }
    let goal = State::from_cells(goal_cells);

    Ok((start, goal, depth))
}

/// Renders a state back into the canonical diagram shape accepted by
/// [`parse`]. Round-trips: `serialize(parse(text).0) == text` for a canonical
/// diagram.
pub fn serialize(state: &State, depth: usize) -> String {
    let mut out = String::new();
    out.push_str("#############\n");

    out.push('#');
    for cell in state.hallway() {
        out.push(cell.as_char());
    }
    out.push_str("#\n");

    for row in 0..depth {
        let prefix = if row == 0 { "###" } else { "  #" };
        out.push_str(prefix);
        for compartment in 0..COMPARTMENT_COUNT {
            out.push(state.compartment(compartment, depth)[row].as_char());
            out.push('#');
        }
        if row == 0 {
            out.push_str("##");
        }
        out.push('\n');
    }

    out.push_str("  #########\n");
    out
}

fn cell_from_byte(byte: u8) -> Result<Cell, SearchError> {
    let c = byte as char;
    if c == '.' {
        return Ok(Cell::Empty);
    }
    TokenType::from_char(c)
        .map(Cell::Occupied)
        .ok_or_else(|| SearchError::MalformedDiagram(format!("unknown cell character {:?}", c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    const CANONICAL: &str = "\
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

    #[test]
    fn parse_reads_hallway_and_compartments() {
        let (start, goal, depth) = parse(&lines(CANONICAL)).unwrap();
        assert_eq!(depth, 2);
        assert!(start.hallway().iter().all(|c| c.is_empty()));
        // Compartment 0 top-to-bottom is B, A.
        assert_eq!(
            start.compartment(0, depth),
            &[Cell::Occupied(TokenType::B), Cell::Occupied(TokenType::A)]
        );
        // Goal: each compartment filled with its own type.
        assert_eq!(
            goal.compartment(3, depth),
            &[Cell::Occupied(TokenType::D), Cell::Occupied(TokenType::D)]
        );
    }

    #[test]
    fn serialize_round_trips_canonical_diagram() {
        let (start, _, depth) = parse(&lines(CANONICAL)).unwrap();
        assert_eq!(serialize(&start, depth), CANONICAL);
    }

    #[test]
    fn parse_rejects_truncated_diagram() {
        let result = parse(&lines("#############\n#...........#\n"));
        assert!(matches!(result, Err(SearchError::MalformedDiagram(_))));
    }

    #[test]
    fn parse_rejects_unknown_character() {
        let bad = CANONICAL.replace('B', "X");
        let result = parse(&lines(&bad));
        assert!(matches!(result, Err(SearchError::MalformedDiagram(_))));
    }
}
