//! Provides file reading and input validation for both puzzle cores.
//!
//! The core algorithms treat malformed input as out of scope, so everything
//! structural (file existence, diagram shape, edge-list format) is checked
//! here before a `State` or `NetworkGraph` is ever constructed. Uses macros
//! from the parent `app` module for verbose logging.

use std::fs;
use std::path::PathBuf;
// Use super:: for macros defined in app/mod.rs
use super::error::AppError;
use super::verbose_eprintln;

/// Validates the input path and reads it into non-empty lines.
///
/// # Arguments
/// * `input_path` - A `PathBuf` to the puzzle input file.
/// * `quiet_mode` - A boolean indicating whether to suppress verbose logging.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file, and
/// `AppError::Io` if reading fails.
pub fn read_input_lines(input_path: &PathBuf, quiet_mode: bool) -> Result<Vec<String>, AppError> {
    if !input_path.exists() {
        let error_msg = format!("File not found: {}", input_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !input_path.is_file() {
        let error_msg = format!("Path is not a file: {}", input_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }

    let content = fs::read_to_string(input_path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim_end().is_empty())
        .map(str::to_string)
        .collect())
}

/// Checks the rectangular shape of a sorting diagram before parsing.
///
/// # Errors
/// Returns `AppError::InvalidInput` when the row count, hallway row, or cell
/// characters do not match the expected diagram layout.
pub fn validate_diagram(lines: &[String]) -> Result<(), AppError> {
    if lines.len() < 4 {
        return Err(AppError::InvalidInput(format!(
            "diagram needs at least 4 rows, got {}",
            lines.len()
        )));
    }

    let hallway = &lines[1];
    if hallway.len() < 13 || !hallway.starts_with('#') {
        return Err(AppError::InvalidInput(
            "diagram row 1 is not a walled 11-cell hallway".to_string(),
        ));
    }

    for line in lines {
        for c in line.chars() {
            if !matches!(c, '#' | '.' | ' ' | 'A' | 'B' | 'C' | 'D') {
                return Err(AppError::InvalidInput(format!(
                    "unknown diagram character {:?}",
                    c
                )));
            }
        }
    }
    Ok(())
}

/// Parses an edge-list file into `(node1, node2)` pairs.
///
/// Each line must have the form `node1-node2`; self-loops are rejected.
///
/// # Errors
/// Returns `AppError::InvalidInput` for lines without a separator or whose
/// endpoints coincide.
pub fn parse_edge_list(lines: &[String]) -> Result<Vec<(String, String)>, AppError> {
    let mut edges = Vec::with_capacity(lines.len());
    for line in lines {
        let trimmed = line.trim();
        let Some((node1, node2)) = trimmed.split_once('-') else {
            return Err(AppError::InvalidInput(format!(
                "edge line {:?} is not of the form node1-node2",
                trimmed
            )));
        };
        if node1.is_empty() || node2.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "edge line {:?} has an empty endpoint",
                trimmed
            )));
        }
        if node1 == node2 {
            return Err(AppError::InvalidInput(format!(
                "edge line {:?} is a self-loop",
                trimmed
            )));
        }
        edges.push((node1.to_string(), node2.to_string()));
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn diagram_validation_accepts_canonical_shape() {
        let diagram = lines(&[
            "#############",
            "#...........#",
            "###B#C#B#D###",
            "  #A#D#C#A#",
            "  #########",
        ]);
        assert!(validate_diagram(&diagram).is_ok());
    }

    #[test]
    fn diagram_validation_rejects_unknown_characters() {
        let diagram = lines(&[
            "#############",
            "#...........#",
            "###B#C#X#D###",
            "  #########",
        ]);
        assert!(matches!(
            validate_diagram(&diagram),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn edge_list_parses_well_formed_lines() {
        let edges = parse_edge_list(&lines(&["a-B", "a-c"])).unwrap();
        assert_eq!(edges[0], ("a".to_string(), "B".to_string()));
    }

    #[test]
    fn edge_list_rejects_self_loops_and_bad_lines() {
        assert!(parse_edge_list(&lines(&["a-a"])).is_err());
        assert!(parse_edge_list(&lines(&["ab"])).is_err());
        assert!(parse_edge_list(&lines(&["a-"])).is_err());
    }
}
