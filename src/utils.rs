use crate::error::{KataError, Result};
use crate::puzzle::Grid;
use std::fs;
use std::path::Path;

/// Parses an array of string slices into a `Grid`.
///
/// Each string slice is one row, starting from row 0. Rows may differ in
/// length; the search treats missing cells as outside the grid.
///
/// Whitespace and control characters are not valid cells and result in an
/// error, since they cannot be told apart from layout in a grid file.
///
/// # Examples
/// ```
/// use kata_solver::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&["ANGULAR", "REDNCAE"]).unwrap();
/// assert_eq!(grid.get(1, 2), Some('D'));
///
/// assert!(grid_from_str_array(&["AB C"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid> {
    let mut rows = Vec::with_capacity(s.len());
    for (r, row_str) in s.iter().enumerate() {
        let mut row = Vec::with_capacity(row_str.len());
        for (c, ch) in row_str.chars().enumerate() {
            if ch.is_whitespace() || ch.is_control() {
                return Err(KataError::InvalidInput(format!(
                    "unrecognized character {:?} in row {} col {}",
                    ch, r, c
                )));
            }
            row.push(ch);
        }
        rows.push(row);
    }
    Ok(Grid::from_rows(rows))
}

/// Parses the text of a grid file: one row per line, surrounding whitespace
/// trimmed and blank lines skipped.
///
/// With `require_rectangular` set, every row must have the length of the first.
pub fn grid_from_text(content: &str, require_rectangular: bool) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if require_rectangular {
        if let Some(first) = lines.first() {
            let width = first.chars().count();
            for (i, line) in lines.iter().enumerate() {
                let len = line.chars().count();
                if len != width {
                    return Err(KataError::InvalidInput(format!(
                        "line {} has {} characters (expected {})",
                        i + 1,
                        len,
                        width
                    )));
                }
            }
        }
    }

    grid_from_str_array(&lines)
}

/// Reads and parses a grid file.
pub fn read_grid_file(path: &Path, require_rectangular: bool) -> Result<Grid> {
    let content = fs::read_to_string(path)?;
    grid_from_text(&content, require_rectangular)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_str_array_valid() {
        let grid = grid_from_str_array(&["ANGULAR", "REDNCAE", "RFIDTCL"]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.get(0, 0), Some('A'));
        assert_eq!(grid.get(2, 6), Some('L'));
    }

    #[test]
    fn test_grid_from_str_array_with_spaces() {
        let result = grid_from_str_array(&["R G Y"]);
        match result {
            Err(KataError::InvalidInput(msg)) => {
                assert!(msg.contains("unrecognized character ' ' in row 0 col 1"), "{}", msg)
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_grid_from_str_array_empty_input() {
        let grid = grid_from_str_array(&[]).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_text_trims_and_skips_blank_lines() {
        let grid = grid_from_text("  ABC \n\n DEF\n\n", true).unwrap();
        assert_eq!(grid.to_string(), "ABC\nDEF");
    }

    #[test]
    fn test_grid_from_text_rectangular_check() {
        assert!(grid_from_text("ABC\nDE\n", false).is_ok());
        let err = grid_from_text("ABC\nDE\n", true).unwrap_err();
        assert!(err.to_string().contains("line 2 has 2 characters (expected 3)"));
    }

    #[test]
    fn test_read_grid_file_missing() {
        let err = read_grid_file(Path::new("/definitely/not/here.txt"), false).unwrap_err();
        assert!(matches!(err, KataError::Io(_)));
    }
}
