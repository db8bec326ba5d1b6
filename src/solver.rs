use crate::puzzle::{Coord, Grid};
use tracing::{debug, trace};

/// One step of the current path together with the next neighbour direction
/// still to be tried from it. Directions follow `puzzle::DR`/`puzzle::DC`:
/// RIGHT, DOWN, LEFT, UP.
#[derive(Clone, Copy, Debug)]
struct Frame {
    coord: Coord,
    next_dir: usize,
}

/// Returns true if `target` can be traced through `grid` as a snake.
///
/// A snake starts on any cell holding the first character and moves to one of
/// the four orthogonal neighbours for every following character, never
/// visiting a cell twice. The empty target is a vacuous match.
///
/// # Examples
/// ```
/// use kata_solver::puzzle::Grid;
/// use kata_solver::solver::find;
///
/// let grid = Grid::from_strs(&["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"]);
/// assert!(find(&grid, "REACT"));
/// assert!(!find(&grid, "NULL"));
/// ```
pub fn find(grid: &Grid, target: &str) -> bool {
    find_path(grid, target).is_some()
}

/// Returns the first snake spelling `target`, if any.
///
/// Start cells are tried in row-major order and neighbours in the order
/// RIGHT, DOWN, LEFT, UP, so the result is deterministic. The order only
/// decides which path is reported, never whether one exists.
pub fn find_path(grid: &Grid, target: &str) -> Option<Vec<Coord>> {
    let letters: Vec<char> = target.chars().collect();
    let Some(&first) = letters.first() else {
        return Some(Vec::new());
    };
    if letters.len() > grid.cell_count() {
        debug!(
            word = target,
            cells = grid.cell_count(),
            "target is longer than the grid, skipping search"
        );
        return None;
    }

    let mut visited = vec![false; grid.cell_count()];
    for (start, ch) in grid.cells() {
        if ch != first {
            continue;
        }
        trace!(word = target, ?start, "trying start cell");
        if let Some(path) = search_from(grid, &letters, start, &mut visited) {
            debug!(word = target, ?path, "snake found");
            return Some(path);
        }
    }
    debug!(word = target, "no snake found");
    None
}

/// Searches every word and pairs it with its path, if found.
pub fn find_all(grid: &Grid, words: &[&str]) -> Vec<(String, Option<Vec<Coord>>)> {
    words
        .iter()
        .map(|word| (word.to_string(), find_path(grid, word)))
        .collect()
}

// Depth-first search from one start cell with an explicit stack. The stack
// depth is the path length, so popping a frame both backtracks and truncates
// the path. `visited` is all false on entry and on exit.
fn search_from(
    grid: &Grid,
    letters: &[char],
    start: Coord,
    visited: &mut [bool],
) -> Option<Vec<Coord>> {
    let mut stack = vec![Frame {
        coord: start,
        next_dir: 0,
    }];
    visited[grid.slot(start)] = true;

    while !stack.is_empty() {
        let depth = stack.len();
        if depth == letters.len() {
            let path: Vec<Coord> = stack.iter().map(|frame| frame.coord).collect();
            for &coord in &path {
                visited[grid.slot(coord)] = false;
            }
            return Some(path);
        }

        let wanted = letters[depth];
        let frame = &mut stack[depth - 1];
        let mut next = None;
        while frame.next_dir < 4 {
            let dir = frame.next_dir;
            frame.next_dir += 1;
            if let Some(cell) = grid.neighbour(frame.coord, dir) {
                if grid.get(cell.0, cell.1) == Some(wanted) && !visited[grid.slot(cell)] {
                    next = Some(cell);
                    break;
                }
            }
        }

        match next {
            Some(cell) => {
                visited[grid.slot(cell)] = true;
                stack.push(Frame {
                    coord: cell,
                    next_dir: 0,
                });
            }
            None => {
                if let Some(dead_end) = stack.pop() {
                    trace!(coord = ?dead_end.coord, depth, "backtracking");
                    visited[grid.slot(dead_end.coord)] = false;
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_grid() -> Grid {
        Grid::from_strs(&["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"])
    }

    fn assert_is_snake(grid: &Grid, path: &[Coord], word: &str) {
        let spelled: String = path.iter().map(|&(r, c)| grid.get(r, c).unwrap()).collect();
        assert_eq!(spelled, word);
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1, "{:?} -> {:?}", a, b);
        }
        let mut unique = path.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), path.len(), "path crosses itself");
    }

    #[test]
    fn test_find_example_words() {
        let grid = sample_grid();
        for word in ["ANGULAR", "REACT", "UNDEFINED", "RED", "STRING", "CLASS", "ARRAY"] {
            assert!(find(&grid, word), "{} should be found", word);
        }
        for word in ["FUNCTION", "NULL"] {
            assert!(!find(&grid, word), "{} should not be found", word);
        }
    }

    #[test]
    fn test_find_path_reports_a_valid_snake() {
        let grid = sample_grid();
        for word in ["ANGULAR", "REACT", "UNDEFINED", "STRING", "CLASS", "ARRAY"] {
            let path = find_path(&grid, word).unwrap();
            assert_is_snake(&grid, &path, word);
        }
    }

    #[test]
    fn test_find_path_react_route() {
        // Starts at the top-right R and follows down, left, left, down.
        let grid = sample_grid();
        let path = find_path(&grid, "REACT").unwrap();
        assert_eq!(path, vec![(0, 6), (1, 6), (1, 5), (1, 4), (2, 4)]);
    }

    #[test]
    fn test_empty_target_is_vacuous_match() {
        assert!(find(&sample_grid(), ""));
        assert!(find(&Grid::default(), ""));
        assert_eq!(find_path(&sample_grid(), ""), Some(Vec::new()));
    }

    #[test]
    fn test_single_char_target() {
        let grid = sample_grid();
        assert_eq!(find_path(&grid, "Y"), Some(vec![(4, 0)]));
        assert!(!find(&grid, "Z"));
    }

    #[test]
    fn test_no_cell_reuse() {
        let grid = Grid::from_strs(&["AB"]);
        assert!(find(&grid, "AB"));
        assert!(find(&grid, "BA"));
        assert!(!find(&grid, "ABA"));
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        // From the top-left A the first branch (right) runs into a dead end;
        // the word only completes by going down first.
        let grid = Grid::from_strs(&["AXQ", "XQQ", "YZQ"]);
        assert_eq!(find_path(&grid, "AXYZ"), Some(vec![(0, 0), (1, 0), (2, 0), (2, 1)]));
    }

    #[test]
    fn test_square_cannot_be_closed() {
        let grid = Grid::from_strs(&["AB", "BC"]);
        assert!(find(&grid, "ABCB"));
        assert!(!find(&grid, "ABCBA"));
    }

    #[test]
    fn test_target_longer_than_grid() {
        let grid = Grid::from_strs(&["AA", "AA"]);
        assert!(find(&grid, "AAAA"));
        assert!(!find(&grid, "AAAAA"));
    }

    #[test]
    fn test_empty_and_ragged_grids() {
        assert!(!find(&Grid::default(), "A"));
        assert!(!find(&Grid::from_strs(&["", ""]), "A"));
        let ragged = Grid::from_strs(&["ABC", "", "D"]);
        assert!(find(&ragged, "CBA"));
        assert!(!find(&ragged, "AD"));
    }

    #[test]
    fn test_find_all() {
        let grid = sample_grid();
        let results = find_all(&grid, &["RED", "NULL"]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "RED");
        assert!(results[0].1.is_some());
        assert_eq!(results[1].0, "NULL");
        assert!(results[1].1.is_none());
    }

    #[test]
    fn test_non_ascii_letters() {
        let grid = Grid::from_strs(&["ÄÖ", "ÜÉ"]);
        assert!(find(&grid, "ÄÖÉÜ"));
        assert!(!find(&grid, "ÄÉ"));
    }

    fn arb_grid() -> impl Strategy<Value = Vec<String>> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::string::string_regex(&format!("[A-D]{{{}}}", cols)).unwrap(), rows)
        })
    }

    proptest! {
        #[test]
        fn test_rows_and_columns_are_always_found(rows in arb_grid()) {
            let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
            let grid = Grid::from_strs(&refs);
            for row in &rows {
                prop_assert!(find(&grid, row));
                let reversed: String = row.chars().rev().collect();
                prop_assert!(find(&grid, &reversed));
            }
            for c in 0..grid.cols(0) {
                let column: String = (0..grid.rows()).filter_map(|r| grid.get(r, c)).collect();
                prop_assert!(find(&grid, &column));
            }
        }

        #[test]
        fn test_search_is_idempotent_and_pure(rows in arb_grid(), word in "[A-D]{0,6}") {
            let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
            let grid = Grid::from_strs(&refs);
            let before = grid.clone();
            let first = find_path(&grid, &word);
            let second = find_path(&grid, &word);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&grid, &before);
            if let Some(path) = first {
                prop_assert_eq!(path.len(), word.chars().count());
                assert_is_snake(&grid, &path, &word);
            }
        }
    }
}
