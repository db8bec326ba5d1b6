//! Grid model for the snaking word-search puzzle.
//!
//! This module defines:
//! - `Grid`: the rows of characters a word is traced through, with bounds-checked
//!   access for ragged rows and a flat slot numbering used by the solver's visited arena.
//! - `Coord`: a `(row, column)` pair.
//! - Random grid generation and word planting, used by the evaluator binary and tests.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A `(row, column)` position inside a `Grid`.
pub type Coord = (usize, usize);

/// Row deltas for the neighbour order RIGHT, DOWN, LEFT, UP.
pub const DR: [isize; 4] = [0, 1, 0, -1];
/// Column deltas for the neighbour order RIGHT, DOWN, LEFT, UP.
pub const DC: [isize; 4] = [1, 0, -1, 0];

/// Letters used by `Grid::new_random_with_seed`.
pub const DEFAULT_ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const MAX_PLANT_ATTEMPTS: usize = 200;

fn generate_random_letter(rng: &mut impl Rng, alphabet: &[char]) -> char {
    alphabet.choose(rng).copied().unwrap_or('.')
}

/// A puzzle grid: an ordered list of rows of characters.
///
/// Rows are expected to share one length, but ragged rows are tolerated: a
/// cell past the end of its row simply does not exist. The grid is never
/// mutated by a search.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    // offsets[r] is the slot number of (r, 0); offsets has rows.len() + 1 entries.
    offsets: Vec<usize>,
}

impl Grid {
    /// Creates a grid from owned rows.
    ///
    /// # Examples
    /// ```
    /// use kata_solver::puzzle::Grid;
    /// let grid = Grid::from_rows(vec![vec!['A', 'B'], vec!['C', 'D']]);
    /// assert_eq!(grid.get(1, 0), Some('C'));
    /// assert_eq!(grid.get(2, 0), None);
    /// ```
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        let mut acc = 0;
        offsets.push(acc);
        for row in &rows {
            acc += row.len();
            offsets.push(acc);
        }
        Grid { rows, offsets }
    }

    /// Creates a grid from string rows without validating characters.
    ///
    /// Use `utils::grid_from_str_array` when the rows come from user input.
    pub fn from_strs(rows: &[&str]) -> Self {
        Self::from_rows(rows.iter().map(|row| row.chars().collect()).collect())
    }

    /// Creates a `rows` x `cols` grid of random uppercase letters.
    ///
    /// The same seed always produces the same grid.
    pub fn new_random_with_seed(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::new_random_from_alphabet(rows, cols, &DEFAULT_ALPHABET, &mut rng)
    }

    /// Creates a `rows` x `cols` grid drawing each cell from `alphabet`.
    ///
    /// An empty alphabet fills the grid with `.`.
    pub fn new_random_from_alphabet(
        rows: usize,
        cols: usize,
        alphabet: &[char],
        rng: &mut impl Rng,
    ) -> Self {
        let mut grid = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for _ in 0..cols {
                row.push(generate_random_letter(rng, alphabet));
            }
            grid.push(row);
        }
        Self::from_rows(grid)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `r`, or 0 when the row does not exist.
    pub fn cols(&self, r: usize) -> usize {
        self.rows.get(r).map_or(0, Vec::len)
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// True when the grid has no cells at all (no rows, or only empty rows).
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Returns the character at `(r, c)`, or `None` outside the grid.
    pub fn get(&self, r: usize, c: usize) -> Option<char> {
        self.rows.get(r).and_then(|row| row.get(c)).copied()
    }

    /// Flat index of an existing cell, used to address visited markers.
    ///
    /// # Panics
    /// Panics if `r` is not a row of the grid.
    pub(crate) fn slot(&self, (r, c): Coord) -> usize {
        self.offsets[r] + c
    }

    /// The neighbour of `(r, c)` in direction `dir` (index into `DR`/`DC`),
    /// if that cell exists.
    pub fn neighbour(&self, (r, c): Coord, dir: usize) -> Option<Coord> {
        let nr = r.checked_add_signed(DR[dir])?;
        let nc = c.checked_add_signed(DC[dir])?;
        if nc < self.cols(nr) {
            Some((nr, nc))
        } else {
            None
        }
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &ch)| ((r, c), ch))
        })
    }

    /// Writes `word` along a random self-avoiding orthogonal walk.
    ///
    /// Returns the walk on success, or `None` if no walk of the word's length
    /// was found within a bounded number of attempts (for instance because the
    /// word is longer than the grid). The grid is left untouched on failure.
    pub fn plant_word(&mut self, word: &str, rng: &mut impl Rng) -> Option<Vec<Coord>> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Some(Vec::new());
        }
        if letters.len() > self.cell_count() {
            return None;
        }
        let starts: Vec<Coord> = self.cells().map(|(coord, _)| coord).collect();

        for _ in 0..MAX_PLANT_ATTEMPTS {
            let Some(&start) = starts.choose(rng) else {
                return None;
            };
            let mut walk = vec![start];
            let mut used = vec![false; self.cell_count()];
            used[self.slot(start)] = true;

            while walk.len() < letters.len() {
                let Some(&last) = walk.last() else { break };
                let open: Vec<Coord> = (0..4)
                    .filter_map(|dir| self.neighbour(last, dir))
                    .filter(|&next| !used[self.slot(next)])
                    .collect();
                match open.choose(rng) {
                    Some(&next) => {
                        used[self.slot(next)] = true;
                        walk.push(next);
                    }
                    None => break,
                }
            }

            if walk.len() == letters.len() {
                for (&(r, c), &ch) in walk.iter().zip(&letters) {
                    self.rows[r][c] = ch;
                }
                return Some(walk);
            }
        }
        None
    }

    /// Renders the grid with row and column indices, marking the cells of
    /// `path` with ANSI reverse video.
    ///
    /// The first cell of the path is drawn in bold as well so the start of the
    /// word is easy to spot.
    pub fn to_string_with_highlight(&self, path: &[Coord]) -> String {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut output = String::new();

        output.push_str("   ");
        for c_idx in 0..width {
            output.push_str(&format!("{:<2}", c_idx % 100));
        }
        output.push('\n');

        for (r_idx, row) in self.rows.iter().enumerate() {
            output.push_str(&format!("{:<3}", r_idx));
            for (c_idx, ch) in row.iter().enumerate() {
                match path.iter().position(|&p| p == (r_idx, c_idx)) {
                    Some(0) => output.push_str(&format!("\x1b[1;7m{}\x1b[m ", ch)),
                    Some(_) => output.push_str(&format!("\x1b[7m{}\x1b[m ", ch)),
                    None => output.push_str(&format!("{} ", ch)),
                }
            }
            if r_idx + 1 < self.rows.len() {
                output.push('\n');
            }
        }

        output
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_rows(Vec::new())
    }
}

impl fmt::Display for Grid {
    /// Writes one row per line, without indices or colours.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_strs_and_get() {
        let grid = Grid::from_strs(&["AB", "CDE"]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(0), 2);
        assert_eq!(grid.cols(1), 3);
        assert_eq!(grid.cols(7), 0);
        assert_eq!(grid.get(1, 2), Some('E'));
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.cell_count(), 5);
    }

    #[test]
    fn test_slots_are_dense_and_unique() {
        let grid = Grid::from_strs(&["ABC", "D", "EF"]);
        let slots: Vec<usize> = grid.cells().map(|(coord, _)| grid.slot(coord)).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_neighbour_respects_ragged_rows() {
        let grid = Grid::from_strs(&["ABC", "D"]);
        // RIGHT, DOWN, LEFT, UP from (0, 0)
        assert_eq!(grid.neighbour((0, 0), 0), Some((0, 1)));
        assert_eq!(grid.neighbour((0, 0), 1), Some((1, 0)));
        assert_eq!(grid.neighbour((0, 0), 2), None);
        assert_eq!(grid.neighbour((0, 0), 3), None);
        // (0, 2) has nothing below it because row 1 is short.
        assert_eq!(grid.neighbour((0, 2), 1), None);
    }

    #[test]
    fn test_empty_grids() {
        assert!(Grid::from_strs(&[]).is_empty());
        assert!(Grid::from_strs(&["", ""]).is_empty());
        assert!(!Grid::from_strs(&["", "A"]).is_empty());
    }

    #[test]
    fn test_new_random_with_seed_determinism() {
        let a = Grid::new_random_with_seed(6, 7, 42);
        let b = Grid::new_random_with_seed(6, 7, 42);
        let c = Grid::new_random_with_seed(6, 7, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.rows(), 6);
        assert!(a.cells().all(|(_, ch)| ch.is_ascii_uppercase()));
    }

    #[test]
    fn test_plant_word_writes_along_adjacent_cells() {
        let mut grid = Grid::new_random_with_seed(5, 5, 7);
        let mut rng = SmallRng::seed_from_u64(99);
        let walk = grid.plant_word("SNAKING", &mut rng).unwrap();
        assert_eq!(walk.len(), 7);
        let written: String = walk.iter().map(|&(r, c)| grid.get(r, c).unwrap()).collect();
        assert_eq!(written, "SNAKING");
        for pair in walk.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1);
        }
        let mut seen = walk.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), walk.len());
    }

    #[test]
    fn test_plant_word_too_long_fails_without_changes() {
        let mut grid = Grid::from_strs(&["AB", "CD"]);
        let before = grid.clone();
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(grid.plant_word("TOOLONG", &mut rng).is_none());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_display_plain_rows() {
        let grid = Grid::from_strs(&["AB", "CD"]);
        assert_eq!(grid.to_string(), "AB\nCD");
    }

    #[test]
    fn test_highlight_formatting() {
        let grid = Grid::from_strs(&["AB", "CD"]);
        let rendered = grid.to_string_with_highlight(&[(0, 1), (1, 1)]);
        let expected = "   0 1 \n0  A \x1b[1;7mB\x1b[m \n1  C \x1b[7mD\x1b[m ";
        assert_eq!(rendered, expected);
    }
}
