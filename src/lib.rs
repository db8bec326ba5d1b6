//! # Kata Solver Library
//!
//! This library collects small algorithmic exercises ("katas"). The centre
//! piece is a solver for snaking word-search puzzles: given a grid of letters,
//! decide whether a word can be traced through it moving up, down, left or
//! right without reusing a cell.
//!
//! It is used by four binaries:
//! - `puzzle_solver`: loads a grid file and searches a list of words.
//! - `word_hunt`: interactive play against a random or loaded grid.
//! - `solver_evaluator`: plants words into seeded random grids and checks
//!   that the solver recovers them.
//! - `kata`: command line access to the other katas.
//!
//! ## Modules
//! - `puzzle`: the `Grid` type, coordinates, random grids and word planting.
//! - `solver`: `find` / `find_path`, the backtracking snake search.
//! - `utils`: parsing grids from string rows and grid files.
//! - `error`: the `KataError` type.
//! - `dates`, `compass`, `braces`, `zigzag`, `dominoes`, `ranges`, `bank_ocr`,
//!   `wrap`, `poker`, `rectangles`, `permutations`, `stocks`, `url_shortener`:
//!   one kata each.

pub mod bank_ocr;
pub mod braces;
pub mod compass;
pub mod dates;
pub mod dominoes;
pub mod error;
pub mod permutations;
pub mod poker;
pub mod puzzle;
pub mod ranges;
pub mod rectangles;
pub mod solver;
pub mod stocks;
pub mod url_shortener;
pub mod utils;
pub mod wrap;
pub mod zigzag;

pub use error::{KataError, Result};
