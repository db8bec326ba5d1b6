//! OCR of bank account numbers drawn with pipes and underscores.
//!
//! Each digit is a 3x3 glyph; a scan is three lines of glyphs side by side:
//!
//! ```text
//!     _  _     _  _  _  _  _
//!   | _| _||_||_ |_   ||_||_|
//!   ||_  _|  | _||_|  ||_| _|
//! ```

use crate::error::{KataError, Result};

const GLYPH_WIDTH: usize = 3;

const GLYPHS: [[&str; 3]; 10] = [
    [" _ ", "| |", "|_|"],
    ["   ", "  |", "  |"],
    [" _ ", " _|", "|_ "],
    [" _ ", " _|", " _|"],
    ["   ", "|_|", "  |"],
    [" _ ", "|_ ", " _|"],
    [" _ ", "|_ ", "|_|"],
    [" _ ", "  |", "  |"],
    [" _ ", "|_|", "|_|"],
    [" _ ", "|_|", " _|"],
];

/// Parses a scanned account number into its numeric value.
///
/// The scan must have exactly three non-empty lines of equal length, a
/// multiple of three. Leading zeros are lost in the returned number, as in
/// `023056789` parsing to `23056789`.
///
/// # Errors
/// `KataError::InvalidInput` when the layout is wrong, a glyph is not a
/// digit, or the number does not fit into a `u64`.
pub fn parse_bank_account(scan: &str) -> Result<u64> {
    let lines: Vec<Vec<char>> = scan
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();
    if lines.len() != 3 {
        return Err(KataError::InvalidInput(format!(
            "expected 3 glyph lines, found {}",
            lines.len()
        )));
    }
    let width = lines[0].len();
    if width == 0 || width % GLYPH_WIDTH != 0 || lines.iter().any(|l| l.len() != width) {
        return Err(KataError::InvalidInput(format!(
            "glyph lines must share a length that is a multiple of {}",
            GLYPH_WIDTH
        )));
    }

    let mut value: u64 = 0;
    for pos in 0..width / GLYPH_WIDTH {
        let cell: Vec<String> = lines
            .iter()
            .map(|line| line[pos * GLYPH_WIDTH..(pos + 1) * GLYPH_WIDTH].iter().collect())
            .collect();
        let digit = GLYPHS
            .iter()
            .position(|glyph| glyph.iter().zip(&cell).all(|(g, c)| *g == c.as_str()))
            .ok_or_else(|| {
                KataError::InvalidInput(format!("unknown glyph at position {}: {:?}", pos, cell))
            })?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or_else(|| KataError::InvalidInput("account number overflows u64".to_string()))?;
    }
    Ok(value)
}
