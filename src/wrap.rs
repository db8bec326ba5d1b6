//! Greedy word wrapping at spaces.

use std::iter::Peekable;
use std::str::Split;

/// Lazy iterator over the lines produced by `wrap_text`.
#[derive(Clone, Debug)]
pub struct WrapText<'a> {
    words: Peekable<Split<'a, char>>,
    columns: usize,
}

/// Breaks `text` into lines no longer than `columns` characters, breaking at
/// spaces only.
///
/// Lines are filled greedily. A single word longer than `columns` cannot be
/// broken and is returned on a line of its own.
///
/// # Examples
/// ```
/// use kata_solver::wrap::wrap_text;
///
/// let text = "The String global object is a constructor for strings, or a sequence of characters.";
/// let lines: Vec<String> = wrap_text(text, 26).collect();
/// assert_eq!(lines, [
///     "The String global object",
///     "is a constructor for",
///     "strings, or a sequence of",
///     "characters.",
/// ]);
/// ```
pub fn wrap_text(text: &str, columns: usize) -> WrapText<'_> {
    WrapText {
        words: text.split(' ').peekable(),
        columns,
    }
}

impl Iterator for WrapText<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.words.next()?;
        let mut line = first.to_string();
        let mut len = first.chars().count();
        while let Some(word) = self.words.peek() {
            let word_len = word.chars().count();
            if len + 1 + word_len > self.columns {
                break;
            }
            line.push(' ');
            line.push_str(word);
            len += 1 + word_len;
            self.words.next();
        }
        Some(line)
    }
}
