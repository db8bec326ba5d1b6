//! A stateless URL shortener.
//!
//! Every URL symbol maps to its two-digit index in a fixed alphabet, and
//! every four digits (two symbols) are packed into a single output char, so
//! short links are half as long as the original. No link is ever stored.
//!
//! Known limitation: a packed pair whose first symbol has index `00` (`A`)
//! decodes to the second symbol only, so the `A` is lost.

use crate::error::{KataError, Result};

const URL_ALLOWED_CHARS: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789-_.~!*'();:@&=+$,/?#[]",
);

/// Encodes URLs into short links and back.
#[derive(Clone, Debug)]
pub struct UrlShortener {
    alphabet: Vec<char>,
}

impl Default for UrlShortener {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlShortener {
    pub fn new() -> Self {
        UrlShortener {
            alphabet: URL_ALLOWED_CHARS.chars().collect(),
        }
    }

    /// Encodes `url` into a short link.
    ///
    /// # Errors
    /// `KataError::InvalidInput` if `url` holds a symbol outside of the
    /// URL alphabet (letters, digits and `-_.~!*'();:@&=+$,/?#[]`).
    ///
    /// # Examples
    /// ```
    /// use kata_solver::url_shortener::UrlShortener;
    ///
    /// let shortener = UrlShortener::new();
    /// let link = shortener.encode("https://en.wikipedia.org/wiki/URL_shortening").unwrap();
    /// assert_eq!(link.chars().count(), 22);
    /// assert_eq!(shortener.decode(&link), "https://en.wikipedia.org/wiki/URL_shortening");
    /// ```
    pub fn encode(&self, url: &str) -> Result<String> {
        let indices = url
            .chars()
            .map(|ch| {
                self.alphabet.iter().position(|&a| a == ch).ok_or_else(|| {
                    KataError::InvalidInput(format!("{:?} is not a URL symbol", ch))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        let mut out = String::with_capacity(indices.len() / 2 + 1);
        for pair in indices.chunks(2) {
            let code = match pair {
                [hi, lo] => hi * 100 + lo,
                [single] => *single,
                _ => unreachable!("chunks(2) yields one or two items"),
            };
            // At most 8383, well below the surrogate range.
            let packed = char::from_u32(code as u32).ok_or_else(|| {
                KataError::InvalidInput(format!("cannot pack code {}", code))
            })?;
            out.push(packed);
        }
        Ok(out)
    }

    /// Decodes a short link produced by `encode`.
    ///
    /// Codes that do not map back into the alphabet are skipped.
    pub fn decode(&self, code: &str) -> String {
        let mut indices = Vec::with_capacity(code.len() * 2);
        for packed in code.chars() {
            let value = packed as usize;
            if value > self.alphabet.len() {
                indices.push(value / 100);
            }
            indices.push(value % 100);
        }
        indices
            .into_iter()
            .filter_map(|idx| self.alphabet.get(idx))
            .collect()
    }
}
