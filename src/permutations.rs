/// Lazy iterator over the permutations of a string, see `get_permutations`.
#[derive(Clone, Debug)]
pub struct Permutations {
    items: Vec<char>,
    // rotations[i] counts how often items[i..] has been rotated since it was last reset.
    rotations: Vec<usize>,
    done: bool,
}

/// Returns every ordering of the characters of `chars`.
///
/// Characters are assumed to be distinct; repeated characters produce
/// repeated permutations. The sequence is generated by rotating suffixes, like
/// an odometer: the last suffix turns fastest, and once a suffix has turned
/// all the way round the next longer one turns by one. The empty string has
/// exactly one permutation, itself.
///
/// # Examples
/// ```
/// use kata_solver::permutations::get_permutations;
///
/// let all: Vec<String> = get_permutations("abc").collect();
/// assert_eq!(all, ["abc", "acb", "bca", "bac", "cab", "cba"]);
/// ```
pub fn get_permutations(chars: &str) -> Permutations {
    let items: Vec<char> = chars.chars().collect();
    Permutations {
        rotations: vec![0; items.len()],
        items,
        done: false,
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let current: String = self.items.iter().collect();

        // Advance the odometer; running off the front means every ordering was produced.
        self.done = true;
        for i in (0..self.items.len().saturating_sub(1)).rev() {
            self.items[i..].rotate_left(1);
            self.rotations[i] += 1;
            if self.rotations[i] < self.items.len() - i {
                self.done = false;
                break;
            }
            self.rotations[i] = 0;
        }
        Some(current)
    }
}
