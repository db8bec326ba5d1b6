/// A domino tile; `(a, b)` may be played either way round.
pub type Domino = (u8, u8);

/// Returns true if the dominoes can be laid out in one row, matching halves
/// touching.
///
/// This is a greedy check: the row is started with the first tile and, while
/// tiles remain, the first one that fits either open end is played. It never
/// reconsiders a choice, so some sets that do have an arrangement are
/// reported as `false`. An empty set is trivially a row.
pub fn can_dominoes_make_row(dominoes: &[Domino]) -> bool {
    let Some((&first, rest)) = dominoes.split_first() else {
        return true;
    };
    let mut ends = first;
    let mut remaining = rest.to_vec();

    while !remaining.is_empty() {
        let (left, right) = ends;
        let Some(idx) = remaining
            .iter()
            .position(|&(a, b)| a == left || a == right || b == left || b == right)
        else {
            return false;
        };
        let (a, b) = remaining.remove(idx);
        if a == left {
            ends.0 = b;
        } else if b == left {
            ends.0 = a;
        } else if a == right {
            ends.1 = b;
        } else {
            ends.1 = a;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_make_row() {
        assert!(can_dominoes_make_row(&[(0, 1), (1, 1)]));
        assert!(can_dominoes_make_row(&[(1, 3), (2, 3), (1, 4), (2, 4), (1, 5), (2, 5)]));
        assert!(can_dominoes_make_row(&[(1, 1), (2, 2), (1, 2)]));
    }

    #[test]
    fn test_cannot_make_row() {
        assert!(!can_dominoes_make_row(&[(1, 1), (2, 2), (1, 5), (5, 6), (6, 3)]));
        assert!(!can_dominoes_make_row(&[
            (0, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (0, 3),
            (1, 3),
            (2, 3),
            (3, 3),
        ]));
        assert!(!can_dominoes_make_row(&[(1, 1), (0, 3), (1, 4)]));
    }

    #[test]
    fn test_trivial_sets() {
        assert!(can_dominoes_make_row(&[]));
        assert!(can_dominoes_make_row(&[(4, 2)]));
    }

    #[test]
    fn test_greedy_choice_is_not_reconsidered() {
        // 1-2, 2-2, 2-3 is a valid row, but 2-3 is played before the double
        // and closes the only end the double could go on.
        assert!(!can_dominoes_make_row(&[(1, 2), (2, 3), (2, 2)]));
        assert!(can_dominoes_make_row(&[(1, 2), (2, 2), (2, 3)]));
    }
}
