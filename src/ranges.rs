/// Formats an ordered list of integers as a comma separated list where every
/// run of three or more consecutive values is written as `first-last`.
///
/// The input is expected to be sorted ascending; unsorted input is not
/// rejected, runs are simply detected between neighbours.
///
/// # Examples
/// ```
/// use kata_solver::ranges::extract_ranges;
///
/// assert_eq!(extract_ranges(&[0, 1, 2, 5, 7, 8, 9]), "0-2,5,7-9");
/// assert_eq!(extract_ranges(&[1, 2, 4, 5]), "1,2,4,5");
/// ```
pub fn extract_ranges(nums: &[i64]) -> String {
    let mut runs: Vec<(i64, i64)> = Vec::new();
    for &n in nums {
        match runs.last_mut() {
            Some((_, last)) if last.checked_add(1) == Some(n) => *last = n,
            _ => runs.push((n, n)),
        }
    }

    let mut parts = Vec::with_capacity(runs.len());
    for (first, last) in runs {
        match last - first {
            0 => parts.push(first.to_string()),
            1 => {
                parts.push(first.to_string());
                parts.push(last.to_string());
            }
            _ => parts.push(format!("{}-{}", first, last)),
        }
    }
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extract_ranges() {
        assert_eq!(extract_ranges(&[0, 1, 2, 3, 4, 5]), "0-5");
        assert_eq!(extract_ranges(&[1, 4, 5]), "1,4,5");
        assert_eq!(extract_ranges(&[0, 1, 2, 5, 7, 8, 9]), "0-2,5,7-9");
        assert_eq!(extract_ranges(&[1, 2, 4, 5]), "1,2,4,5");
    }

    #[test]
    fn test_negative_and_empty() {
        assert_eq!(extract_ranges(&[]), "");
        assert_eq!(extract_ranges(&[-3, -2, -1, 0, 4]), "-3-0,4");
        assert_eq!(extract_ranges(&[i64::MAX - 1, i64::MAX]), format!("{},{}", i64::MAX - 1, i64::MAX));
    }

    proptest! {
        #[test]
        fn test_ranges_expand_back_to_input(set in prop::collection::btree_set(-50i64..50, 0..30)) {
            let nums: Vec<i64> = set.into_iter().collect();
            let formatted = extract_ranges(&nums);
            let mut expanded = Vec::new();
            for part in formatted.split(',').filter(|p| !p.is_empty()) {
                // A range separator is a '-' that is not the leading sign.
                match part[1..].find('-') {
                    Some(dash) => {
                        let first: i64 = part[..dash + 1].parse().unwrap();
                        let last: i64 = part[dash + 2..].parse().unwrap();
                        prop_assert!(last - first >= 2);
                        expanded.extend(first..=last);
                    }
                    None => expanded.push(part.parse().unwrap()),
                }
            }
            prop_assert_eq!(expanded, nums);
        }
    }

    #[test]
    fn test_duplicates_break_runs() {
        assert_eq!(extract_ranges(&[1, 1, 2, 3]), "1,1-3");
    }
}
