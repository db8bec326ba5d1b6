/// Returns the `n` x `n` matrix numbering cells in JPEG zigzag order.
///
/// The walk starts at the top-left corner, moves right, then alternates down
/// the anti-diagonals: odd diagonals are walked from top-right to bottom-left,
/// even ones from bottom-left to top-right.
///
/// # Examples
/// ```
/// use kata_solver::zigzag::get_zigzag_matrix;
///
/// assert_eq!(get_zigzag_matrix(3), vec![vec![0, 1, 5], vec![2, 4, 6], vec![3, 7, 8]]);
/// ```
pub fn get_zigzag_matrix(n: usize) -> Vec<Vec<usize>> {
    let mut matrix = vec![vec![0; n]; n];
    let mut num = 0;
    for diagonal in 0..(2 * n).saturating_sub(1) {
        let low = diagonal.saturating_sub(n - 1);
        let high = diagonal.min(n - 1);
        let rows: Box<dyn Iterator<Item = usize>> = if diagonal % 2 == 1 {
            Box::new(low..=high)
        } else {
            Box::new((low..=high).rev())
        };
        for r in rows {
            matrix[r][diagonal - r] = num;
            num += 1;
        }
    }
    matrix
}
