/// Returns the best profit obtainable from daily stock quotes.
///
/// Each day one unit may be bought, any number of held units sold, or
/// nothing done. The best strategy buys on every day before the highest
/// quote, sells everything on that day, and repeats on the days after it.
///
/// Profit saturates at `i64::MAX` for quotes near the ends of the `i64` range.
///
/// # Examples
/// ```
/// use kata_solver::stocks::get_most_profit_from_stock_quotes;
///
/// assert_eq!(get_most_profit_from_stock_quotes(&[1, 6, 5, 10, 8, 7]), 18);
/// assert_eq!(get_most_profit_from_stock_quotes(&[6, 5, 4, 3, 2, 1]), 0);
/// ```
pub fn get_most_profit_from_stock_quotes(quotes: &[i64]) -> i64 {
    let mut profit: i64 = 0;
    let mut rest = quotes;
    while let Some(&max) = rest.iter().max() {
        // First occurrence, so equal later peaks start the next round.
        let peak = rest.iter().position(|&q| q == max).unwrap_or(0);
        profit = rest[..peak]
            .iter()
            .fold(profit, |acc, &q| acc.saturating_add(max.saturating_sub(q)));
        rest = &rest[peak + 1..];
    }
    profit
}
