//! Decomposition of ASCII figures into their basic rectangles.
//!
//! A figure is drawn with `+` corners, `-` horizontal edges and `|` vertical
//! edges. Every top-left corner opens at most one basic rectangle: the one
//! closed by the nearest corner to its right and the nearest corner below it.

const HORIZONTAL: [char; 2] = ['-', '+'];
const VERTICAL: [char; 2] = ['|', '+'];

/// Lazy iterator over the rectangles of a figure, see `get_figure_rectangles`.
#[derive(Clone, Debug)]
pub struct FigureRectangles {
    lines: Vec<Vec<char>>,
    row: usize,
    col: usize,
}

/// Returns the basic rectangles the figure is made of, scanning corners row
/// by row. Each rectangle is drawn on its own, one `\n`-terminated line per row.
///
/// # Examples
/// ```
/// use kata_solver::rectangles::get_figure_rectangles;
///
/// let figure = "+--+--+\n|  |  |\n+--+--+\n";
/// let parts: Vec<String> = get_figure_rectangles(figure).collect();
/// assert_eq!(parts, ["+--+\n|  |\n+--+\n", "+--+\n|  |\n+--+\n"]);
/// ```
pub fn get_figure_rectangles(figure: &str) -> FigureRectangles {
    FigureRectangles {
        lines: figure.lines().map(|line| line.chars().collect()).collect(),
        row: 0,
        col: 0,
    }
}

impl FigureRectangles {
    fn at(&self, r: usize, c: usize) -> char {
        self.lines
            .get(r)
            .and_then(|line| line.get(c))
            .copied()
            .unwrap_or(' ')
    }

    /// Width and height of the rectangle whose top-left corner is `(r, c)`.
    fn rectangle_at(&self, r: usize, c: usize) -> Option<(usize, usize)> {
        if self.at(r, c) != '+'
            || !HORIZONTAL.contains(&self.at(r, c + 1))
            || !VERTICAL.contains(&self.at(r + 1, c))
        {
            return None;
        }

        let mut right = c + 1;
        while !(self.at(r, right) == '+' && VERTICAL.contains(&self.at(r + 1, right))) {
            if !HORIZONTAL.contains(&self.at(r, right)) {
                return None;
            }
            right += 1;
        }

        let mut bottom = r + 1;
        while !(self.at(bottom, c) == '+' && HORIZONTAL.contains(&self.at(bottom, c + 1))) {
            if !VERTICAL.contains(&self.at(bottom, c)) {
                return None;
            }
            bottom += 1;
        }

        let closed = self.at(bottom, right) == '+'
            && (c + 1..right).all(|x| HORIZONTAL.contains(&self.at(bottom, x)))
            && (r + 1..bottom).all(|y| VERTICAL.contains(&self.at(y, right)));
        closed.then(|| (right - c + 1, bottom - r + 1))
    }
}

impl Iterator for FigureRectangles {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.row < self.lines.len() {
            while self.col < self.lines[self.row].len() {
                let (r, c) = (self.row, self.col);
                self.col += 1;
                if let Some((width, height)) = self.rectangle_at(r, c) {
                    return Some(draw_rectangle(width, height));
                }
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }
}

fn draw_rectangle(width: usize, height: usize) -> String {
    let inner = width.saturating_sub(2);
    let edge = format!("+{}+\n", "-".repeat(inner));
    let side = format!("|{}|\n", " ".repeat(inner));
    let mut out = edge.clone();
    for _ in 2..height {
        out.push_str(&side);
    }
    out.push_str(&edge);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(figure: &str) -> Vec<String> {
        let mut parts: Vec<String> = get_figure_rectangles(figure).collect();
        parts.sort();
        parts
    }

    #[test]
    fn test_split_box() {
        let figure = concat!(
            "+------------+\n",
            "|            |\n",
            "|            |\n",
            "|            |\n",
            "+------+-----+\n",
            "|      |     |\n",
            "|      |     |\n",
            "+------+-----+\n",
        );
        let mut expected = vec![
            concat!(
                "+------------+\n",
                "|            |\n",
                "|            |\n",
                "|            |\n",
                "+------------+\n",
            )
            .to_string(),
            "+------+\n|      |\n|      |\n+------+\n".to_string(),
            "+-----+\n|     |\n|     |\n+-----+\n".to_string(),
        ];
        expected.sort();
        assert_eq!(sorted(figure), expected);
    }

    #[test]
    fn test_box_on_top_of_box() {
        let figure = concat!(
            "   +-----+     \n",
            "   |     |     \n",
            "+--+-----+----+\n",
            "|             |\n",
            "|             |\n",
            "+-------------+\n",
        );
        let parts: Vec<String> = get_figure_rectangles(figure).collect();
        assert_eq!(
            parts,
            [
                "+-----+\n|     |\n+-----+\n",
                concat!(
                    "+-------------+\n",
                    "|             |\n",
                    "|             |\n",
                    "+-------------+\n",
                ),
            ]
        );
    }

    #[test]
    fn test_grid_of_four() {
        let figure = "+-+-+\n| | |\n+-+-+\n| | |\n+-+-+\n";
        let parts: Vec<String> = get_figure_rectangles(figure).collect();
        assert_eq!(parts, vec!["+-+\n| |\n+-+\n".to_string(); 4]);
    }

    #[test]
    fn test_open_shapes_yield_nothing() {
        assert_eq!(sorted(""), Vec::<String>::new());
        assert_eq!(sorted("+--+\n|  |\n"), Vec::<String>::new());
        assert_eq!(sorted("+--+\n|   \n+--+\n"), Vec::<String>::new());
    }

    #[test]
    fn test_thin_rectangle() {
        assert_eq!(sorted("++\n++\n"), ["++\n++\n"]);
    }
}
