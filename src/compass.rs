//! The 32 points of the compass.

const CARDINALS: [char; 4] = ['N', 'E', 'S', 'W'];
const STEP: f64 = 11.25;

/// A named compass heading.
#[derive(Clone, Debug, PartialEq)]
pub struct CompassPoint {
    pub abbreviation: String,
    /// Degrees clockwise from north.
    pub azimuth: f64,
}

/// Returns the 32 compass points in clockwise order, starting at `N` (0°)
/// and ending at `NbW` (348.75°).
///
/// Names are derived from the four cardinal directions only: each quarter
/// between a cardinal and the next one clockwise holds eight points.
///
/// # Examples
/// ```
/// use kata_solver::compass::create_compass_points;
///
/// let points = create_compass_points();
/// assert_eq!(points[1].abbreviation, "NbE");
/// assert_eq!(points[1].azimuth, 11.25);
/// ```
pub fn create_compass_points() -> Vec<CompassPoint> {
    let mut points = Vec::with_capacity(32);
    for (i, &cur) in CARDINALS.iter().enumerate() {
        let next = CARDINALS[(i + 1) % 4];
        // The two-letter intercardinal always starts with N or S.
        let quarter: String = if i % 2 == 0 {
            [cur, next].iter().collect()
        } else {
            [next, cur].iter().collect()
        };
        for j in 0..8 {
            let abbreviation = match j {
                0 => cur.to_string(),
                1 => format!("{}b{}", cur, next),
                2 => format!("{}{}", cur, quarter),
                3 => format!("{}b{}", quarter, cur),
                4 => quarter.clone(),
                5 => format!("{}b{}", quarter, next),
                6 => format!("{}{}", next, quarter),
                _ => format!("{}b{}", next, cur),
            };
            points.push(CompassPoint {
                abbreviation,
                azimuth: (i * 8 + j) as f64 * STEP,
            });
        }
    }
    points
}
