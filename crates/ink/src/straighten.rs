//! Straight line detection and correction
//!
//! A finished stroke is compared against the line through its first and last
//! samples. If every interior sample lies within the threshold of that line,
//! the whole stroke is projected onto it.

use crate::geom::Point;
use crate::stroke::Stroke;

/// Floor applied to the denominator of either slope
const MIN_DELTA: f64 = 0.01;

/// Line through the stroke endpoints, in the form used for projection
#[derive(Debug, Clone, Copy, PartialEq)]
enum Line {
    /// `y = slope * x + intercept`
    ByX { slope: f64, intercept: f64 },
    /// `x = slope * y + intercept`, for near-vertical strokes
    ByY { slope: f64, intercept: f64 },
}

impl Line {
    fn through(start: Point, end: Point) -> Self {
        let delta_x = end.x - start.x;
        let delta_y = end.y - start.y;

        // Signed comparison: a stroke heading toward negative y always
        // takes the y-from-x form, however steep it is.
        if delta_x > delta_y {
            let slope = delta_y / delta_x.max(MIN_DELTA);
            Line::ByX {
                slope,
                intercept: start.y - start.x * slope,
            }
        } else {
            let slope = delta_x / delta_y.max(MIN_DELTA);
            Line::ByY {
                slope,
                intercept: start.x - start.y * slope,
            }
        }
    }

    fn project(&self, p: Point) -> Point {
        match *self {
            Line::ByX { slope, intercept } => Point::new(p.x, slope * p.x + intercept),
            Line::ByY { slope, intercept } => Point::new(slope * p.y + intercept, p.y),
        }
    }
}

/// Outcome of testing a point sequence against its endpoint line
#[derive(Debug, Clone, PartialEq)]
pub enum Fit {
    /// Every interior sample was within the threshold; holds the projected points
    Straight(Vec<Point>),
    /// Sample at `index` strayed `distance` units from the line
    Rejected { index: usize, distance: f64 },
    /// Fewer than two samples
    TooShort,
}

/// Test `points` against the line through its endpoints.
///
/// The endpoint with the smaller x is the start; on a tie the last sample is.
/// Interior samples farther than `threshold` from their projection reject the
/// fit. On success every sample, endpoints included, is projected.
pub fn fit_line(points: &[Point], threshold: f64) -> Fit {
    if points.len() < 2 {
        return Fit::TooShort;
    }

    let last = points.len() - 1;
    let (start, end) = if points[0].x < points[last].x {
        (0, last)
    } else {
        (last, 0)
    };
    let line = Line::through(points[start], points[end]);

    let projected: Vec<Point> = points.iter().map(|&p| line.project(p)).collect();

    for index in 1..last {
        let distance = projected[index].distance(points[index]);
        if distance > threshold || distance.is_nan() {
            return Fit::Rejected { index, distance };
        }
    }

    Fit::Straight(projected)
}

/// Straightened copy of `stroke`, or an unmodified clone when it is not a line
pub fn straighten(stroke: &Stroke, threshold: f64) -> Stroke {
    match fit_line(stroke.points(), threshold) {
        Fit::Straight(points) => Stroke::from_points(stroke.width(), stroke.color(), points),
        Fit::Rejected { .. } | Fit::TooShort => stroke.clone(),
    }
}
