//! Stroke data model

use crate::geom::{Point, Rgba};

/// One continuous ink mark, from pointer-down to pointer-up
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    width: f64,
    color: Rgba,
    points: Vec<Point>,
}

impl Stroke {
    /// Start a stroke at its first sample. Width and color are fixed for its lifetime.
    pub fn new(width: f64, color: Rgba, first: Point) -> Self {
        Self {
            width,
            color,
            points: vec![first],
        }
    }

    /// Build a stroke from a full point sequence
    pub fn from_points(width: f64, color: Rgba, points: Vec<Point>) -> Self {
        Self { width, color, points }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Samples in capture order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the stroke contributes a visible polyline
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Append a sample
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Replace the point sequence, keeping width and color
    pub(crate) fn replace_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stroke_holds_single_point() {
        let stroke = Stroke::new(5.0, Rgba::BLACK, Point::new(1.0, 2.0));
        assert_eq!(stroke.points(), &[Point::new(1.0, 2.0)]);
        assert!(!stroke.is_drawable());
    }

    #[test]
    fn push_keeps_order() {
        let mut stroke = Stroke::new(2.0, Rgba::WHITE, Point::new(0.0, 0.0));
        stroke.push(Point::new(1.0, 0.0));
        stroke.push(Point::new(2.0, 0.0));
        let xs: Vec<f64> = stroke.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert!(stroke.is_drawable());
    }
}
