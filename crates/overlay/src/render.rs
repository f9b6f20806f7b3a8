//! Render plan handed to the platform painter
//!
//! The overlay never touches a graphics context. Each repaint asks for a
//! [`RenderPlan`] and draws it in order: backdrop, ink, border.

use crate::frame::FrameConfig;
use ink::{Rgba, Stroke};
use kurbo::{BezPath, Cap, Join, Stroke as StrokeStyle};

/// One stroke as a polyline path
#[derive(Debug, Clone)]
pub struct StrokePath {
    pub path: BezPath,
    pub style: StrokeStyle,
    pub color: Rgba,
}

impl StrokePath {
    /// Polyline for `stroke`, or `None` when it has fewer than two points
    pub fn from_stroke(stroke: &Stroke) -> Option<Self> {
        let (first, rest) = stroke.points().split_first()?;
        if rest.is_empty() {
            return None;
        }

        let mut path = BezPath::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }

        Some(Self {
            path,
            style: StrokeStyle::new(stroke.width())
                .with_caps(Cap::Round)
                .with_join(Join::Round),
            color: stroke.color(),
        })
    }
}

/// Frame outline, stroked along `rect`
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    /// Bounds inset by half the thickness so the line stays inside the frame
    pub rect: kurbo::Rect,
    pub thickness: f64,
    pub color: Rgba,
}

/// What fills the frame's interior
#[derive(Debug, Clone)]
pub enum Content {
    /// Translucent backdrop with ink on top
    Live {
        background: Rgba,
        strokes: Vec<StrokePath>,
    },
    /// The flattened capture image, drawn inside the border
    Captured { image_rect: kurbo::Rect },
}

/// Everything needed for one repaint
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub content: Content,
    pub border: Border,
}

impl RenderPlan {
    /// Plan for a frame of `width` x `height` units
    pub fn build(
        width: f64,
        height: f64,
        config: &FrameConfig,
        strokes: &[Stroke],
        captured: bool,
    ) -> Self {
        let inset = |amount: f64| kurbo::Rect::new(amount, amount, width - amount, height - amount);
        let half = config.border_thickness / 2.0;

        let border = Border {
            rect: inset(half),
            thickness: config.border_thickness,
            color: if captured {
                config.captured_border_color
            } else {
                config.border_color
            },
        };

        let content = if captured {
            Content::Captured {
                image_rect: inset(config.border_thickness),
            }
        } else {
            Content::Live {
                background: config.background(),
                strokes: strokes.iter().filter_map(StrokePath::from_stroke).collect(),
            }
        };

        Self { content, border }
    }

    /// Stroke paths to draw, empty while a capture is shown
    pub fn strokes(&self) -> &[StrokePath] {
        match &self.content {
            Content::Live { strokes, .. } => strokes,
            Content::Captured { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ink::Point;
    use kurbo::{PathEl, Point as KPoint};

    fn stroke(points: &[(f64, f64)]) -> Stroke {
        Stroke::from_points(
            4.0,
            Rgba::BLACK,
            points.iter().copied().map(Point::from).collect(),
        )
    }

    #[test]
    fn polyline_is_move_then_lines() {
        let path = StrokePath::from_stroke(&stroke(&[(0.0, 0.0), (1.0, 2.0), (3.0, 4.0)])).unwrap();
        assert_eq!(
            path.path.elements(),
            &[
                PathEl::MoveTo(KPoint::new(0.0, 0.0)),
                PathEl::LineTo(KPoint::new(1.0, 2.0)),
                PathEl::LineTo(KPoint::new(3.0, 4.0)),
            ]
        );
        assert_eq!(path.style.start_cap, Cap::Round);
        assert_eq!(path.style.end_cap, Cap::Round);
        assert_relative_eq!(path.style.width, 4.0);
    }

    #[test]
    fn single_point_stroke_is_skipped() {
        let plan = RenderPlan::build(
            100.0,
            80.0,
            &FrameConfig::default(),
            &[stroke(&[(5.0, 5.0)]), stroke(&[(0.0, 0.0), (9.0, 9.0)])],
            false,
        );
        assert_eq!(plan.strokes().len(), 1);
    }

    #[test]
    fn border_sits_inside_bounds() {
        let config = FrameConfig::default();
        let plan = RenderPlan::build(100.0, 80.0, &config, &[], false);
        assert_eq!(plan.border.rect, kurbo::Rect::new(2.5, 2.5, 97.5, 77.5));
        assert_eq!(plan.border.color, config.border_color);
        match plan.content {
            Content::Live { background, .. } => assert_relative_eq!(background.a, 0.2),
            Content::Captured { .. } => panic!("not captured"),
        }
    }

    #[test]
    fn captured_plan_switches_border_and_hides_ink() {
        let config = FrameConfig::default();
        let plan = RenderPlan::build(
            100.0,
            80.0,
            &config,
            &[stroke(&[(0.0, 0.0), (9.0, 9.0)])],
            true,
        );
        assert_eq!(plan.border.color, config.captured_border_color);
        assert!(plan.strokes().is_empty());
        assert!(matches!(
            plan.content,
            Content::Captured { image_rect } if image_rect == kurbo::Rect::new(5.0, 5.0, 95.0, 75.0)
        ));
    }
}
