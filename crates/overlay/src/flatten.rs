//! CPU flattening of ink onto a captured background
//!
//! Strokes are rasterized as round-capped, round-joined polylines with
//! anti-aliased coverage taken from the distance to the nearest segment, then
//! blended source-over onto the image.

use image::{Rgba as Pixel, RgbaImage};
use ink::{Point, Rgba, Stroke};

/// Maps frame-local ink coordinates to image pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Frame-local position of the image's top-left corner
    pub origin: Point,
    /// Image pixels per frame unit
    pub scale: f64,
}

impl Placement {
    fn to_pixels(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.origin.x) * self.scale,
            (p.y - self.origin.y) * self.scale,
        )
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            scale: 1.0,
        }
    }
}

/// Blend a uniform color over the whole image
pub fn fill(image: &mut RgbaImage, color: Rgba) {
    if color.a <= 0.0 {
        return;
    }
    for pixel in image.pixels_mut() {
        blend(pixel, color, 1.0);
    }
}

/// Draw every stroke in order onto `image`
pub fn flatten(image: &mut RgbaImage, strokes: &[Stroke], placement: &Placement) {
    for stroke in strokes {
        draw_stroke(image, stroke, placement);
    }
}

fn draw_stroke(image: &mut RgbaImage, stroke: &Stroke, placement: &Placement) {
    if !stroke.is_drawable() || image.width() == 0 || image.height() == 0 {
        return;
    }

    let points: Vec<Point> = stroke
        .points()
        .iter()
        .map(|&p| placement.to_pixels(p))
        .collect();
    if !points.iter().all(Point::is_finite) {
        return;
    }
    let half_width = stroke.width() * placement.scale / 2.0;
    let reach = half_width + 1.0;

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in &points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let x0 = (min_x - reach).floor().max(0.0) as u32;
    let y0 = (min_y - reach).floor().max(0.0) as u32;
    let x1 = ((max_x + reach).ceil().max(0.0) as u32).min(image.width());
    let y1 = ((max_y + reach).ceil().max(0.0) as u32).min(image.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let distance = points
                .windows(2)
                .map(|seg| segment_distance(center, seg[0], seg[1]))
                .fold(f64::INFINITY, f64::min);
            let coverage = (half_width + 0.5 - distance).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend(image.get_pixel_mut(x, y), stroke.color(), coverage);
            }
        }
    }
}

/// Distance from `p` to the segment `a`-`b`
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

/// Source-over blend of `color` at `coverage` onto a straight-alpha pixel
fn blend(pixel: &mut Pixel<u8>, color: Rgba, coverage: f64) {
    let src_a = (color.a * coverage).clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }

    let [dr, dg, db, da] = pixel.0.map(|c| c as f64 / 255.0);
    let out_a = src_a + da * (1.0 - src_a);
    let mix = |s: f64, d: f64| (s * src_a + d * da * (1.0 - src_a)) / out_a;

    *pixel = Pixel(
        Rgba::new(mix(color.r, dr), mix(color.g, dg), mix(color.b, db), out_a).to_rgba8(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Pixel([255, 255, 255, 255]))
    }

    fn line(width: f64, color: Rgba, points: &[(f64, f64)]) -> Stroke {
        Stroke::from_points(width, color, points.iter().copied().map(Point::from).collect())
    }

    #[test]
    fn opaque_line_covers_its_pixels() {
        let mut img = white(20, 20);
        flatten(
            &mut img,
            &[line(4.0, Rgba::BLACK, &[(2.0, 10.0), (18.0, 10.0)])],
            &Placement::default(),
        );
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(10, 9).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(10, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn round_cap_extends_past_endpoint() {
        let mut img = white(20, 20);
        flatten(
            &mut img,
            &[line(4.0, Rgba::BLACK, &[(4.0, 10.0), (16.0, 10.0)])],
            &Placement::default(),
        );
        assert_eq!(img.get_pixel(3, 10).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 10).0, [255, 255, 255, 255]);
    }

    #[test]
    fn single_point_draws_nothing() {
        let mut img = white(10, 10);
        flatten(
            &mut img,
            &[Stroke::new(6.0, Rgba::BLACK, Point::new(5.0, 5.0))],
            &Placement::default(),
        );
        assert_eq!(img, white(10, 10));
    }

    #[test]
    fn translucent_ink_blends() {
        let mut img = white(10, 10);
        flatten(
            &mut img,
            &[line(4.0, Rgba::BLACK.with_alpha(0.5), &[(0.0, 5.0), (10.0, 5.0)])],
            &Placement::default(),
        );
        assert_eq!(img.get_pixel(5, 5).0, [128, 128, 128, 255]);
    }

    #[test]
    fn placement_shifts_and_scales() {
        let mut img = white(20, 20);
        let placement = Placement {
            origin: Point::new(5.0, 5.0),
            scale: 2.0,
        };
        flatten(
            &mut img,
            &[line(1.0, Rgba::BLACK, &[(5.0, 10.0), (15.0, 10.0)])],
            &placement,
        );
        // Frame y = 10 maps to pixel row 10; width doubles to 2 pixels
        assert_eq!(img.get_pixel(8, 10).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(8, 9).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(8, 14).0, [255, 255, 255, 255]);
    }

    #[test]
    fn fill_tints_background() {
        let mut img = RgbaImage::from_pixel(2, 2, Pixel([0, 0, 0, 255]));
        fill(&mut img, Rgba::WHITE.with_alpha(0.2));
        assert_eq!(img.get_pixel(0, 0).0, [51, 51, 51, 255]);
    }

    #[test]
    fn non_finite_samples_skip_the_stroke() {
        let mut img = white(8, 8);
        flatten(
            &mut img,
            &[line(3.0, Rgba::BLACK, &[(1.0, 4.0), (f64::NAN, 4.0), (7.0, 4.0)])],
            &Placement::default(),
        );
        assert_eq!(img, white(8, 8));
    }

    #[test]
    fn strokes_off_image_are_clipped() {
        let mut img = white(8, 8);
        flatten(
            &mut img,
            &[line(3.0, Rgba::BLACK, &[(-50.0, -50.0), (-40.0, -45.0)])],
            &Placement::default(),
        );
        assert_eq!(img, white(8, 8));
    }
}
