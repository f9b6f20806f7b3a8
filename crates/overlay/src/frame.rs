//! Capture frame geometry and appearance

use ink::Rgba;

/// Lowest background opacity; keeps the frame visible while it takes input
pub const MIN_BACKGROUND_OPACITY: f64 = 0.001;

/// Rectangle in screen pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge, saturating at `i32::MAX`
    pub fn right(&self) -> i32 {
        self.x.saturating_add(to_i32(self.width))
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(to_i32(self.height))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink by `amount` on every side; `None` if nothing is left
    pub fn inset(&self, amount: u32) -> Option<Rect> {
        let width = self.width.checked_sub(amount.checked_mul(2)?)?;
        let height = self.height.checked_sub(amount.checked_mul(2)?)?;
        let rect = Rect::new(
            self.x.saturating_add(to_i32(amount)),
            self.y.saturating_add(to_i32(amount)),
            width,
            height,
        );
        (!rect.is_empty()).then_some(rect)
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Appearance and behavior of the capture frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameConfig {
    /// Opacity of the white backdrop behind the ink
    pub background_opacity: f64,
    pub border_thickness: f64,
    pub border_color: Rgba,
    /// Border color while a capture is shown
    pub captured_border_color: Rgba,
    /// When set the frame follows drags and ink input is disabled
    pub draggable: bool,
}

impl FrameConfig {
    /// Set backdrop opacity, clamped to `[MIN_BACKGROUND_OPACITY, 1]`
    pub fn set_background_opacity(&mut self, opacity: f64) {
        if opacity.is_nan() {
            return;
        }
        self.background_opacity = opacity.clamp(MIN_BACKGROUND_OPACITY, 1.0);
    }

    /// Set border thickness; negative values collapse to zero
    pub fn set_border_thickness(&mut self, thickness: f64) {
        if thickness.is_nan() {
            return;
        }
        self.border_thickness = thickness.max(0.0);
    }

    /// Whole pixels the border covers on each side of the frame
    pub fn border_inset(&self) -> u32 {
        self.border_thickness.ceil() as u32
    }

    /// White backdrop at the configured opacity
    pub fn background(&self) -> Rgba {
        Rgba::WHITE.with_alpha(self.background_opacity)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            background_opacity: 0.2,
            border_thickness: 5.0,
            border_color: Rgba::BLACK,
            captured_border_color: Rgba::GREEN,
            draggable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_all_sides() {
        let rect = Rect::new(100, 50, 200, 120);
        assert_eq!(rect.inset(5), Some(Rect::new(105, 55, 190, 110)));
    }

    #[test]
    fn inset_past_center_is_none() {
        let rect = Rect::new(0, 0, 10, 40);
        assert_eq!(rect.inset(5), None);
        assert_eq!(rect.inset(6), None);
    }

    #[test]
    fn edges_saturate_instead_of_wrapping() {
        let wide = Rect::new(10, -5, u32::MAX, 20);
        assert_eq!(wide.right(), i32::MAX);
        assert_eq!(wide.bottom(), 15);

        let near_edge = Rect::new(i32::MAX - 3, i32::MAX - 1, 100, 100);
        assert_eq!(near_edge.right(), i32::MAX);
        assert_eq!(near_edge.bottom(), i32::MAX);
        assert_eq!(
            near_edge.inset(10),
            Some(Rect::new(i32::MAX, i32::MAX, 80, 80))
        );
    }

    #[test]
    fn opacity_is_floored() {
        let mut config = FrameConfig::default();
        config.set_background_opacity(0.0);
        assert_eq!(config.background_opacity, MIN_BACKGROUND_OPACITY);
        config.set_background_opacity(3.0);
        assert_eq!(config.background_opacity, 1.0);
        config.set_background_opacity(f64::NAN);
        assert_eq!(config.background_opacity, 1.0);
    }

    #[test]
    fn border_inset_rounds_up() {
        let mut config = FrameConfig::default();
        config.set_border_thickness(2.1);
        assert_eq!(config.border_inset(), 3);
        config.set_border_thickness(-4.0);
        assert_eq!(config.border_inset(), 0);
    }
}
