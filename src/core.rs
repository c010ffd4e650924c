pub use kurbo::{Point, Rect, RoundedRect, Vec2};

/// Normalized RGB triple, all channels in [0,1].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub fn as_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Straight (non-premultiplied) RGBA, all channels in [0,1].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Axis-aligned rounded rectangle in layout pixels.
///
/// Radii are stored post-clamp: `new` limits them to the half-extents the way
/// a render surface would, so serialized values are the effective ones.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundedRectBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub ry: f64,
}

impl RoundedRectBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64, rx: f64, ry: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            x,
            y,
            width,
            height,
            rx: rx.clamp(0.0, width / 2.0),
            ry: ry.clamp(0.0, height / 2.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn rounded_rect(&self) -> RoundedRect {
        // kurbo radii are uniform per-corner; x/y radii match for every
        // bounds this crate produces, so the x radius is authoritative.
        RoundedRect::from_rect(self.rect(), self.rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_clamp_negative_size_to_zero() {
        let b = RoundedRectBounds::new(10.0, 20.0, -5.0, -5.0, 4.0, 4.0);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
        assert_eq!(b.rx, 0.0);
        assert!(b.is_empty());
    }

    #[test]
    fn bounds_clamp_radius_to_half_extent() {
        let b = RoundedRectBounds::new(0.0, 0.0, 28.0, 28.0, 50.0, 50.0);
        assert_eq!(b.rx, 14.0);
        assert_eq!(b.ry, 14.0);
    }

    #[test]
    fn bounds_center_and_rect_agree() {
        let b = RoundedRectBounds::new(10.0, 20.0, 100.0, 100.0, 50.0, 50.0);
        assert_eq!(b.center(), Point::new(60.0, 70.0));
        assert_eq!(b.rect(), Rect::new(10.0, 20.0, 110.0, 120.0));
    }

    #[test]
    fn rgb_with_alpha_round_trip() {
        let c = Rgb::new(0.4, 0.9, 0.98).with_alpha(0.5);
        assert_eq!(c, Rgba::new(0.4, 0.9, 0.98, 0.5));
    }
}
