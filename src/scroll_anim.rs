use crate::{
    core::Rgba,
    interp::{Extrapolation, interpolate, interpolate_with},
};

/// Avatar edge length at rest, layout px.
pub const AVATAR_SIZE: f64 = 150.0;
/// Height of the blur fade strip under the header.
pub const BLUR_HEIGHT: f64 = 50.0;
/// Scroll distance over which the whole collapse plays out.
pub const MAX_SCROLL_Y: f64 = 120.0;
/// Header canvas height at rest.
pub const CANVAS_HEIGHT: f64 = 300.0;
pub const DYNAMIC_ISLAND_WIDTH: f64 = 28.0;
pub const DYNAMIC_ISLAND_HEIGHT: f64 = 28.0;

/// Every scroll-derived output parameter for one frame.
///
/// The set is atomic: [`AnimationParams::derive`] recomputes all fields as one
/// pure function of `(scroll_y, screen_width)`, so readers never observe a
/// partially updated mix of old and new values. Intermediate scroll events
/// may simply be skipped; only the latest sampled offset matters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationParams {
    /// Avatar edge length (the avatar stays square).
    pub width: f64,
    /// Left edge keeping the avatar horizontally centered.
    pub position_x: f64,
    /// Top edge, descending toward the indicator as the user scrolls.
    pub position_y: f64,
    pub blur_radius: f64,
    /// Scrim drawn over the avatar, transparent at rest.
    pub overlay_tint: Rgba,
    /// Title bar fade-in, 0 at rest, 1 once collapsed.
    pub header_opacity: f64,
}

impl AnimationParams {
    #[tracing::instrument(level = "trace")]
    pub fn derive(scroll_y: f64, screen_width: f64) -> Self {
        let width = interpolate(
            scroll_y,
            &[0.0, MAX_SCROLL_Y * 0.25],
            &[AVATAR_SIZE, DYNAMIC_ISLAND_WIDTH],
            Extrapolation::CLAMP_RIGHT,
        );

        // Dependent on the width derived just above, not on scroll directly.
        let position_x = (screen_width - width) / 2.0;

        let position_y = interpolate(
            scroll_y,
            &[0.0, MAX_SCROLL_Y * 0.3, MAX_SCROLL_Y],
            &[MAX_SCROLL_Y, 18.0, 8.0],
            Extrapolation::CLAMP_RIGHT,
        );

        // Historical table: four outputs against three breakpoints. Lookup is
        // input-driven, so the radius saturates at 12 and 22 stays unused.
        let blur_radius = interpolate(
            scroll_y,
            &[0.0, MAX_SCROLL_Y * 0.1, MAX_SCROLL_Y * 0.4],
            &[0.0, 4.0, 12.0, 22.0],
            Extrapolation::CLAMP_RIGHT,
        );

        let overlay_tint = interpolate_with(
            scroll_y,
            &[0.0, MAX_SCROLL_Y * 0.3],
            &[Rgba::TRANSPARENT, Rgba::BLACK],
            Extrapolation::CLAMP,
        );

        let header_opacity = interpolate(
            scroll_y,
            &[20.0, MAX_SCROLL_Y - 10.0],
            &[0.0, 1.0],
            Extrapolation::CLAMP,
        );

        Self {
            width,
            position_x,
            position_y,
            blur_radius,
            overlay_tint,
            header_opacity,
        }
    }
}

/// Placement of the header canvas itself: it collapses to zero height while
/// translating with the scroll, so the content underneath takes its place.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasPlacement {
    pub height: f64,
    pub translate_y: f64,
}

impl CanvasPlacement {
    pub fn derive(scroll_y: f64) -> Self {
        Self {
            height: interpolate(
                scroll_y,
                &[0.0, MAX_SCROLL_Y],
                &[CANVAS_HEIGHT, 0.0],
                Extrapolation::EXTEND,
            ),
            translate_y: interpolate(
                scroll_y,
                &[0.0, MAX_SCROLL_Y],
                &[0.0, MAX_SCROLL_Y],
                Extrapolation::EXTEND,
            ),
        }
    }
}
