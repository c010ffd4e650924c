use crate::{
    core::RoundedRectBounds,
    scroll_anim::{AnimationParams, DYNAMIC_ISLAND_HEIGHT, DYNAMIC_ISLAND_WIDTH},
};

/// Corner radius requested for the static indicator; oversized on purpose,
/// the bounds constructor clamps it to the half-extents.
pub const INDICATOR_CORNER_RADIUS: f64 = 50.0;
/// Indicator top edge, independent of scroll.
pub const INDICATOR_TOP: f64 = 18.0;

/// Clip bounds for the avatar: a fully-rounded square (a circle) at the
/// animated position. `width <= 0` collapses to a zero-area rect rather than
/// producing negative radii.
pub fn avatar_bounds(width: f64, position_x: f64, position_y: f64) -> RoundedRectBounds {
    RoundedRectBounds::new(position_x, position_y, width, width, width / 2.0, width / 2.0)
}

impl AnimationParams {
    /// [`avatar_bounds`] from this frame's derived values.
    pub fn avatar_bounds(&self) -> RoundedRectBounds {
        avatar_bounds(self.width, self.position_x, self.position_y)
    }
}

/// Bounds of the static indicator pill, horizontally centered and pinned
/// near the top regardless of scroll.
pub fn indicator_bounds(screen_width: f64) -> RoundedRectBounds {
    RoundedRectBounds::new(
        (screen_width - DYNAMIC_ISLAND_WIDTH) / 2.0,
        INDICATOR_TOP,
        DYNAMIC_ISLAND_WIDTH,
        DYNAMIC_ISLAND_HEIGHT,
        INDICATOR_CORNER_RADIUS,
        INDICATOR_CORNER_RADIUS,
    )
}
