#![forbid(unsafe_code)]

pub mod bounds;
pub mod color;
pub mod compositor;
pub mod core;
pub mod error;
pub mod interp;
pub mod scroll_anim;
pub mod shader;
pub mod shader_dots;
pub mod shader_glow;

pub use crate::bounds::{INDICATOR_CORNER_RADIUS, INDICATOR_TOP, avatar_bounds, indicator_bounds};
pub use crate::color::{FALLBACK_RGB, color_stop, hex_to_rgb};
pub use crate::compositor::{
    GOOEY_COLOR_MATRIX, ImageFit, ImageHandle, LayerNode, RenderGraph, ShaderLayer,
    build_header_graph,
};
pub use crate::core::{Rgb, Rgba, RoundedRectBounds};
pub use crate::error::{GlintError, GlintResult};
pub use crate::interp::{Extrapolate, Extrapolation, Lerp, interpolate, interpolate_with};
pub use crate::scroll_anim::{
    AVATAR_SIZE, AnimationParams, BLUR_HEIGHT, CANVAS_HEIGHT, CanvasPlacement,
    DYNAMIC_ISLAND_HEIGHT, DYNAMIC_ISLAND_WIDTH, MAX_SCROLL_Y,
};
pub use crate::shader::{
    UniformBinding, UniformDecl, UniformType, UniformValue, check_bindings, perimeter_progress,
    wrapped_band_distance,
};
pub use crate::shader_dots::{DOT_GRID_UNIFORMS, DotGridParams, dot_grid_source};
pub use crate::shader_glow::{BORDER_GLOW_SHADER, BORDER_GLOW_UNIFORMS, BorderGlowUniforms};
