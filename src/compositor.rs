use crate::{
    bounds::indicator_bounds,
    core::{Rgba, RoundedRectBounds},
    error::GlintResult,
    scroll_anim::AnimationParams,
    shader::{UniformBinding, check_bindings},
    shader_dots::{DotGridParams, dot_grid_source},
    shader_glow::{BORDER_GLOW_SHADER, BORDER_GLOW_UNIFORMS, BorderGlowUniforms},
};

/// Gooey threshold matrix (5x4 row-major): identity on RGB, alpha remapped to
/// `30a - 15` so blurred edges snap back into a hard silhouette.
pub const GOOEY_COLOR_MATRIX: [f64; 20] = [
    1.0, 0.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.0, 30.0, -15.0,
];

/// Opaque key for an image owned by the host surface. The compositor never
/// decodes or samples pixels; it only places the handle in the graph.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageHandle(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ImageFit {
    Cover,
}

/// A generated shader program plus the uniform values to run it with.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShaderLayer {
    pub source: String,
    pub uniforms: Vec<UniformBinding>,
}

impl ShaderLayer {
    /// The fixed border glow program with per-frame uniform values.
    pub fn border_glow(uniforms: &BorderGlowUniforms) -> Self {
        let bindings = uniforms.bindings();
        debug_assert!(check_bindings(BORDER_GLOW_UNIFORMS, &bindings).is_ok());
        Self {
            source: BORDER_GLOW_SHADER.to_string(),
            uniforms: bindings,
        }
    }

    /// A freshly generated dot grid program; fails like
    /// [`dot_grid_source`] on out-of-domain parameters.
    pub fn dot_grid(params: &DotGridParams) -> GlintResult<Self> {
        Ok(Self {
            source: dot_grid_source(params)?,
            uniforms: Vec::new(),
        })
    }
}

/// One node of the declarative layer description handed to the host surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum LayerNode {
    /// Children render through a blur + color-matrix paint.
    EffectGroup {
        blur_radius: f64,
        color_matrix: [f64; 20],
        children: Vec<LayerNode>,
    },
    /// Children are clipped to the rounded bounds.
    Clip {
        bounds: RoundedRectBounds,
        children: Vec<LayerNode>,
    },
    Image {
        image: ImageHandle,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fit: ImageFit,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Rgba,
    },
    Shape {
        bounds: RoundedRectBounds,
        color: Rgba,
    },
    Shader(ShaderLayer),
}

/// Layer description for one frame, root to leaf in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderGraph {
    pub layers: Vec<LayerNode>,
}

/// Assembles the header scene for one frame: the blur + gooey-matrix group
/// wrapping the clipped avatar (cover-fit image under the tint scrim) next to
/// the static indicator, with an optional accent shader layered on top.
///
/// Pure and non-blocking; it only arranges values the animator already
/// derived.
#[tracing::instrument(skip(params, image, accent))]
pub fn build_header_graph(
    params: &AnimationParams,
    screen_width: f64,
    image: &ImageHandle,
    accent: Option<ShaderLayer>,
) -> RenderGraph {
    let avatar = params.avatar_bounds();
    let center = avatar.center();

    let clipped = LayerNode::Clip {
        bounds: avatar,
        children: vec![
            LayerNode::Image {
                image: image.clone(),
                x: params.position_x,
                y: params.position_y,
                width: params.width,
                height: params.width,
                fit: ImageFit::Cover,
            },
            LayerNode::Circle {
                cx: center.x,
                cy: center.y,
                // Oversized relative to the clip on purpose; the clip bounds
                // it and the scrim stays full-bleed while the avatar shrinks.
                radius: params.width,
                color: params.overlay_tint,
            },
        ],
    };

    let mut layers = vec![LayerNode::EffectGroup {
        blur_radius: params.blur_radius,
        color_matrix: GOOEY_COLOR_MATRIX,
        children: vec![
            clipped,
            LayerNode::Shape {
                bounds: indicator_bounds(screen_width),
                color: Rgba::BLACK,
            },
        ],
    }];

    if let Some(accent) = accent {
        layers.push(LayerNode::Shader(accent));
    }

    RenderGraph { layers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rgb;
    use crate::scroll_anim::MAX_SCROLL_Y;

    fn graph_at(scroll: f64) -> RenderGraph {
        let params = AnimationParams::derive(scroll, 390.0);
        build_header_graph(&params, 390.0, &ImageHandle("avatar".into()), None)
    }

    #[test]
    fn effect_group_wraps_clip_and_indicator() {
        let g = graph_at(0.0);
        assert_eq!(g.layers.len(), 1);
        let LayerNode::EffectGroup {
            blur_radius,
            color_matrix,
            children,
        } = &g.layers[0]
        else {
            panic!("root must be the effect group");
        };
        assert_eq!(*blur_radius, 0.0);
        assert_eq!(*color_matrix, GOOEY_COLOR_MATRIX);
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], LayerNode::Clip { .. }));
        assert!(matches!(children[1], LayerNode::Shape { .. }));
    }

    #[test]
    fn clip_holds_cover_image_then_scrim() {
        let g = graph_at(MAX_SCROLL_Y);
        let LayerNode::EffectGroup { children, .. } = &g.layers[0] else {
            panic!("root must be the effect group");
        };
        let LayerNode::Clip { bounds, children } = &children[0] else {
            panic!("first child must be the clip group");
        };
        assert_eq!(bounds.width, 28.0);
        assert_eq!(children.len(), 2);
        let LayerNode::Image {
            width, height, fit, ..
        } = &children[0]
        else {
            panic!("clip renders the image first");
        };
        assert_eq!(*width, *height);
        assert_eq!(*fit, ImageFit::Cover);
        let LayerNode::Circle { color, radius, .. } = &children[1] else {
            panic!("scrim draws over the image");
        };
        assert_eq!(*color, Rgba::BLACK);
        assert_eq!(*radius, 28.0);
    }

    #[test]
    fn indicator_ignores_scroll() {
        for scroll in [0.0, 60.0, 120.0] {
            let g = graph_at(scroll);
            let LayerNode::EffectGroup { children, .. } = &g.layers[0] else {
                panic!("root must be the effect group");
            };
            let LayerNode::Shape { bounds, .. } = &children[1] else {
                panic!("indicator missing");
            };
            assert_eq!(bounds.y, 18.0, "scroll {scroll}");
            assert_eq!(bounds.x, (390.0 - 28.0) / 2.0);
        }
    }

    #[test]
    fn accent_shader_is_a_top_level_sibling() {
        let params = AnimationParams::derive(30.0, 390.0);
        let glow = ShaderLayer::border_glow(&BorderGlowUniforms {
            resolution: [390.0, 120.0],
            progress: 0.5,
            border_radius: 24.0,
            border_width: 2.0,
            band_width: 0.2,
            highlight_color: Rgb::new(0.4, 0.9, 0.98),
        });
        let g = build_header_graph(&params, 390.0, &ImageHandle("avatar".into()), Some(glow));
        assert_eq!(g.layers.len(), 2);
        let LayerNode::Shader(layer) = &g.layers[1] else {
            panic!("accent must be last");
        };
        assert_eq!(layer.source, BORDER_GLOW_SHADER);
        assert_eq!(layer.uniforms.len(), BORDER_GLOW_UNIFORMS.len());
    }

    #[test]
    fn dot_grid_layer_propagates_rejection() {
        assert!(ShaderLayer::dot_grid(&DotGridParams::new(f64::NAN, 1.0, 0.3, true)).is_err());
        let ok = ShaderLayer::dot_grid(&DotGridParams::new(4.0, 1.5, 0.35, false)).unwrap();
        assert!(ok.source.contains("uniform float angle;"));
    }

    #[test]
    fn graph_round_trips_through_json() {
        let g = graph_at(45.0);
        let s = serde_json::to_string(&g).unwrap();
        let de: RenderGraph = serde_json::from_str(&s).unwrap();
        assert_eq!(de, g);
    }
}
