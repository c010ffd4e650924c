use std::fmt::Write as _;

use crate::{
    error::{GlintError, GlintResult},
    shader::{UniformDecl, UniformType, require_finite, write_uniform_block},
};

/// Uniform contract of the generated dot grid programs.
pub const DOT_GRID_UNIFORMS: &[UniformDecl] = &[
    UniformDecl {
        name: "iResolution",
        ty: UniformType::Float2,
    },
    UniformDecl {
        name: "angle",
        ty: UniformType::Float,
    },
];

/// Generation-time constants for a dot grid overlay. Unlike the uniforms,
/// these are baked into the source text; changing any of them means
/// generating a new independent program.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DotGridParams {
    /// Tile pitch in pixels.
    pub spacing: f64,
    pub dot_radius: f64,
    pub opacity: f64,
    /// Light themes get black dots, dark themes white; the branch is chosen
    /// here, never at shader runtime.
    pub is_light: bool,
}

impl DotGridParams {
    pub fn new(spacing: f64, dot_radius: f64, opacity: f64, is_light: bool) -> Self {
        Self {
            spacing,
            dot_radius,
            opacity,
            is_light,
        }
    }

    pub fn validate(&self) -> GlintResult<()> {
        let spacing = require_finite("spacing", self.spacing)?;
        if spacing <= 0.0 {
            return Err(GlintError::invalid_parameter(format!(
                "spacing must be > 0, got {spacing}"
            )));
        }
        let dot_radius = require_finite("dot_radius", self.dot_radius)?;
        if dot_radius < 0.0 {
            return Err(GlintError::invalid_parameter(format!(
                "dot_radius must be >= 0, got {dot_radius}"
            )));
        }
        let opacity = require_finite("opacity", self.opacity)?;
        if opacity < 0.0 {
            return Err(GlintError::invalid_parameter(format!(
                "opacity must be >= 0, got {opacity}"
            )));
        }
        Ok(())
    }
}

/// Generates the dot grid overlay program.
///
/// Pure: identical parameters produce byte-identical text. Baked numbers use
/// fixed decimal precision (one decimal for spacing, two for radius and
/// opacity) so the output stays deterministic and compact. Validation runs
/// before a single byte of text is assembled; a rejected parameter set never
/// leaks malformed source.
#[tracing::instrument]
pub fn dot_grid_source(params: &DotGridParams) -> GlintResult<String> {
    params.validate()?;

    let ret = if params.is_light {
        format!(
            "return half4(0.0, 0.0, 0.0, dot * mask * {:.2});",
            params.opacity
        )
    } else {
        format!(
            "return half4(1.0, 1.0, 1.0, dot * mask * {:.2});",
            params.opacity
        )
    };

    let mut out = String::with_capacity(768);
    out.push('\n');
    write_uniform_block(&mut out, DOT_GRID_UNIFORMS);

    // Infallible writes into a String.
    let _ = write!(
        out,
        r#"
  half4 main(float2 fragCoord) {{
    float spacing = {spacing:.1};
    float dotR = {dot_radius:.2};

    float2 grid = mod(fragCoord, spacing);
    float d = length(grid - float2(spacing * 0.5, spacing * 0.5));
    float dot = 1.0 - smoothstep(dotR - 0.3, dotR + 0.1, d);

    float2 center = iResolution * 0.5;
    float2 dir = fragCoord - center;
    float a = atan(dir.y, dir.x);
    float norm = (a + 3.14159265) / 6.28318530;
    float rot = fract(norm - angle / 6.28318530 - 0.125);

    float mask = (1.0 - smoothstep(0.0, 0.12, rot)) + smoothstep(0.88, 1.0, rot);

    {ret}
  }}
"#,
        spacing = params.spacing,
        dot_radius = params.dot_radius,
    );

    Ok(out)
}
