use crate::{
    core::Rgb,
    shader::{UniformBinding, UniformDecl, UniformType, UniformValue},
};

/// Border glow program: a rounded-rect ring isolated by two signed-distance
/// fields, with a highlight band travelling around the perimeter.
///
/// Everything here is a runtime uniform: the program is a fixed constant and
/// only its inputs change per frame. The band position `progress` is a
/// perimeter fraction in [0,1); the distance to a pixel's own perimeter
/// fraction wraps across the atan2 seam so the band crosses it seamlessly.
pub const BORDER_GLOW_SHADER: &str = r#"
  uniform float2 iResolution;
  uniform float progress;
  uniform float borderRadius;
  uniform float borderWidth;
  uniform float bandWidth;
  uniform float3 highlightColor;

  float sdRoundedRect(float2 p, float2 b, float r) {
    float2 q = abs(p) - b + r;
    return min(max(q.x, q.y), 0.0) + length(max(q, 0.0)) - r;
  }

  half4 main(float2 fragCoord) {
    float2 center = iResolution * 0.5;
    float2 p = fragCoord - center;

    float2 halfSize = center - borderWidth;
    float r = max(borderRadius - borderWidth, 0.0);

    float distInner = sdRoundedRect(p, halfSize, r);
    float distOuter = sdRoundedRect(p, center, borderRadius);

    float borderMask = smoothstep(0.0, 1.5, distInner) * (1.0 - smoothstep(-1.5, 0.0, distOuter));

    if (borderMask < 0.01) {
      return half4(0.0, 0.0, 0.0, 0.0);
    }

    float angle = atan(p.y, p.x);
    float perimProgress = (angle + 3.14159265) / 6.28318530;

    float dist = perimProgress - progress;

    if (dist > 0.5) dist -= 1.0;
    if (dist < -0.5) dist += 1.0;

    dist = abs(dist);

    float glow = 1.0 - smoothstep(0.0, bandWidth, dist);
    glow = pow(glow, 1.5);

    float core = 1.0 - smoothstep(0.0, bandWidth * 0.3, dist);

    float3 color = mix(highlightColor, float3(1.0, 1.0, 1.0), core * 0.7);

    float baseGlow = 0.15;
    float alpha = max(glow, baseGlow) * borderMask;

    return half4(color * alpha, alpha);
  }
"#;

/// Uniform contract of [`BORDER_GLOW_SHADER`].
pub const BORDER_GLOW_UNIFORMS: &[UniformDecl] = &[
    UniformDecl {
        name: "iResolution",
        ty: UniformType::Float2,
    },
    UniformDecl {
        name: "progress",
        ty: UniformType::Float,
    },
    UniformDecl {
        name: "borderRadius",
        ty: UniformType::Float,
    },
    UniformDecl {
        name: "borderWidth",
        ty: UniformType::Float,
    },
    UniformDecl {
        name: "bandWidth",
        ty: UniformType::Float,
    },
    UniformDecl {
        name: "highlightColor",
        ty: UniformType::Float3,
    },
];

/// Per-frame uniform values for the border glow program.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BorderGlowUniforms {
    pub resolution: [f64; 2],
    /// Band position as a perimeter fraction in [0,1).
    pub progress: f64,
    pub border_radius: f64,
    pub border_width: f64,
    pub band_width: f64,
    pub highlight_color: Rgb,
}

impl BorderGlowUniforms {
    /// Named bindings in contract order, ready for the host surface.
    pub fn bindings(&self) -> Vec<UniformBinding> {
        vec![
            UniformBinding::new("iResolution", UniformValue::Float2(self.resolution)),
            UniformBinding::new("progress", UniformValue::Float(self.progress)),
            UniformBinding::new("borderRadius", UniformValue::Float(self.border_radius)),
            UniformBinding::new("borderWidth", UniformValue::Float(self.border_width)),
            UniformBinding::new("bandWidth", UniformValue::Float(self.band_width)),
            UniformBinding::new(
                "highlightColor",
                UniformValue::Float3(self.highlight_color.as_array()),
            ),
        ]
    }
}
