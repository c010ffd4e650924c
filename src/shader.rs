//! Shared machinery for the procedural shader generators.
//!
//! Generated programs separate two kinds of inputs: constants baked into the
//! source text at generation time, and runtime uniforms declared up front and
//! resolved by the host surface each frame. The uniform block follows a fixed
//! grammar (one `uniform <type> <name>;` line per declaration, two-space
//! indent) so generated text is deterministic byte for byte.
//!
//! The angular helpers mirror the arithmetic the generated programs perform
//! on the GPU, giving tests (and host-side previews) a reference for the
//! perimeter math without compiling a shader.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use crate::error::{GlintError, GlintResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UniformType {
    Float,
    Float2,
    Float3,
}

impl UniformType {
    pub fn sksl_name(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Float2 => "float2",
            Self::Float3 => "float3",
        }
    }
}

/// One entry of a shader family's declared uniform contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct UniformDecl {
    pub name: &'static str,
    pub ty: UniformType,
}

/// A runtime value destined for a declared uniform slot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum UniformValue {
    Float(f64),
    Float2([f64; 2]),
    Float3([f64; 3]),
}

impl UniformValue {
    pub fn ty(&self) -> UniformType {
        match self {
            Self::Float(_) => UniformType::Float,
            Self::Float2(_) => UniformType::Float2,
            Self::Float3(_) => UniformType::Float3,
        }
    }
}

/// A named uniform value ready to hand to the host surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UniformBinding {
    pub name: String,
    pub value: UniformValue,
}

impl UniformBinding {
    pub fn new(name: impl Into<String>, value: UniformValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Checks a binding set against a family's declared contract: every declared
/// uniform bound exactly once, types matching, no strays.
pub fn check_bindings(decls: &[UniformDecl], bindings: &[UniformBinding]) -> GlintResult<()> {
    for decl in decls {
        let mut found = 0usize;
        for b in bindings.iter().filter(|b| b.name == decl.name) {
            if b.value.ty() != decl.ty {
                return Err(GlintError::validation(format!(
                    "uniform '{}' expects {}, got {}",
                    decl.name,
                    decl.ty.sksl_name(),
                    b.value.ty().sksl_name()
                )));
            }
            found += 1;
        }
        match found {
            1 => {}
            0 => {
                return Err(GlintError::validation(format!(
                    "uniform '{}' is not bound",
                    decl.name
                )));
            }
            _ => {
                return Err(GlintError::validation(format!(
                    "uniform '{}' is bound {found} times",
                    decl.name
                )));
            }
        }
    }
    if let Some(stray) = bindings
        .iter()
        .find(|b| !decls.iter().any(|d| d.name == b.name))
    {
        return Err(GlintError::validation(format!(
            "unknown uniform '{}'",
            stray.name
        )));
    }
    Ok(())
}

/// Writes the uniform declaration block in the generator grammar.
pub(crate) fn write_uniform_block(out: &mut String, decls: &[UniformDecl]) {
    for decl in decls {
        // Infallible for String targets.
        let _ = writeln!(out, "  uniform {} {};", decl.ty.sksl_name(), decl.name);
    }
}

pub(crate) fn require_finite(name: &str, value: f64) -> GlintResult<f64> {
    if !value.is_finite() {
        return Err(GlintError::invalid_parameter(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(value)
}

/// Position of `(dx, dy)` on the perimeter, as the angle from center
/// normalized to a [0,1) turn. The seam sits on the negative x axis (where
/// `atan2` flips sign), matching the generated programs.
pub fn perimeter_progress(dx: f64, dy: f64) -> f64 {
    (dy.atan2(dx) + PI) / TAU
}

/// Shortest distance between two perimeter positions, wrapping across the
/// seam: a raw difference beyond half a turn is folded back before taking the
/// absolute value.
pub fn wrapped_band_distance(perimeter_pos: f64, progress: f64) -> f64 {
    let mut d = perimeter_pos - progress;
    if d > 0.5 {
        d -= 1.0;
    }
    if d < -0.5 {
        d += 1.0;
    }
    d.abs()
}
