use crate::core::Rgba;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgba {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

/// Behavior when the input falls outside the declared breakpoint range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Return the boundary output value unchanged.
    Clamp,
    /// Continue the linear slope of the nearest segment.
    Extend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Extrapolation {
    pub left: Extrapolate,
    pub right: Extrapolate,
}

impl Extrapolation {
    pub const CLAMP: Self = Self {
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
    };
    pub const EXTEND: Self = Self {
        left: Extrapolate::Extend,
        right: Extrapolate::Extend,
    };
    /// Extend below the first breakpoint, clamp above the last.
    pub const CLAMP_RIGHT: Self = Self {
        left: Extrapolate::Extend,
        right: Extrapolate::Clamp,
    };
}

/// Piecewise-linear interpolation over breakpoint tables.
///
/// `input_range` must be non-decreasing with at least two entries, and
/// `output_range` at least as long as `input_range`. Segment lookup is driven
/// by the input table alone, so surplus trailing outputs are unreachable and
/// the last addressable output acts as the right boundary value.
///
/// Output at a shared breakpoint is exactly that breakpoint's declared output
/// no matter which adjacent segment evaluates it, and a zero-width segment
/// yields its left output directly instead of dividing by zero.
///
/// Panics if either range is empty; the length contract is asserted in debug
/// builds.
pub fn interpolate(
    value: f64,
    input_range: &[f64],
    output_range: &[f64],
    extrapolation: Extrapolation,
) -> f64 {
    interpolate_with(value, input_range, output_range, extrapolation)
}

/// Generic form of [`interpolate`] for any [`Lerp`] output (colors included).
pub fn interpolate_with<T: Lerp + Clone>(
    value: f64,
    input_range: &[f64],
    output_range: &[T],
    extrapolation: Extrapolation,
) -> T {
    debug_assert!(input_range.len() >= 2, "input_range needs >= 2 breakpoints");
    debug_assert!(
        output_range.len() >= input_range.len(),
        "output_range must cover every input breakpoint"
    );
    debug_assert!(
        input_range.windows(2).all(|w| w[0] <= w[1]),
        "input_range must be non-decreasing"
    );

    let n = input_range.len().min(output_range.len());
    if n == 1 {
        return output_range[0].clone();
    }

    let first = input_range[0];
    let last = input_range[n - 1];

    if value < first && extrapolation.left == Extrapolate::Clamp {
        return output_range[0].clone();
    }
    if value > last && extrapolation.right == Extrapolate::Clamp {
        return output_range[n - 1].clone();
    }

    // Segment holding `value`; out-of-range inputs borrow the edge segment's
    // slope (Extend was selected above, Clamp already returned).
    let idx = input_range[..n].partition_point(|&b| b <= value);
    let seg = idx.clamp(1, n - 1) - 1;

    let lo = input_range[seg];
    let hi = input_range[seg + 1];
    if hi == lo {
        return output_range[seg].clone();
    }

    let t = (value - lo) / (hi - lo);
    T::lerp(&output_range[seg], &output_range[seg + 1], t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_evaluate_exactly_from_both_segments() {
        let input = [0.0, 36.0, 120.0];
        let output = [120.0, 18.0, 8.0];
        // Just below, at, and just above the shared breakpoint.
        let at = interpolate(36.0, &input, &output, Extrapolation::CLAMP);
        assert_eq!(at, 18.0);
        let below = interpolate(36.0 - 1e-9, &input, &output, Extrapolation::CLAMP);
        let above = interpolate(36.0 + 1e-9, &input, &output, Extrapolation::CLAMP);
        assert!((below - 18.0).abs() < 1e-6);
        assert!((above - 18.0).abs() < 1e-6);
        // Range endpoints are exact too.
        assert_eq!(interpolate(0.0, &input, &output, Extrapolation::CLAMP), 120.0);
        assert_eq!(interpolate(120.0, &input, &output, Extrapolation::CLAMP), 8.0);
    }

    #[test]
    fn clamp_pins_to_boundary_outputs() {
        let input = [10.0, 20.0];
        let output = [1.0, 3.0];
        assert_eq!(interpolate(-50.0, &input, &output, Extrapolation::CLAMP), 1.0);
        assert_eq!(interpolate(999.0, &input, &output, Extrapolation::CLAMP), 3.0);
    }

    #[test]
    fn extend_continues_edge_slope() {
        let input = [0.0, 10.0];
        let output = [0.0, 20.0];
        assert_eq!(interpolate(-5.0, &input, &output, Extrapolation::EXTEND), -10.0);
        assert_eq!(interpolate(15.0, &input, &output, Extrapolation::EXTEND), 30.0);
    }

    #[test]
    fn clamp_right_extends_left_only() {
        let input = [0.0, 30.0];
        let output = [150.0, 28.0];
        let below = interpolate(-15.0, &input, &output, Extrapolation::CLAMP_RIGHT);
        assert_eq!(below, 211.0); // slope continues upward when pulling down
        let above = interpolate(100.0, &input, &output, Extrapolation::CLAMP_RIGHT);
        assert_eq!(above, 28.0);
    }

    #[test]
    fn zero_width_segment_returns_left_output() {
        let input = [5.0, 5.0];
        let output = [1.0, 9.0];
        let v = interpolate(5.0, &input, &output, Extrapolation::CLAMP);
        assert_eq!(v, 1.0);
        assert!(v.is_finite());
    }

    #[test]
    fn surplus_outputs_are_unreachable() {
        // Three breakpoints, four outputs: lookup is input-driven, so the
        // curve saturates at the third output and 22 is never produced.
        let input = [0.0, 12.0, 48.0];
        let output = [0.0, 4.0, 12.0, 22.0];
        assert_eq!(
            interpolate(48.0, &input, &output, Extrapolation::CLAMP_RIGHT),
            12.0
        );
        assert_eq!(
            interpolate(1000.0, &input, &output, Extrapolation::CLAMP_RIGHT),
            12.0
        );
        assert_eq!(
            interpolate(30.0, &input, &output, Extrapolation::CLAMP_RIGHT),
            8.0
        );
    }

    #[test]
    fn color_interpolation_is_channel_wise() {
        let input = [0.0, 36.0];
        let output = [Rgba::TRANSPARENT, Rgba::BLACK];
        let mid = interpolate_with(18.0, &input, &output, Extrapolation::CLAMP);
        assert_eq!(mid, Rgba::new(0.0, 0.0, 0.0, 0.5));
        let past = interpolate_with(100.0, &input, &output, Extrapolation::CLAMP);
        assert_eq!(past, Rgba::BLACK);
        assert!(mid.a.is_finite());
    }
}
