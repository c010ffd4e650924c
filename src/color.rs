use crate::core::{Rgb, Rgba};

/// Triple substituted whenever a color string cannot be parsed.
pub const FALLBACK_RGB: Rgb = Rgb::new(0.4, 0.9, 0.98);

/// Parses `#RRGGBB` (the `#` is optional, hex digits case-insensitive) into a
/// normalized triple.
///
/// This sits on the per-frame animation path, so it recovers instead of
/// failing: any mismatch (wrong length, stray characters) yields
/// [`FALLBACK_RGB`].
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(FALLBACK_RGB)
}

/// Resolves a color-stop string for interpolation: the `"transparent"`
/// sentinel becomes alpha-zero black (keeping channel blends NaN-free),
/// anything else goes through [`hex_to_rgb`] at full alpha.
pub fn color_stop(s: &str) -> Rgba {
    if s.trim().eq_ignore_ascii_case("transparent") {
        return Rgba::TRANSPARENT;
    }
    hex_to_rgb(s).with_alpha(1.0)
}

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    fn hex_byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    let r = hex_byte(&s[0..2])?;
    let g = hex_byte(&s[2..4])?;
    let b = hex_byte(&s[4..6])?;
    Some(Rgb::new(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ))
}
