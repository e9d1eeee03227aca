//! Color Transform Module
//! Pure hex <-> HSL conversions plus the "darken" helper used for bar borders.
//!
//! Hue is in degrees [0, 360), saturation and lightness are percentages
//! [0, 100]. Malformed hex input never errors; it falls back to a neutral
//! mid-gray (h 0, s 0, l 50) so the chart stays renderable.

use egui::Color32;
use plotters::style::RGBColor;

/// Fallback returned for any input that is not a 6-digit hex color.
const NEUTRAL: Hsl = Hsl {
    h: 0.0,
    s: 0.0,
    l: 50.0,
};

/// A color in HSL space (h in degrees, s/l in percent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Parse a 6-digit hex color with an optional `#` prefix.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert a hex color to HSL, returning the neutral fallback on bad input.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let Some((r, g, b)) = parse_hex(hex) else {
        return NEUTRAL;
    };

    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue and saturation are zero.
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Hsl {
        h: h * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Convert HSL back to a `#rrggbb` string. Output is always well-formed.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);

    let f = |n: f64| -> u8 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * color).round() as u8
    };

    format!("#{:02x}{:02x}{:02x}", f(0.0), f(8.0), f(4.0))
}

/// Darken a hex color by reducing lightness `amount` percentage points,
/// clamped at black. `darken(c, 0)` is the identity up to rounding.
pub fn darken(hex: &str, amount: f64) -> String {
    let Hsl { h, s, l } = hex_to_hsl(hex);
    hsl_to_hex(h, s, (l - amount).max(0.0))
}

/// RGB triple for rendering, mid-gray when the hex string is malformed.
pub fn to_rgb(hex: &str) -> (u8, u8, u8) {
    parse_hex(hex).unwrap_or((128, 128, 128))
}

/// egui color for preview painting.
pub fn to_color32(hex: &str) -> Color32 {
    let (r, g, b) = to_rgb(hex);
    Color32::from_rgb(r, g, b)
}

/// plotters color for static export rendering.
pub fn to_plotters(hex: &str) -> RGBColor {
    let (r, g, b) = to_rgb(hex);
    RGBColor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel_delta(a: &str, b: &str) -> u8 {
        let (ar, ag, ab) = parse_hex(a).unwrap();
        let (br, bg, bb) = parse_hex(b).unwrap();
        ar.abs_diff(br).max(ag.abs_diff(bg)).max(ab.abs_diff(bb))
    }

    #[test]
    fn hex_hsl_round_trip_within_rounding() {
        for hex in ["#22c55e", "#9b4f82", "#e8a5d0", "#6b8e9c", "#fafafa", "#1a1a2e"] {
            let Hsl { h, s, l } = hex_to_hsl(hex);
            let back = hsl_to_hex(h, s, l);
            assert!(
                channel_delta(hex, &back) <= 2,
                "{hex} round-tripped to {back}"
            );
        }
    }

    #[test]
    fn pure_colors_round_trip_exactly() {
        for hex in ["#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff"] {
            let Hsl { h, s, l } = hex_to_hsl(hex);
            assert_eq!(hsl_to_hex(h, s, l), hex);
        }
    }

    #[test]
    fn darken_zero_is_identity() {
        for hex in ["#22c55e", "#6b8e9c", "#d4a574"] {
            assert!(channel_delta(hex, &darken(hex, 0.0)) <= 1);
        }
    }

    #[test]
    fn darken_full_yields_black() {
        assert_eq!(darken("#22c55e", 100.0), "#000000");
        assert_eq!(darken("#ffffff", 100.0), "#000000");
    }

    #[test]
    fn darken_reduces_lightness() {
        let original = hex_to_hsl("#22c55e");
        let darkened_hex = darken("#22c55e", 20.0);
        assert_ne!(darkened_hex, "#22c55e");
        let darkened = hex_to_hsl(&darkened_hex);
        assert!(darkened.l < original.l);
    }

    #[test]
    fn malformed_input_falls_back_to_neutral() {
        for bad in ["", "#22c5", "not-a-color", "#12345g", "#1234567"] {
            assert_eq!(hex_to_hsl(bad), NEUTRAL);
            assert_eq!(to_rgb(bad), (128, 128, 128));
        }
        // Prefix is optional, case-insensitive.
        assert_eq!(hex_to_hsl("22C55E"), hex_to_hsl("#22c55e"));
    }

    #[test]
    fn darken_output_always_well_formed() {
        for input in ["#22c55e", "garbage", ""] {
            let out = darken(input, 20.0);
            assert!(parse_hex(&out).is_some(), "bad output {out}");
        }
    }
}
