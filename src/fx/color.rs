//! Hex color parsing with alpha, memoized per hex string.

use std::{collections::HashMap, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Best-effort hex parse; never fails.
    ///
    /// - one leading `#` is dropped
    /// - three digits expand by duplication (`abc` → `aabbcc`)
    /// - the leading run of hex digits is read, anything after it ignored
    /// - no digits at all yields black
    pub fn parse_hex(hex: &str) -> Self {
        let stripped = hex.replacen('#', "", 1);
        let digits: Vec<char> = stripped.chars().collect();
        let normalized: String = if digits.len() == 3 {
            digits.iter().flat_map(|&c| [c, c]).collect()
        } else {
            stripped
        };

        // Mirrors a 32-bit integer view of the parsed value
        let value = normalized
            .chars()
            .map_while(|c| c.to_digit(16))
            .fold(0u32, |acc, d| acc.wrapping_mul(16).wrapping_add(d));

        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Rgba {
        let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Linear interpolation towards `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Source-over composite onto an opaque background.
    pub fn over(self, background: Rgb) -> Rgb {
        background.lerp(self.rgb(), self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Memo of parsed hex strings, keyed on the literal input (not the alpha).
///
/// Grows without bound; palettes are a fixed, small set of literals.
#[derive(Debug, Default)]
pub struct ColorCache {
    parsed: HashMap<String, Rgb>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rgb(&mut self, hex: &str) -> Rgb {
        if let Some(&rgb) = self.parsed.get(hex) {
            return rgb;
        }
        let rgb = Rgb::parse_hex(hex);
        self.parsed.insert(hex.to_owned(), rgb);
        rgb
    }

    pub fn with_alpha(&mut self, hex: &str, alpha: f32) -> Rgba {
        self.rgb(hex).with_alpha(alpha)
    }

    pub fn len(&self) -> usize {
        self.parsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_at_half_alpha() {
        let mut cache = ColorCache::new();
        let c = cache.with_alpha("#ffffff", 0.5);
        assert_eq!(c, Rgba::new(255, 255, 255, 0.5));
        assert_eq!(c.to_string(), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn short_hex_matches_expanded() {
        assert_eq!(Rgb::parse_hex("#abc"), Rgb::parse_hex("#aabbcc"));
        assert_eq!(Rgb::parse_hex("abc"), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(Rgb::parse_hex("8ff4ff"), Rgb::new(0x8f, 0xf4, 0xff));
    }

    #[test]
    fn alpha_is_clamped() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb.with_alpha(1.7).a, 1.0);
        assert_eq!(rgb.with_alpha(-0.2).a, 0.0);
        assert_eq!(rgb.with_alpha(f32::NAN).a, 0.0);
    }

    #[test]
    fn malformed_hex_is_best_effort() {
        assert_eq!(Rgb::parse_hex(""), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::parse_hex("#zzzzzz"), Rgb::new(0, 0, 0));
        // Leading digits only: "12" then garbage
        assert_eq!(Rgb::parse_hex("#12xy56"), Rgb::new(0, 0, 0x12));
    }

    #[test]
    fn cache_keys_on_literal_string() {
        let mut cache = ColorCache::new();
        cache.with_alpha("#ff0000", 0.1);
        cache.with_alpha("#ff0000", 0.9);
        assert_eq!(cache.len(), 1);

        cache.with_alpha("ff0000", 0.9);
        assert_eq!(cache.len(), 2, "differently spelled hex is a separate entry");
    }

    #[test]
    fn compositing_over_background() {
        let bg = Rgb::new(0, 0, 0);
        assert_eq!(Rgba::new(200, 100, 50, 1.0).over(bg), Rgb::new(200, 100, 50));
        assert_eq!(Rgba::new(200, 100, 50, 0.0).over(bg), bg);
        assert_eq!(Rgba::new(200, 100, 50, 0.5).over(bg), Rgb::new(100, 50, 25));
    }
}
