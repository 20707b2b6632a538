// SPDX-License-Identifier: MIT
//
// Rgb — the 8-bit sRGB color every pixel is stored as.
//
// Single-character variable names (r, g, b, h, s, l) are the standard
// convention in color math.
#![allow(clippy::many_single_char_names)]
//
// Palette work (the complementary transform) goes through HSL: rotate the
// hue half a turn, keep saturation and lightness. Everything else is plain
// byte triples.

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// ```
/// use hz_raster::color::Rgb;
///
/// let orange = Rgb::hex("#e18c2f").unwrap();
/// assert_eq!(orange, Rgb::new(0xe1, 0x8c, 0x2f));
/// assert_eq!(orange.to_string(), "#e18c2f");
/// assert_eq!(Rgb::hex("f00").unwrap().complementary(), Rgb::new(0, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color: `#RGB` or `#RRGGBB`, with or without the `#`.
    ///
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let bytes = s.as_bytes();

        match bytes.len() {
            3 => {
                let r = parse_hex_digit(bytes[0])?;
                let g = parse_hex_digit(bytes[1])?;
                let b = parse_hex_digit(bytes[2])?;
                Some(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&bytes[0..2])?;
                let g = parse_hex_byte(&bytes[2..4])?;
                let b = parse_hex_byte(&bytes[4..6])?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Convert to HSL: hue in degrees `[0, 360)`, saturation and lightness
    /// in `[0, 1]`.
    #[must_use]
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f64::EPSILON {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if (max - r).abs() < f64::EPSILON {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h * 60.0, s, l)
    }

    /// Build a color from HSL. Hue wraps; saturation and lightness clamp.
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s <= 0.0 {
            let v = to_u8(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let hk = h.rem_euclid(360.0) / 360.0;

        Self::new(
            to_u8(hue_to_channel(p, q, hk + 1.0 / 3.0)),
            to_u8(hue_to_channel(p, q, hk)),
            to_u8(hue_to_channel(p, q, hk - 1.0 / 3.0)),
        )
    }

    /// Rotate the hue by `degrees`, keeping saturation and lightness.
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h + degrees, s, l)
    }

    /// The color opposite on the hue wheel. Grays are their own complement.
    #[must_use]
    pub fn complementary(self) -> Self {
        self.shift_hue(180.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(c: Rgb) -> Self {
        Self([c.r, c.g, c.b])
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(image::Rgb([r, g, b]): image::Rgb<u8>) -> Self {
        Self::new(r, g, b)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a channel in `[0, 1]` to a byte with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
