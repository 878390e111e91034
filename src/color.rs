// SPDX-License-Identifier: MIT
//
// huegen color core: canonical #RRGGBB values with RGB/HSL conversions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors raised when caller-supplied color strings enter the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A caller-supplied string does not match `#RRGGBB`.
    ///
    /// Carries the name of the offending parameter and the rejected value.
    /// Raised before any computation or mutation proceeds.
    #[error("invalid color format for `{param}`: {value:?} (expected #RRGGBB)")]
    InvalidFormat {
        /// Which parameter failed validation.
        param: &'static str,
        /// The string that was rejected.
        value: String,
    },
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// One RGB color, canonically written as a `#RRGGBB` hex string.
///
/// Input parsing is case-insensitive; output is always upper-case and
/// zero-padded, so every value the engine hands out matches
/// `^#[0-9A-F]{6}$`. The three channels are plain 8-bit integers, which
/// makes out-of-range channel values unrepresentable.
///
/// # Examples
///
/// ```
/// use huegen::Color;
///
/// let tomato: Color = "#ff6347".parse().unwrap();
/// assert_eq!(tomato.to_hex(), "#FF6347");
/// assert_eq!((tomato.r, tomato.g, tomato.b), (255, 99, 71));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel, 0 to 255.
    pub r: u8,
    /// Green channel, 0 to 255.
    pub g: u8,
    /// Blue channel, 0 to 255.
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit RGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string, attributing failures to `param`.
    ///
    /// Accepts upper, lower, and mixed case. Anything else (wrong length,
    /// missing `#`, non-hex digits) is rejected; nothing is coerced.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] naming `param` when `s` does
    /// not match `#RRGGBB`.
    pub fn parse(s: &str, param: &'static str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat {
            param,
            value: s.to_owned(),
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 {
            return Err(invalid());
        }
        let bytes = hex.as_bytes();
        let r = parse_hex_byte(&bytes[0..2]).ok_or_else(invalid)?;
        let g = parse_hex_byte(&bytes[2..4]).ok_or_else(invalid)?;
        let b = parse_hex_byte(&bytes[4..6]).ok_or_else(invalid)?;
        Ok(Self { r, g, b })
    }

    /// Render the canonical upper-case `#RRGGBB` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL.
    ///
    /// Hue comes back as a whole number of degrees in [0, 360); saturation
    /// and lightness are fractions in [0, 1]. Achromatic colors (all three
    /// channels equal) report hue 0 and saturation 0.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, default to 0.
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Piecewise hue formula keyed on the largest channel.
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        let h = (h / 6.0 * 360.0).round() % 360.0;
        Hsl { h, s, l }
    }

    /// Convert an HSL triple back to RGB.
    ///
    /// Standard chroma/x/m sextant formula; each channel is scaled to 255
    /// and rounded to the nearest integer. Round-tripping through
    /// [`Color::to_hsl`] may move a channel by at most 1 because both
    /// directions round.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        // One case per 60-degree sextant of the hue circle.
        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self {
            r: to_u8(r + m),
            g: to_u8(g + m),
            b: to_u8(b + m),
        }
    }

    /// Euclidean distance between two colors in RGB space.
    ///
    /// Symmetric, zero iff the colors are identical, at most
    /// sqrt(3 * 255^2) (about 441.67) for opposite corners of the cube.
    /// This is geometric distance, not a perceptual difference model.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        db.mul_add(db, dg.mul_add(dg, dr * dr)).sqrt()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, "color")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── HSL ─────────────────────────────────────────────────────────────────────

/// An ephemeral hue/saturation/lightness triple.
///
/// Used as the intermediate representation for hue-based operations;
/// never stored. Hue is whole degrees in [0, 360) when produced by
/// [`Color::to_hsl`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, [0, 360).
    pub h: f64,
    /// Saturation, 0.0 (gray) to 1.0 (fully saturated).
    pub s: f64,
    /// Lightness, 0.0 (black) to 1.0 (white).
    pub l: f64,
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Whether `s` is a well-formed `#RRGGBB` color string (any case).
///
/// Pure predicate form of [`Color::parse`] for callers who want a
/// boolean instead of an error.
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.bytes().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

// ─── Parsing helpers ─────────────────────────────────────────────────────────

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

/// Convert a float (0.0 to 1.0) to a u8 (0 to 255) with round-half-up.
#[inline]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
