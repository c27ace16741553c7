// SPDX-License-Identifier: MIT
//
// sf-color color type — 24-bit sRGB as storefronts exchange it.
//
// Single-character variable names (r, g, b, c, s, n) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Only the six-digit form is accepted: `#rrggbb` or `rrggbb`. Shorthand
// (`#rgb`) and alpha (`#rrggbbaa`) are not colors as far as palettes are
// concerned.
//
// Lighten and darken move each channel a fixed fraction of the way toward
// white or black in plain sRGB, not in a perceptual space. A repaired
// palette must come out byte-identical every time the same suggestion
// goes in.

use std::fmt;

use crate::luminance::relative_luminance;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 24-bit sRGB color.
///
/// # Examples
///
/// ```
/// use sf_color::Rgb;
///
/// let brand = Rgb::from_hex("#1a2b3c").unwrap();
/// assert_eq!(brand, Rgb::new(0x1a, 0x2b, 0x3c));
/// assert_eq!(brand.darken(1.0), Rgb::BLACK);
/// assert_eq!(brand.to_hex(), "#1a2b3c");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
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

    // ─── Constructors ────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a packed `0xRRGGBB` integer into channels. Bits above 24 are
    /// ignored.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u24(n: u32) -> Self {
        Self {
            r: ((n >> 16) & 255) as u8,
            g: ((n >> 8) & 255) as u8,
            b: (n & 255) as u8,
        }
    }

    /// Parse a six-digit hex color, with or without one leading `#`.
    ///
    /// Returns `None` for anything else: wrong length, non-hex digits,
    /// shorthand, alpha.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// WCAG relative luminance in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn luminance(self) -> f64 {
        relative_luminance(self.r, self.g, self.b)
    }

    // ─── Lighten / Darken ────────────────────────────────────────────────

    /// Move every channel `amount` of the way toward black.
    ///
    /// `c' = round(c * (1 - amount))`, clamped to the channel range.
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.map(|c| to_channel(f64::from(c) * (1.0 - amount)))
    }

    /// Move every channel `amount` of the way toward white.
    ///
    /// `c' = round(c + (255 - c) * amount)`, clamped to the channel range.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.map(|c| {
            let c = f64::from(c);
            to_channel((255.0 - c).mul_add(amount, c))
        })
    }

    #[inline]
    fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─── String-level helpers ────────────────────────────────────────────────────
//
// These operate on the hex strings palettes are stored as. A string that
// does not parse comes back exactly as it went in.

/// Parse a hex color string into its channels, or `None` if it is not one.
#[inline]
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    Rgb::from_hex(hex)
}

/// Darken a hex color string by `amount` (0.0–1.0).
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn darken_hex(hex: &str, amount: f64) -> String {
    Rgb::from_hex(hex).map_or_else(|| hex.to_owned(), |c| c.darken(amount).to_hex())
}

/// Lighten a hex color string by `amount` (0.0–1.0).
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn lighten_hex(hex: &str, amount: f64) -> String {
    Rgb::from_hex(hex).map_or_else(|| hex.to_owned(), |c| c.lighten(amount).to_hex())
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 {
        return None;
    }

    let n = s
        .bytes()
        .try_fold(0u32, |n, c| Some((n << 4) | u32::from(parse_hex_digit(c)?)))?;
    Some(Rgb::from_u24(n))
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

/// Round a channel value to the nearest integer and clamp it to 0–255.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
