//! WCAG 2.x contrast ratio between two hex colors.
//!
//! Unparseable input never errors: it scores 1:1, the "indistinguishable"
//! worst case, so any threshold check on it fails and repair kicks in.

use sf_color::Rgb;

/// Contrast reported when either color fails to parse.
pub const FALLBACK_RATIO: f64 = 1.0;

/// Compute the WCAG contrast ratio between two `#rrggbb` strings.
///
/// Returns a value in [1.0, 21.0] regardless of argument order, or
/// [`FALLBACK_RATIO`] if either string is not a six-digit hex color.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    match (Rgb::from_hex(a), Rgb::from_hex(b)) {
        (Some(a), Some(b)) => contrast_ratio_rgb(a, b),
        _ => FALLBACK_RATIO,
    }
}

/// Compute the WCAG contrast ratio between two parsed colors.
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
#[must_use]
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
