// SPDX-License-Identifier: MIT
//
// WCAG 2.x relative luminance.
//
// The constants below are the published WCAG values, including the
// 0.03928 linearization knee from the WCAG 2.0 text (the sRGB standard
// itself says 0.04045; no 8-bit channel value falls between the two, so
// the choice never changes a result).

/// Linearization knee for normalized sRGB channels.
const KNEE: f64 = 0.039_28;

/// Luminance weights for linear red, green and blue.
const R_WEIGHT: f64 = 0.2126;
const G_WEIGHT: f64 = 0.7152;
const B_WEIGHT: f64 = 0.0722;

/// Convert one 8-bit sRGB channel to linear light (remove gamma).
#[inline]
#[must_use]
pub fn channel_to_linear(c: u8) -> f64 {
    let s = f64::from(c) / 255.0;
    if s <= KNEE {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of an 8-bit sRGB color per WCAG 2.x.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    R_WEIGHT.mul_add(
        channel_to_linear(r),
        G_WEIGHT.mul_add(channel_to_linear(g), B_WEIGHT * channel_to_linear(b)),
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
