// SPDX-License-Identifier: MIT
//
// sf-color — Color math for storefront palettes.
//
// Storefront palettes travel between the AI pipelines and the rendering
// layer as plain `#rrggbb` strings. This crate is the leaf of the palette
// engine: it parses and formats those strings, computes WCAG relative
// luminance, and nudges colors toward black or white in fixed fractional
// steps.
//
// Nothing in here fails loudly. A string that is not a six-digit hex
// color parses to `None`, and the string-level helpers hand such input
// back untouched so a bad suggestion from upstream can never take the
// pipeline down.

pub mod color;
pub mod luminance;

pub use color::{Rgb, darken_hex, hex_to_rgb, lighten_hex};
pub use luminance::relative_luminance;
