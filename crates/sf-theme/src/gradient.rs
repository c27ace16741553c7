//! Two-stop gradient derived from the primary color.
//!
//! Purely decorative: nothing here checks the gradient against anything.
//! Pass the already-repaired primary.

use serde::{Deserialize, Serialize};
use sf_color::lighten_hex;

use crate::policy::RepairPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    /// The primary color, as given.
    pub gradient_from: String,
    /// The primary color lightened toward white.
    pub gradient_to: String,
}

/// Derive `{gradientFrom, gradientTo}` from a primary color, lightening the
/// second stop by the default 0.35.
#[must_use]
pub fn generate_gradient(primary: &str) -> Gradient {
    gradient_with(primary, RepairPolicy::default().gradient_lighten)
}

/// Derive a gradient, lightening the second stop by `amount`.
///
/// An unparseable primary yields a flat gradient of that same string.
#[must_use]
pub fn gradient_with(primary: &str, amount: f64) -> Gradient {
    Gradient {
        gradient_from: primary.to_owned(),
        gradient_to: lighten_hex(primary, amount),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sf_color::Rgb;

    #[test]
    fn from_is_primary_verbatim() {
        assert_eq!(generate_gradient("#3d0c0c").gradient_from, "#3d0c0c");
        assert_eq!(generate_gradient("#3D0C0C").gradient_from, "#3D0C0C");
    }

    #[test]
    fn to_is_lightened_primary() {
        assert_eq!(generate_gradient("#3d0c0c").gradient_to, "#816161");
    }

    #[test]
    fn to_is_strictly_lighter() {
        for hex in ["#3d0c0c", "#000000", "#2563eb", "#f0f0f0"] {
            let g = generate_gradient(hex);
            let from = Rgb::from_hex(&g.gradient_from).unwrap().luminance();
            let to = Rgb::from_hex(&g.gradient_to).unwrap().luminance();
            assert!(to > from, "{hex}: {} is not lighter", g.gradient_to);
        }
    }

    #[test]
    fn white_gradient_is_flat() {
        let g = generate_gradient("#ffffff");
        assert_eq!(g.gradient_to, "#ffffff");
    }

    #[test]
    fn malformed_primary_is_flat() {
        let g = generate_gradient("crimson");
        assert_eq!(
            g,
            Gradient {
                gradient_from: "crimson".to_string(),
                gradient_to: "crimson".to_string(),
            }
        );
    }

    #[test]
    fn custom_amount() {
        assert_eq!(gradient_with("#000000", 1.0).gradient_to, "#ffffff");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(generate_gradient("#000000")).unwrap();
        assert_eq!(json["gradientFrom"], "#000000");
        assert!(json["gradientTo"].is_string());
    }
}
