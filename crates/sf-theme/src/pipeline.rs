//! Palette finalization — the sequence the generation pipelines run.
//!
//! 1. Validate the suggested palette.
//! 2. If any pair fails, repair it in the direction the caller's theme
//!    flag selects.
//! 3. Derive the gradient from the (repaired) primary.
//! 4. Mark the result `contrastValidated`.
//!
//! `contrastValidated` means the pipeline ran, not that every pair now
//! passes. The attached `validation` report and `repair` outcome say
//! whether it did.

use serde::Serialize;
use tracing::debug;

use crate::gradient::{Gradient, gradient_with};
use crate::palette::{Palette, ValidationReport, validate_with};
use crate::policy::RepairPolicy;
use crate::repair::{RepairOutcome, ThemeMode, repair};
use crate::template::TemplateKind;

/// A palette ready for rendering, in the shape the pipelines persist.
///
/// Serializes flat:
/// `{primaryColor, accentColor, backgroundColor, textColor, gradientFrom,
/// gradientTo, contrastValidated, isDarkTheme, validation, repair?}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemedPalette {
    #[serde(flatten)]
    pub palette: Palette,
    #[serde(flatten)]
    pub gradient: Gradient,
    pub contrast_validated: bool,
    pub is_dark_theme: bool,
    /// Validation of the final palette.
    pub validation: ValidationReport,
    /// Present only if repair ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repair: Option<RepairOutcome>,
}

/// Finalize a suggested palette under the default WCAG AA policy.
#[must_use]
pub fn finalize(palette: &Palette, is_dark: bool) -> ThemedPalette {
    finalize_with(palette, is_dark, &RepairPolicy::default())
}

/// Finalize a template kind's builtin palette.
#[must_use]
pub fn finalize_preset(kind: TemplateKind, policy: &RepairPolicy) -> ThemedPalette {
    finalize_with(&kind.preset(), kind.is_dark(), policy)
}

/// Finalize a suggested palette under `policy`.
#[must_use]
pub fn finalize_with(palette: &Palette, is_dark: bool, policy: &RepairPolicy) -> ThemedPalette {
    let initial = validate_with(palette, policy);

    let (palette, outcome) = if initial.all_pass() {
        debug!("palette passes as suggested, skipping repair");
        (palette.clone(), None)
    } else {
        let mode = ThemeMode::from_dark(is_dark);
        debug!(failing = ?initial.failing(), ?mode, "repairing palette");
        let repaired = repair(palette, mode, policy);
        (repaired.palette, Some(repaired.outcome))
    };

    let gradient = gradient_with(&palette.primary_color, policy.gradient_lighten);
    let validation = validate_with(&palette, policy);

    debug!(
        primary = %palette.primary_color,
        background = %palette.background_color,
        is_dark,
        repaired = outcome.is_some(),
        all_pass = validation.all_pass(),
        "palette finalized"
    );

    ThemedPalette {
        palette,
        gradient,
        contrast_validated: true,
        is_dark_theme: is_dark,
        validation,
        repair: outcome,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
