//! Storefront palette and contrast validation.
//!
//! A [`Palette`] is four hex colors with fixed roles. Only the three
//! foreground roles are checked, each against the background; nothing is
//! required between primary, accent and text themselves.
//!
//! | Pair                   | Threshold | WCAG basis                      |
//! |------------------------|-----------|---------------------------------|
//! | text / background      | 4.5:1     | AA body text                    |
//! | accent / background    | 3.0:1     | AA large text, graphical object |
//! | primary / background   | 3.0:1     | AA large text, graphical object |

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::contrast::contrast_ratio;
use crate::error::Result;
use crate::policy::RepairPolicy;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The four-color set that drives a storefront or landing page theme.
///
/// Colors are kept as the strings they arrived as. Nothing here rewrites
/// a color unless repair actually changes it, so a malformed suggestion
/// survives the trip for the caller to inspect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Dominant brand color: headings, structure.
    pub primary_color: String,
    /// Call-to-action and highlight color.
    pub accent_color: String,
    /// Page background.
    pub background_color: String,
    /// Body text.
    pub text_color: String,
}

impl Palette {
    #[must_use]
    pub fn new(
        primary: impl Into<String>,
        accent: impl Into<String>,
        background: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            primary_color: primary.into(),
            accent_color: accent.into(),
            background_color: background.into(),
            text_color: text.into(),
        }
    }

    /// Parse a palette from its JSON wire form
    /// (`{"primaryColor": "#…", "accentColor": …}`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if the input is not a palette object.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// The color currently assigned to a foreground role.
    #[must_use]
    pub fn color(&self, role: Role) -> &str {
        match role {
            Role::Text => &self.text_color,
            Role::Accent => &self.accent_color,
            Role::Primary => &self.primary_color,
        }
    }

    /// A copy of this palette with one foreground role replaced.
    #[must_use]
    pub fn with_color(&self, role: Role, color: String) -> Self {
        let mut next = self.clone();
        match role {
            Role::Text => next.text_color = color,
            Role::Accent => next.accent_color = color,
            Role::Primary => next.primary_color = color,
        }
        next
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A foreground role checked against the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Text,
    Accent,
    Primary,
}

impl Role {
    /// All foreground roles, in repair order.
    pub const ALL: [Self; 3] = [Self::Text, Self::Accent, Self::Primary];

    /// Minimum contrast against the background under `policy`.
    #[must_use]
    pub const fn threshold(self, policy: &RepairPolicy) -> f64 {
        match self {
            Self::Text => policy.text_threshold,
            Self::Accent | Self::Primary => policy.large_threshold,
        }
    }

    /// Fraction moved toward black/white per repair attempt under `policy`.
    #[must_use]
    pub const fn step(self, policy: &RepairPolicy) -> f64 {
        match self {
            Self::Text => policy.text_step,
            Self::Accent => policy.accent_step,
            Self::Primary => policy.primary_step,
        }
    }

    #[must_use]
    pub const fn flag(self) -> Roles {
        match self {
            Self::Text => Roles::TEXT,
            Self::Accent => Roles::ACCENT,
            Self::Primary => Roles::PRIMARY,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Accent => "accent",
            Self::Primary => "primary",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of foreground roles, e.g. the ones failing validation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Roles: u8 {
        const TEXT    = 0b001;
        const ACCENT  = 0b010;
        const PRIMARY = 0b100;
    }
}

// ---------------------------------------------------------------------------
// ValidationReport
// ---------------------------------------------------------------------------

/// Pass/fail and raw ratio for each foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub text_passes: bool,
    pub accent_passes: bool,
    pub primary_passes: bool,
    pub text_ratio: f64,
    pub accent_ratio: f64,
    pub primary_ratio: f64,
}

impl ValidationReport {
    #[must_use]
    pub const fn passes(&self, role: Role) -> bool {
        match role {
            Role::Text => self.text_passes,
            Role::Accent => self.accent_passes,
            Role::Primary => self.primary_passes,
        }
    }

    #[must_use]
    pub const fn ratio(&self, role: Role) -> f64 {
        match role {
            Role::Text => self.text_ratio,
            Role::Accent => self.accent_ratio,
            Role::Primary => self.primary_ratio,
        }
    }

    /// Whether every pair meets its threshold.
    #[must_use]
    pub const fn all_pass(&self) -> bool {
        self.text_passes && self.accent_passes && self.primary_passes
    }

    /// The roles that fall short of their threshold.
    #[must_use]
    pub fn failing(&self) -> Roles {
        Role::ALL
            .into_iter()
            .filter(|&role| !self.passes(role))
            .fold(Roles::empty(), |set, role| set | role.flag())
    }
}

/// Validate a palette against the WCAG AA thresholds.
#[must_use]
pub fn validate_palette(palette: &Palette) -> ValidationReport {
    validate_with(palette, &RepairPolicy::default())
}

/// Validate a palette against the thresholds of `policy`.
#[must_use]
pub fn validate_with(palette: &Palette, policy: &RepairPolicy) -> ValidationReport {
    let bg = &palette.background_color;
    let text_ratio = contrast_ratio(&palette.text_color, bg);
    let accent_ratio = contrast_ratio(&palette.accent_color, bg);
    let primary_ratio = contrast_ratio(&palette.primary_color, bg);

    ValidationReport {
        text_passes: text_ratio >= Role::Text.threshold(policy),
        accent_passes: accent_ratio >= Role::Accent.threshold(policy),
        primary_passes: primary_ratio >= Role::Primary.threshold(policy),
        text_ratio,
        accent_ratio,
        primary_ratio,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
