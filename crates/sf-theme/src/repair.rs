//! Contrast repair — push failing foreground roles away from the background.
//!
//! Light themes repair by darkening, dark themes by lightening. Each role
//! is repaired on its own against the unchanged background, in fixed
//! fractional steps, until it meets its threshold or runs out of attempts:
//!
//! ```text
//! for role in [text, accent, primary]:
//!     while contrast(color, bg) < threshold && attempts < max_attempts:
//!         color = darken(color, step)      # lighten() for dark themes
//! ```
//!
//! The background is never touched, and the direction is never inferred
//! from it. The caller says whether the theme is dark.
//!
//! Running out of attempts is not an error. The role keeps the furthest
//! color it reached, and [`RepairOutcome`] records that it fell short.

use serde::{Deserialize, Serialize};
use sf_color::{darken_hex, lighten_hex};
use tracing::{debug, warn};

use crate::contrast::contrast_ratio;
use crate::palette::{Palette, Role, Roles};
use crate::policy::RepairPolicy;

// ---------------------------------------------------------------------------
// ThemeMode
// ---------------------------------------------------------------------------

/// Whether a palette sits on a light or a dark background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background: foregrounds are darkened.
    #[default]
    Light,
    /// Dark background: foregrounds are lightened.
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Move `hex` one repair step away from this theme's background.
    fn step_away(self, hex: &str, amount: f64) -> String {
        match self {
            Self::Light => darken_hex(hex, amount),
            Self::Dark => lighten_hex(hex, amount),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// What repair did to one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleOutcome {
    /// Steps taken. Zero if the role already passed.
    pub attempts: u32,
    /// Contrast against the background after the last step.
    pub ratio: f64,
    /// Whether `ratio` meets the role's threshold.
    pub succeeded: bool,
}

/// Per-role results of one repair run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairOutcome {
    pub mode: ThemeMode,
    pub text: RoleOutcome,
    pub accent: RoleOutcome,
    pub primary: RoleOutcome,
}

impl RepairOutcome {
    #[must_use]
    pub const fn role(&self, role: Role) -> &RoleOutcome {
        match role {
            Role::Text => &self.text,
            Role::Accent => &self.accent,
            Role::Primary => &self.primary,
        }
    }

    /// Whether every role ended up meeting its threshold.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.text.succeeded && self.accent.succeeded && self.primary.succeeded
    }

    /// Roles still below threshold after their attempt budget ran out.
    #[must_use]
    pub fn unresolved(&self) -> Roles {
        Role::ALL
            .into_iter()
            .filter(|&role| !self.role(role).succeeded)
            .fold(Roles::empty(), |set, role| set | role.flag())
    }
}

/// A repaired palette together with how each role got there.
#[derive(Debug, Clone, PartialEq)]
pub struct Repair {
    pub palette: Palette,
    pub outcome: RepairOutcome,
}

impl Repair {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.outcome.succeeded()
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Repair a light-theme palette by darkening failing foreground roles.
#[must_use]
pub fn adjust_for_contrast(palette: &Palette) -> Palette {
    repair(palette, ThemeMode::Light, &RepairPolicy::default()).palette
}

/// Repair a dark-theme palette by lightening failing foreground roles.
#[must_use]
pub fn adjust_for_dark_theme(palette: &Palette) -> Palette {
    repair(palette, ThemeMode::Dark, &RepairPolicy::default()).palette
}

/// Repair in whichever direction the caller's theme flag selects.
#[must_use]
pub fn adjust_for_theme(palette: &Palette, is_dark: bool) -> Palette {
    repair(palette, ThemeMode::from_dark(is_dark), &RepairPolicy::default()).palette
}

/// Repair every foreground role of `palette` under `policy`.
///
/// Roles that already pass come back byte-for-byte unchanged with zero
/// attempts. The returned palette is a new value; `palette` is untouched.
#[must_use]
pub fn repair(palette: &Palette, mode: ThemeMode, policy: &RepairPolicy) -> Repair {
    let bg = &palette.background_color;
    let mut repaired = palette.clone();

    let mut run = |role: Role| {
        let (color, outcome) = repair_role(palette.color(role), bg, role, mode, policy);
        repaired = repaired.with_color(role, color);
        outcome
    };

    let text = run(Role::Text);
    let accent = run(Role::Accent);
    let primary = run(Role::Primary);

    Repair {
        palette: repaired,
        outcome: RepairOutcome {
            mode,
            text,
            accent,
            primary,
        },
    }
}

fn repair_role(
    color: &str,
    bg: &str,
    role: Role,
    mode: ThemeMode,
    policy: &RepairPolicy,
) -> (String, RoleOutcome) {
    let threshold = role.threshold(policy);
    let step = role.step(policy);

    let mut color = color.to_owned();
    let mut ratio = contrast_ratio(&color, bg);
    let mut attempts = 0;

    while ratio < threshold && attempts < policy.max_attempts {
        color = mode.step_away(&color, step);
        ratio = contrast_ratio(&color, bg);
        attempts += 1;
    }

    let succeeded = ratio >= threshold;
    if !succeeded {
        warn!(
            %role, ?mode, attempts, ratio, threshold, color = %color,
            "contrast repair exhausted attempt budget"
        );
    } else if attempts > 0 {
        debug!(%role, ?mode, attempts, ratio, color = %color, "contrast repaired");
    }

    (
        color,
        RoleOutcome {
            attempts,
            ratio,
            succeeded,
        },
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
