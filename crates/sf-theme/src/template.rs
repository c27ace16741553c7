//! Landing-page template kinds and their builtin palettes.
//!
//! The generation pipeline picks a template kind first; whether the page
//! is a dark theme follows from the kind, never from the colors. Each kind
//! also ships a default palette for when the suggester comes back empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Clean white page, single strong accent.
    Minimal,
    /// Warm, saturated, high-energy.
    Bold,
    /// Cream background, deep burgundy and muted gold.
    Elegant,
    /// Near-black background with gold.
    Luxury,
    /// Deep navy background with electric cyan and pink.
    Neon,
}

impl TemplateKind {
    pub const ALL: [Self; 5] = [
        Self::Minimal,
        Self::Bold,
        Self::Elegant,
        Self::Luxury,
        Self::Neon,
    ];

    /// Whether pages of this kind render on a dark background.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Luxury | Self::Neon)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Bold => "bold",
            Self::Elegant => "elegant",
            Self::Luxury => "luxury",
            Self::Neon => "neon",
        }
    }

    /// Look up a kind by its kebab-case name.
    ///
    /// Returns `None` if the name is not recognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The builtin palette for this kind.
    #[must_use]
    pub fn preset(self) -> Palette {
        let (primary, accent, background, text) = match self {
            Self::Minimal => ("#111827", "#2563eb", "#ffffff", "#1f2937"),
            Self::Bold => ("#b91c1c", "#c2410c", "#fffbeb", "#1c1917"),
            Self::Elegant => ("#3d0c0c", "#9a6b1f", "#faf7f2", "#2b2b2b"),
            Self::Luxury => ("#d4af37", "#f5e6c8", "#0b0b0f", "#f5f5f4"),
            Self::Neon => ("#22d3ee", "#f472b6", "#0a0a1a", "#e5e7eb"),
        };
        Palette::new(primary, accent, background, text)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownTemplate(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
