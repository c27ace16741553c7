//! Repair policy — thresholds, step sizes and budgets in one place.
//!
//! [`RepairPolicy::default()`] is the WCAG AA policy every free function in
//! this crate uses. A policy file can override any subset of fields:
//!
//! ```toml
//! text_threshold = 7.0   # AAA body text
//! max_attempts = 16
//! ```
//!
//! | Field              | Default | Meaning                                     |
//! |--------------------|---------|---------------------------------------------|
//! | `text_threshold`   | 4.5     | Min text/background ratio (AA body text)    |
//! | `large_threshold`  | 3.0     | Min accent & primary/background ratio       |
//! | `text_step`        | 0.15    | Fraction moved per text repair attempt      |
//! | `accent_step`      | 0.12    | Fraction moved per accent repair attempt    |
//! | `primary_step`     | 0.12    | Fraction moved per primary repair attempt   |
//! | `max_attempts`     | 10      | Repair attempts per role                    |
//! | `gradient_lighten` | 0.35    | How far `gradientTo` is lightened from primary |

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// WCAG AA minimum ratio for body text.
pub const TEXT_MIN_RATIO: f64 = 4.5;

/// WCAG AA minimum ratio for large text and graphical objects.
pub const LARGE_MIN_RATIO: f64 = 3.0;

/// Highest contrast ratio WCAG can produce (black on white).
pub const MAX_RATIO: f64 = 21.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepairPolicy {
    pub text_threshold: f64,
    pub large_threshold: f64,
    pub text_step: f64,
    pub accent_step: f64,
    pub primary_step: f64,
    pub max_attempts: u32,
    pub gradient_lighten: f64,
}

impl RepairPolicy {
    /// The fixed WCAG AA policy.
    pub const WCAG_AA: Self = Self {
        text_threshold: TEXT_MIN_RATIO,
        large_threshold: LARGE_MIN_RATIO,
        text_step: 0.15,
        accent_step: 0.12,
        primary_step: 0.12,
        max_attempts: 10,
        gradient_lighten: 0.35,
    };

    /// Parse a (possibly partial) policy from TOML and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] on malformed TOML, unknown keys or wrong value
    /// types, and [`Error::InvalidPolicy`] if a value is out of range.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let policy: Self = toml::from_str(s)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Read and parse a policy file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, plus everything
    /// [`RepairPolicy::from_toml_str`] can return.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check every field is in range.
    ///
    /// Thresholds must lie in [1, 21] (the range a contrast ratio can
    /// take), step fractions in (0, 1], and the attempt budget must be
    /// non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("text_threshold", self.text_threshold),
            ("large_threshold", self.large_threshold),
        ] {
            if !(1.0..=MAX_RATIO).contains(&value) {
                return Err(Error::InvalidPolicy {
                    field,
                    value,
                    expected: "a contrast ratio in [1, 21]",
                });
            }
        }

        for (field, value) in [
            ("text_step", self.text_step),
            ("accent_step", self.accent_step),
            ("primary_step", self.primary_step),
            ("gradient_lighten", self.gradient_lighten),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::InvalidPolicy {
                    field,
                    value,
                    expected: "a fraction in (0, 1]",
                });
            }
        }

        if self.max_attempts == 0 {
            return Err(Error::InvalidPolicy {
                field: "max_attempts",
                value: 0.0,
                expected: "at least one attempt",
            });
        }

        Ok(())
    }
}

impl Default for RepairPolicy {
    fn default() -> Self {
        Self::WCAG_AA
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
