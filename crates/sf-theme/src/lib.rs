//! # sf-theme — Storefront Palette Engine
//!
//! Takes a four-color storefront palette suggested upstream (an LLM, a
//! vision model, or a builtin preset), checks it against WCAG contrast
//! thresholds, repairs whatever fails, and derives the decorative
//! gradient pair the renderer paints hero sections with.
//!
//! # Architecture
//!
//! ```text
//! Palette { primary, accent, background, text }  +  is_dark
//!     │
//!     ▼
//! palette.rs:  validate the three foreground/background pairs
//!     │
//!     ▼
//! repair.rs:   darken (light theme) or lighten (dark theme) failing roles
//!     │
//!     ▼
//! gradient.rs: primary → lightened primary
//!     │
//!     ▼
//! pipeline.rs: ThemedPalette { palette, gradient, contrastValidated }
//! ```
//!
//! # Failure model
//!
//! Nothing in the color path returns an error. Malformed colors score a
//! contrast of 1:1 and pass through lighten/darken unchanged; a role that
//! cannot reach its threshold within the attempt budget keeps its best
//! effort. Only loading external input (policy files, palette JSON)
//! is fallible, through [`Error`].

pub mod contrast;
pub mod error;
pub mod gradient;
pub mod palette;
pub mod pipeline;
pub mod policy;
pub mod repair;
pub mod template;

pub use contrast::{contrast_ratio, contrast_ratio_rgb};
pub use error::{Error, Result};
pub use gradient::{Gradient, generate_gradient, gradient_with};
pub use palette::{Palette, Role, Roles, ValidationReport, validate_palette, validate_with};
pub use pipeline::{ThemedPalette, finalize, finalize_preset, finalize_with};
pub use policy::RepairPolicy;
pub use repair::{
    Repair, RepairOutcome, RoleOutcome, ThemeMode, adjust_for_contrast, adjust_for_dark_theme,
    adjust_for_theme, repair,
};
pub use template::TemplateKind;
