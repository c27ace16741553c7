//! Property-based invariants of the palette engine.
//!
//! These hold for **any** six-digit hex input:
//!
//! 1. Luminance bounds — relative luminance stays in [0, 1]
//! 2. Contrast symmetry — argument order never matters
//! 3. Contrast identity — a color against itself is exactly 1:1
//! 4. Contrast range — every ratio lies in [1, 21]
//! 5. Validation purity — validating twice gives the same report
//! 6. Background passthrough — repair never touches the background
//! 7. Role independence — passing roles survive repair byte-for-byte
//! 8. Budget — no role takes more attempts than the policy allows
//! 9. Direction — light repair never brightens, dark repair never darkens
//! 10. Gradient — `gradientTo` is lighter unless every channel is at 254+

use proptest::prelude::*;
use sf_color::{Rgb, darken_hex, lighten_hex, relative_luminance};
use sf_theme::{
    Palette, RepairPolicy, Role, ThemeMode, contrast_ratio, generate_gradient, repair,
    validate_palette,
};

// ── Strategies ──────────────────────────────────────────────────────────────

fn rgb() -> impl Strategy<Value = Rgb> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn hex() -> impl Strategy<Value = String> {
    rgb().prop_map(Rgb::to_hex)
}

fn palette() -> impl Strategy<Value = Palette> {
    (hex(), hex(), hex(), hex()).prop_map(|(p, a, bg, t)| Palette::new(p, a, bg, t))
}

fn mode() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Light), Just(ThemeMode::Dark)]
}

// ── Color math ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn luminance_in_unit_interval(r: u8, g: u8, b: u8) {
        let l = relative_luminance(r, g, b);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&l), "L = {l}");
    }

    #[test]
    fn contrast_is_symmetric(a in hex(), b in hex()) {
        prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn contrast_with_self_is_one(a in hex()) {
        prop_assert!((contrast_ratio(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn contrast_in_wcag_range(a in hex(), b in hex()) {
        let ratio = contrast_ratio(&a, &b);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio = {ratio}");
    }

    #[test]
    fn darken_never_brightens(c in rgb(), amount in 0.0f64..=1.0) {
        let hex = c.to_hex();
        let out = Rgb::from_hex(&darken_hex(&hex, amount)).unwrap();
        prop_assert!(out.r <= c.r && out.g <= c.g && out.b <= c.b);
    }

    #[test]
    fn lighten_never_darkens(c in rgb(), amount in 0.0f64..=1.0) {
        let hex = c.to_hex();
        let out = Rgb::from_hex(&lighten_hex(&hex, amount)).unwrap();
        prop_assert!(out.r >= c.r && out.g >= c.g && out.b >= c.b);
    }
}

// ── Validation & repair ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn validation_is_pure(p in palette()) {
        prop_assert_eq!(validate_palette(&p), validate_palette(&p));
    }

    #[test]
    fn repair_keeps_background(p in palette(), mode in mode()) {
        let r = repair(&p, mode, &RepairPolicy::default());
        prop_assert_eq!(&r.palette.background_color, &p.background_color);
    }

    #[test]
    fn repair_leaves_passing_roles_alone(p in palette(), mode in mode()) {
        let before = validate_palette(&p);
        let r = repair(&p, mode, &RepairPolicy::default());
        for role in Role::ALL {
            if before.passes(role) {
                prop_assert_eq!(r.palette.color(role), p.color(role), "{}", role);
                prop_assert_eq!(r.outcome.role(role).attempts, 0);
            }
        }
    }

    #[test]
    fn repair_respects_budget(p in palette(), mode in mode(), budget in 1u32..=12) {
        let policy = RepairPolicy { max_attempts: budget, ..RepairPolicy::default() };
        let r = repair(&p, mode, &policy);
        for role in Role::ALL {
            prop_assert!(r.outcome.role(role).attempts <= budget);
        }
    }

    #[test]
    fn repair_outcome_matches_revalidation(p in palette(), mode in mode()) {
        let r = repair(&p, mode, &RepairPolicy::default());
        let after = validate_palette(&r.palette);
        for role in Role::ALL {
            prop_assert_eq!(r.outcome.role(role).succeeded, after.passes(role), "{}", role);
        }
    }

    #[test]
    fn repair_moves_in_theme_direction(p in palette(), mode in mode()) {
        let r = repair(&p, mode, &RepairPolicy::default());
        for role in Role::ALL {
            let before = Rgb::from_hex(p.color(role)).unwrap().luminance();
            let after = Rgb::from_hex(r.palette.color(role)).unwrap().luminance();
            match mode {
                ThemeMode::Light => prop_assert!(after <= before),
                ThemeMode::Dark => prop_assert!(after >= before),
            }
        }
    }
}

// ── Gradient ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn gradient_starts_at_primary(p in hex()) {
        prop_assert_eq!(generate_gradient(&p).gradient_from, p);
    }

    #[test]
    fn gradient_end_is_lighter(c in rgb()) {
        // A channel within 1 of 255 moves by less than half a step and
        // rounds back to itself.
        prop_assume!(c.r <= 253 || c.g <= 253 || c.b <= 253);
        let g = generate_gradient(&c.to_hex());
        let to = Rgb::from_hex(&g.gradient_to).unwrap();
        prop_assert!(to.luminance() > c.luminance(), "{} -> {}", c, to);
    }
}
