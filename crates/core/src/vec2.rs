//! Vector helpers shared by the simulation core.
//!
//! The core uses [`glam::DVec2`] as its 2D value type (componentwise
//! add/sub, scalar mul/div, `dot`, `length`). This module adds the one
//! operation glam does not offer in guarded form: [`safe_normalize`],
//! which returns `None` instead of a non-finite vector when the input has
//! zero norm. Every normalization in the crate goes through it.

use glam::DVec2;

/// Normalizes `v`, returning `None` when its norm is zero.
///
/// The zero vector has no direction; callers branch on `None` instead of
/// repeating `length() != 0` checks at each use site.
pub fn safe_normalize(v: DVec2) -> Option<DVec2> {
    let norm = v.length();
    if norm == 0.0 {
        None
    } else {
        Some(v / norm)
    }
}

/// Bearing of `v` in radians: `atan2(y, x)`.
pub fn angle_of(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Unit vector at `angle` radians.
pub fn unit_from_angle(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_normalize_zero_vector_is_none() {
        assert!(safe_normalize(DVec2::ZERO).is_none());
    }

    #[test]
    fn safe_normalize_returns_unit_vector() {
        let unit = safe_normalize(DVec2::new(3.0, 4.0)).unwrap();
        assert!((unit.length() - 1.0).abs() < 1e-12, "norm = {}", unit.length());
        assert!((unit.x - 0.6).abs() < 1e-12);
        assert!((unit.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn angle_of_cardinal_directions() {
        assert!((angle_of(DVec2::X) - 0.0).abs() < 1e-12);
        assert!((angle_of(DVec2::Y) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((angle_of(-DVec2::X).abs() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn unit_from_angle_round_trips_through_angle_of() {
        for i in -8..=8 {
            let angle = i as f64 * 0.35;
            let expected = f64::atan2(angle.sin(), angle.cos());
            let got = angle_of(unit_from_angle(angle));
            assert!(
                (got - expected).abs() < 1e-12,
                "angle {angle}: got {got}, expected {expected}"
            );
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_coord() -> impl Strategy<Value = f64> {
            prop::num::f64::NORMAL
                .prop_filter("finite", |v| v.is_finite())
                .prop_map(|v| v.clamp(-1e6, 1e6))
        }

        proptest! {
            #[test]
            fn safe_normalize_output_is_unit_or_none(x in any_coord(), y in any_coord()) {
                let v = DVec2::new(x, y);
                match safe_normalize(v) {
                    Some(unit) => prop_assert!(
                        (unit.length() - 1.0).abs() < 1e-9,
                        "norm of normalized ({x}, {y}) = {}", unit.length()
                    ),
                    None => prop_assert!(v.length() == 0.0),
                }
            }

            #[test]
            fn unit_from_angle_is_always_unit(angle in -10.0_f64..10.0) {
                let v = unit_from_angle(angle);
                prop_assert!((v.length() - 1.0).abs() < 1e-12);
            }
        }
    }
}
