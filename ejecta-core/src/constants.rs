//! Physical constants in CGS units.

use std::f64::consts::PI;

/// Speed of light (cm/s).
pub const C_CGS: f64 = 29_979_245_800.0;

/// Seconds per day.
pub const DAY_CGS: f64 = 86_400.0;

/// Centimeters per kilometer.
pub const KM_CGS: f64 = 1.0e5;

/// Solar mass (g), IAU 2015 nominal value.
pub const M_SUN_CGS: f64 = 1.988_409_870_698_051e33;

/// Solid angle of a full sphere.
pub const FOUR_PI: f64 = 4.0 * PI;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn light_day_in_kilometers() {
        // One light-day is roughly 2.59e10 km.
        assert_relative_eq!(C_CGS * DAY_CGS / KM_CGS, 2.590_206_837_12e10, max_relative = 1e-12);
    }

    #[test]
    fn four_pi_is_sphere_solid_angle() {
        assert_relative_eq!(FOUR_PI, 12.566_370_614_359_172);
    }
}
