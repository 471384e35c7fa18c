use std::f64::consts::PI;

use crate::husl::{Rgb, husl_to_rgb, rgb_to_husl};

/// Entries in a blended colormap lookup table.
const LUT_SIZE: usize = 256;

/// Colors generated on each side of a diverging map's center.
const DIVERGING_HALF: usize = 128;

const DARK_CENTER: Rgb = [0.133; 3];

/// A cubehelix ramp (Green 2011) in the parameterization palettable uses.
///
/// Brightness runs across `lightness` while the hue rotates `rotation` turns
/// from the `start` color (0 blue, 1 red, 2 green). Saturation is blended
/// linearly across `saturation`, and `gamma` weights brightness toward the
/// dark or light end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubehelix {
    pub start: f64,
    pub rotation: f64,
    pub gamma: f64,
    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
}

impl Cubehelix {
    /// Black to white at saturation 1.2.
    #[must_use]
    pub const fn new(start: f64, rotation: f64) -> Self {
        Self {
            start,
            rotation,
            gamma: 1.0,
            saturation: (1.2, 1.2),
            lightness: (0.0, 1.0),
        }
    }

    /// Builds a ramp from its first and last hue in degrees.
    #[must_use]
    pub const fn from_hues(start_hue: f64, end_hue: f64) -> Self {
        let start = (start_hue / 360.0 - 1.0) * 3.0;
        Self::new(start, end_hue / 360.0 - start / 3.0 - 1.0)
    }

    #[must_use]
    pub const fn with_gamma(self, gamma: f64) -> Self {
        Self { gamma, ..self }
    }

    #[must_use]
    pub const fn with_saturation(self, min: f64, max: f64) -> Self {
        Self {
            saturation: (min, max),
            ..self
        }
    }

    #[must_use]
    pub const fn with_lightness(self, min: f64, max: f64) -> Self {
        Self {
            lightness: (min, max),
            ..self
        }
    }

    /// Generates `n` colors along the ramp as `#RRGGBB`.
    #[must_use]
    pub fn colors(&self, n: usize) -> Vec<String> {
        let (min_light, max_light) = self.lightness;
        let (min_sat, max_sat) = self.saturation;

        linspace(min_light, max_light, n)
            .zip(linspace(min_sat, max_sat, n))
            .map(|(fraction, saturation)| {
                let phi = 2.0 * PI * (self.start / 3.0 + 1.0 + self.rotation * fraction);
                let lightness = fraction.powf(self.gamma);
                let amp = saturation * lightness * (1.0 - lightness) / 2.0;
                let (sin, cos) = phi.sin_cos();

                let r = lightness + amp * (-0.14861 * cos + 1.78277 * sin);
                let g = lightness + amp * (-0.29227 * cos - 0.90649 * sin);
                let b = lightness + amp * (1.97294 * cos);
                let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
                format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b))
            })
            .collect()
    }
}

/// A lookup table blended linearly between evenly spaced colors.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Colormap {
    lut: Vec<Rgb>,
}

impl Colormap {
    /// Blends `colors` into a table, the first at 0 and the last at 1.
    pub(crate) fn blend(colors: &[Rgb]) -> Self {
        let (first, last) = match colors {
            [] => return Self { lut: vec![[0.0; 3]; LUT_SIZE] },
            [only] => return Self { lut: vec![*only; LUT_SIZE] },
            [first, .., last] => (*first, *last),
        };

        let top = (LUT_SIZE - 1) as f64;
        let nodes: Vec<f64> = linspace(0.0, 1.0, colors.len()).map(|x| x * top).collect();

        let lut = linspace(0.0, 1.0, LUT_SIZE)
            .enumerate()
            .map(|(i, x)| {
                if i == 0 {
                    return first;
                }
                if i == LUT_SIZE - 1 {
                    return last;
                }
                let x = top * x;
                let hi = nodes.partition_point(|&node| node < x);
                let lo = hi - 1;
                let distance = (x - nodes[lo]) / (nodes[hi] - nodes[lo]);
                std::array::from_fn(|c| {
                    (distance * (colors[hi][c] - colors[lo][c]) + colors[lo][c]).clamp(0.0, 1.0)
                })
            })
            .collect();

        Self { lut }
    }

    /// Blends two ramps from dark gray out to light HUSL colors at
    /// `h_neg` and `h_pos`, meeting at a dark center.
    pub(crate) fn diverging_dark(h_neg: f64, h_pos: f64, saturation: f64, lightness: f64) -> Self {
        let mut colors = dark_ramp([h_neg, saturation, lightness], DIVERGING_HALF, true);
        colors.push(DARK_CENTER);
        colors.extend(dark_ramp([h_pos, saturation, lightness], DIVERGING_HALF, false));
        Self::blend(&colors)
    }

    /// Looks up `x` in `[0, 1]`; values outside clamp to the ends and NaN
    /// has no color.
    pub(crate) fn sample(&self, x: f64) -> Option<Rgb> {
        if x.is_nan() {
            return None;
        }
        let len = self.lut.len();
        let scaled = x * len as f64;
        let index = if scaled < 0.0 {
            0
        } else if scaled >= len as f64 {
            len - 1
        } else {
            scaled as usize
        };
        Some(self.lut[index])
    }

    fn resample(&self, n: usize) -> Vec<Rgb> {
        linspace(0.0, 1.0, n).filter_map(|x| self.sample(x)).collect()
    }
}

/// Ramps from a dark, desaturated gray of the same hue to `husl`.
fn dark_ramp([hue, saturation, lightness]: [f64; 3], n: usize, reverse: bool) -> Vec<Rgb> {
    let color = clip(husl_to_rgb(hue, saturation, lightness));
    let [hue, saturation, _] = rgb_to_husl(color);
    let gray = clip(husl_to_rgb(hue, 0.15 * saturation, 15.0));

    let ends = if reverse { [color, gray] } else { [gray, color] };
    Colormap::blend(&ends).resample(n)
}

fn clip(rgb: Rgb) -> Rgb {
    rgb.map(|c| c.clamp(0.0, 1.0))
}

/// Formats as lowercase `#rrggbb`, rounding halves to even.
pub(crate) fn rgb_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb.map(|c| (c * 255.0).round_ties_even() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// `n` evenly spaced values with `stop` exact.
fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (stop - start) / n.saturating_sub(1).max(1) as f64;
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            stop
        } else {
            i as f64 * step + start
        }
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn classic_ramp_runs_black_to_white() {
        let colors = Cubehelix::new(0.5, -1.5).colors(16);

        assert_eq!(colors.len(), 16);
        assert_eq!(colors[0], "#000000");
        assert_eq!(colors[15], "#FFFFFF");
    }

    #[test]
    fn hues_convert_to_start_and_rotation() {
        let ramp = Cubehelix::from_hues(240.0, -300.0);

        assert_relative_eq!(ramp.start, -1.0, epsilon = 1e-12);
        assert_relative_eq!(ramp.rotation, -1.5, epsilon = 1e-12);
    }

    #[test]
    fn perceptual_rainbow_matches_reference() {
        let colors = Cubehelix::from_hues(240.0, -300.0)
            .with_gamma(0.9)
            .with_saturation(1.0, 2.5)
            .with_lightness(0.3, 0.8)
            .colors(16);

        assert_eq!(colors[0], "#873B62");
        assert_eq!(colors[7], "#45AAD7");
        assert_eq!(colors[15], "#E9D575");
    }

    #[test]
    fn colors_are_hex_triplets() {
        for color in Cubehelix::new(2.0, 1.0).with_gamma(0.8).colors(7) {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn single_color_ramp_is_black() {
        assert_eq!(Cubehelix::new(0.5, -1.5).colors(1), vec!["#000000"]);
    }

    #[test]
    fn blended_map_interpolates_and_clamps() {
        let map = Colormap::blend(&[[0.0; 3], [1.0, 0.5, 0.25]]);

        assert_eq!(map.sample(0.0), Some([0.0; 3]));
        assert_eq!(map.sample(-3.0), Some([0.0; 3]));
        assert_eq!(map.sample(1.0), Some([1.0, 0.5, 0.25]));
        assert_eq!(map.sample(7.0), Some([1.0, 0.5, 0.25]));
        assert_eq!(map.sample(f64::NAN), None);

        let mid = map.sample(0.5).unwrap();
        assert_relative_eq!(mid[0], 128.0 / 255.0, max_relative = 1e-12);
        assert_relative_eq!(mid[2], 32.0 / 255.0, max_relative = 1e-12);
    }

    #[test]
    fn diverging_map_is_dark_in_the_middle() {
        let map = Colormap::diverging_dark(200.0, 60.0, 75.0, 80.0);

        assert_eq!(rgb_hex(map.sample(0.0).unwrap()), "#6bd6de");
        assert_eq!(rgb_hex(map.sample(1.0).unwrap()), "#edc063");
        let center = map.sample(0.5).unwrap();
        assert!(center.iter().all(|&c| c < 0.2), "{center:?}");
    }

    #[test]
    fn hex_rounds_halves_to_even() {
        assert_eq!(rgb_hex([0.5, 1.0, 0.0]), "#80ff00");
    }
}
