use std::{collections::HashMap, sync::LazyLock};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    palette::{Colormap, Cubehelix, rgb_hex},
    tables::{BAND_CODES, band_rep},
};

/// Seed for palette shuffles; fixed so color assignments are stable across runs.
const PALETTE_SEED: u64 = 101;

/// Frequencies in GHz mapped onto the ends of the radio colormap.
const RADIO_FREQ_RANGE: (f64, f64) = (1.0, 45.0);

/// Color for a frequency that has no place on the radio colormap.
const NO_FREQUENCY: &str = "#000000";

const XRAY_CODES: [&str; 2] = ["0.3 - 10", "0.5 - 8"];

/// Wes Anderson "Zissou" palette.
const ZISSOU: [&str; 5] = ["#3B9AB2", "#78B7C5", "#EBCC2A", "#E1AF00", "#F21A00"];

/// ColorBrewer sequential "Oranges", light to dark.
const ORANGES: [&str; 9] = [
    "#FFF5EB", "#FEE6CE", "#FDD0A2", "#FDAE6B", "#FD8D3C", "#F16913", "#D94801", "#A63603",
    "#7F2704",
];

/// palettable `cubehelix1_16`.
const CUBEHELIX_1: Cubehelix = Cubehelix::new(0.5, -1.5);

/// palettable `cubehelix2_16`.
const CUBEHELIX_2: Cubehelix = Cubehelix::new(2.0, -1.0);

/// palettable `cubehelix3_16`.
const CUBEHELIX_3: Cubehelix = Cubehelix::new(2.0, 1.0);

/// palettable `perceptual_rainbow_16`.
const PERCEPTUAL_RAINBOW: Cubehelix = Cubehelix::from_hues(240.0, -300.0)
    .with_gamma(0.9)
    .with_saturation(1.0, 2.5)
    .with_lightness(0.3, 0.8);

struct Palettes {
    band: HashMap<&'static str, String>,
    xray: HashMap<&'static str, String>,
}

static PALETTES: LazyLock<Palettes> = LazyLock::new(Palettes::build);

/// Light cyan through a dark center to light amber.
static RADIO_MAP: LazyLock<Colormap> =
    LazyLock::new(|| Colormap::diverging_dark(200.0, 60.0, 75.0, 80.0));

impl Palettes {
    /// Shuffles every palette from one seeded stream, in a fixed order.
    fn build() -> Self {
        let mut rng = StdRng::seed_from_u64(PALETTE_SEED);

        // Trim the near-black and near-white ends of each ramp.
        let mut dark: Vec<String> = [CUBEHELIX_1, CUBEHELIX_2, CUBEHELIX_3]
            .iter()
            .flat_map(|ramp| ramp.colors(16).into_iter().skip(2).take(11))
            .collect();
        dark.shuffle(&mut rng);

        let mut rainbow = PERCEPTUAL_RAINBOW.colors(16);
        rainbow.shuffle(&mut rng);

        // Unused, but its draws come before the X-ray shuffle.
        let mut radio = ZISSOU;
        radio.shuffle(&mut rng);

        let mut xray: Vec<String> = ORANGES[2..].iter().map(|&c| c.to_owned()).collect();
        xray.shuffle(&mut rng);

        Self {
            band: BAND_CODES.into_iter().zip(dark.into_iter().chain(rainbow)).collect(),
            xray: XRAY_CODES.into_iter().zip(xray).collect(),
        }
    }
}

fn color_or_black(map: &'static HashMap<&'static str, String>, code: &str) -> &'static str {
    map.get(code).map_or("black", String::as_str)
}

/// Returns the plot color for a band, or `"black"`.
#[must_use]
pub fn band_color(code: &str) -> &'static str {
    color_or_black(&PALETTES.band, band_rep(code))
}

/// Returns the plot color for a radio frequency in GHz as `#rrggbb`.
///
/// Frequencies from 1 to 45 GHz run from light cyan through a dark center to
/// light amber; frequencies outside that range take the nearest end. NaN is
/// `"#000000"`.
#[must_use]
pub fn radio_color(freq: f64) -> String {
    let (low, high) = RADIO_FREQ_RANGE;
    RADIO_MAP
        .sample((freq - low) / (high - low))
        .map_or_else(|| NO_FREQUENCY.to_owned(), rgb_hex)
}

/// Returns the plot color for an X-ray energy range code, or `"black"`.
#[must_use]
pub fn xray_color(code: &str) -> &'static str {
    color_or_black(&PALETTES.xray, code)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_band_code_has_a_color() {
        for code in BAND_CODES {
            assert_ne!(band_color(code), "black", "{code} has no color");
        }
    }

    #[test]
    fn spellings_share_a_color() {
        assert_eq!(band_color("uvm2"), band_color("UVM2"));
        assert_eq!(band_color("K_s"), band_color("Ks"));
    }

    #[test]
    fn unknown_codes_are_black() {
        assert_eq!(band_color("nope"), "black");
        assert_eq!(xray_color("2 - 10"), "black");
    }

    #[test]
    fn colors_come_from_their_palettes() {
        assert!(ORANGES[2..].contains(&xray_color("0.3 - 10")));
        assert!(ORANGES[2..].contains(&xray_color("0.5 - 8")));
        assert_ne!(xray_color("0.3 - 10"), xray_color("0.5 - 8"));
    }

    #[test]
    fn radio_frequencies_map_onto_the_diverging_ramp() {
        assert_eq!(radio_color(5.9), "#5bb0b6");
        assert_eq!(radio_color(30.0), "#655637");
        assert_eq!(radio_color(1.4), "#6ad4db");
    }

    #[test]
    fn radio_frequencies_outside_the_range_take_the_ends() {
        assert_eq!(radio_color(0.0), radio_color(1.0));
        assert_eq!(radio_color(1.0), "#6bd6de");
        assert_eq!(radio_color(45.0), "#edc063");
        assert_eq!(radio_color(100.0), "#edc063");
        assert_eq!(radio_color(f64::NAN), "#000000");
    }

    #[test]
    fn assignments_are_reproducible() {
        let rebuilt = Palettes::build();

        for code in BAND_CODES {
            assert_eq!(rebuilt.band[code], band_color(code));
        }
        let distinct: HashSet<_> = rebuilt.xray.values().collect();
        assert_eq!(distinct.len(), XRAY_CODES.len());
    }
}
