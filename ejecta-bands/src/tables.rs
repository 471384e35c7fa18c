/// Band codes in the order they receive plot colors.
pub const BAND_CODES: [&str; 47] = [
    "u", "g", "r", "i", "z", "u'", "g'", "r'", "i'", "z'", "u_SDSS", "g_SDSS", "r_SDSS", "i_SDSS",
    "z_SDSS", "U", "B", "V", "R", "I", "G", "Y", "J", "H", "K", "C", "CR", "CV", "UVM2", "UVW1",
    "UVW2", "pg", "Mp", "w", "y", "Z", "F110W", "F225W", "F775W", "F850LP", "VM", "RM", "Ks",
    "NUV", "FUV", "BL", "VL",
];

/// Spellings that refer to the same band.
const BAND_REPS: [(&str, &[&str]); 4] = [
    ("Ks", &["K_s"]),
    ("UVM2", &["uvm2", "UVM2", "UVm2", "Um2", "um2", "M2"]),
    ("UVW1", &["uvw1", "UVW1", "UVw1", "Uw1", "uw1", "W1"]),
    ("UVW2", &["uvw2", "UVW2", "UVw2", "Uw2", "uw2", "W2"]),
];

const SDSS_ALIASES: [(&str, &str); 5] = [
    ("u_SDSS", "u'"),
    ("g_SDSS", "g'"),
    ("r_SDSS", "r'"),
    ("i_SDSS", "i'"),
    ("z_SDSS", "z'"),
];

const BAND_GROUPS: [(&str, &[&str]); 5] = [
    ("SDSS", &["u'", "g'", "r'", "i'", "z'"]),
    ("UVOT", &["UVW2", "UVM2", "UVW1"]),
    ("HST", &["F110W", "F225W", "F775W", "F850LP"]),
    ("Johnson", &["U", "B", "V", "R", "I", "Y", "J", "H", "K"]),
    ("GALEX", &["NUV", "FUV"]),
];

/// Effective wavelengths, in nm.
const BAND_WAVELENGTHS: [(&str, f64); 25] = [
    ("u", 354.0),
    ("g", 475.0),
    ("r", 622.0),
    ("i", 763.0),
    ("z", 905.0),
    ("y", 963.0),
    ("u'", 354.0),
    ("g'", 475.0),
    ("r'", 622.0),
    ("i'", 763.0),
    ("z'", 905.0),
    ("U", 365.0),
    ("B", 445.0),
    ("V", 551.0),
    ("R", 658.0),
    ("I", 806.0),
    ("Y", 1020.0),
    ("J", 1220.0),
    ("H", 1630.0),
    ("K", 2190.0),
    ("UVM2", 260.0),
    ("UVW1", 224.6),
    ("UVW2", 192.8),
    ("FUV", 152.8),
    ("NUV", 227.1),
];

/// Telescope and instrument for bands tied to one facility.
const BAND_META: [(&str, &str, &str); 7] = [
    ("UVM2", "Swift", "UVOT"),
    ("UVW1", "Swift", "UVOT"),
    ("UVW2", "Swift", "UVOT"),
    ("F110W", "Hubble", "WFC3"),
    ("F225W", "HST", "UVIS"),
    ("F775W", "Hubble", "WFC3"),
    ("F850LP", "Hubble", "WFC3"),
];

/// Magnitude offsets that keep stacked light curves apart.
const BAND_OFFSETS: [(&str, f64); 23] = [
    ("u", 1.4),
    ("g", -0.9),
    ("i", 1.0),
    ("z", 1.7),
    ("u'", 1.4),
    ("g'", -0.9),
    ("i'", 1.0),
    ("z'", 1.7),
    ("u_SDSS", 1.4),
    ("g_SDSS", -0.9),
    ("i_SDSS", 1.0),
    ("z_SDSS", 1.7),
    ("U", 0.4),
    ("B", 2.1),
    ("V", 2.8),
    ("UVM2", -2.0),
    ("UVW1", -3.0),
    ("UVW2", -1.0),
    ("F225W", -0.9),
    ("NUV", -2.5),
    ("FUV", -1.5),
    ("BL", 1.5),
    ("VL", 1.2),
];

/// Band metadata fields available through [`band_meta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Telescope,
    Instrument,
}

fn lookup<T: Copy>(table: &[(&str, T)], code: &str) -> Option<T> {
    table.iter().find(|(key, _)| *key == code).map(|(_, v)| *v)
}

/// Returns the canonical name for a band spelling.
#[must_use]
pub fn band_rep(code: &str) -> &str {
    BAND_REPS
        .iter()
        .find(|(_, spellings)| spellings.contains(&code))
        .map_or(code, |&(rep, _)| rep)
}

/// Returns the preferred display name for a band.
#[must_use]
pub fn band_alias(code: &str) -> &str {
    let rep = band_rep(code);
    lookup(&SDSS_ALIASES, rep).unwrap_or(rep)
}

/// Returns the short display name for a band.
#[must_use]
pub fn band_short_alias(code: &str) -> &str {
    band_alias(code)
}

/// Returns the instrument group of a band, or `""`.
#[must_use]
pub fn band_group(code: &str) -> &'static str {
    let rep = band_rep(code);
    BAND_GROUPS
        .iter()
        .find(|(_, members)| members.contains(&rep))
        .map_or("", |&(group, _)| group)
}

/// Returns the effective wavelength of a band in nm, or `0.0` if unknown.
#[must_use]
pub fn band_wavelength(code: &str) -> f64 {
    lookup(&BAND_WAVELENGTHS, band_rep(code)).unwrap_or(0.0)
}

/// Returns facility metadata for a band, or `""`.
///
/// Unlike the other lookups, `band` is matched as given, without resolving
/// alternate spellings.
#[must_use]
pub fn band_meta(band: &str, field: MetaField) -> &'static str {
    BAND_META
        .iter()
        .find(|(key, _, _)| *key == band)
        .map_or("", |&(_, telescope, instrument)| match field {
            MetaField::Telescope => telescope,
            MetaField::Instrument => instrument,
        })
}

/// Returns the plot offset for a band, or `0.0`.
#[must_use]
pub fn band_offset(code: &str) -> f64 {
    lookup(&BAND_OFFSETS, band_rep(code)).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_spellings_resolve() {
        assert_eq!(band_rep("K_s"), "Ks");
        assert_eq!(band_rep("um2"), "UVM2");
        assert_eq!(band_rep("W1"), "UVW1");
        assert_eq!(band_rep("Uw2"), "UVW2");
        assert_eq!(band_rep("V"), "V");
        assert_eq!(band_rep("not-a-band"), "not-a-band");
    }

    #[test]
    fn sdss_bands_use_primed_names() {
        assert_eq!(band_alias("r_SDSS"), "r'");
        assert_eq!(band_short_alias("z_SDSS"), "z'");
        assert_eq!(band_alias("uvw1"), "UVW1");
    }

    #[test]
    fn groups_follow_canonical_names() {
        assert_eq!(band_group("g'"), "SDSS");
        assert_eq!(band_group("M2"), "UVOT");
        assert_eq!(band_group("F850LP"), "HST");
        assert_eq!(band_group("K"), "Johnson");
        assert_eq!(band_group("FUV"), "GALEX");
        assert_eq!(band_group("Ks"), "");
    }

    #[test]
    fn wavelengths_in_nanometers() {
        assert_eq!(band_wavelength("V"), 551.0);
        assert_eq!(band_wavelength("uw1"), 224.6);
        assert_eq!(band_wavelength("F110W"), 0.0);
    }

    #[test]
    fn meta_is_matched_verbatim() {
        assert_eq!(band_meta("UVW2", MetaField::Telescope), "Swift");
        assert_eq!(band_meta("F225W", MetaField::Instrument), "UVIS");
        assert_eq!(band_meta("uvw2", MetaField::Telescope), "");
    }

    #[test]
    fn offsets_default_to_zero() {
        assert_eq!(band_offset("B"), 2.1);
        assert_eq!(band_offset("W1"), -3.0);
        assert_eq!(band_offset("g_SDSS"), -0.9);
        assert_eq!(band_offset("r"), 0.0);
        assert_eq!(band_offset("unknown"), 0.0);
    }

    #[test]
    fn band_codes_are_unique() {
        for (i, code) in BAND_CODES.iter().enumerate() {
            assert!(!BAND_CODES[i + 1..].contains(code), "{code} repeats");
        }
    }
}
