//! HUSL (human-friendly HSL) conversions through CIE LUV.
//!
//! Hue is in degrees, saturation and lightness run from 0 to 100, and sRGB
//! channels from 0 to 1. Saturation 100 is the most chroma the sRGB gamut
//! holds at that lightness and hue, so ramps built at fixed lightness stay
//! perceptually even.

/// CIE XYZ to linear sRGB.
const M: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// Linear sRGB to CIE XYZ.
const M_INV: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// D65 white point chromaticity.
const REF_U: f64 = 0.19784;
const REF_V: f64 = 0.46834;

const LAB_E: f64 = 0.008856;
const LAB_K: f64 = 903.3;

const L_MAX: f64 = 99.999_999_9;
const L_MIN: f64 = 0.000_000_01;

pub(crate) type Rgb = [f64; 3];

/// Converts HUSL to sRGB. Channels may fall slightly outside `[0, 1]`.
pub(crate) fn husl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let (lightness, chroma) = if lightness > L_MAX {
        (100.0, 0.0)
    } else if lightness < L_MIN {
        (0.0, 0.0)
    } else {
        (lightness, max_chroma(lightness, hue) / 100.0 * saturation)
    };

    let (sin, cos) = hue.to_radians().sin_cos();
    let xyz = luv_to_xyz(lightness, cos * chroma, sin * chroma);
    M.map(|row| from_linear(dot(row, xyz)))
}

/// Converts sRGB to HUSL as `[hue, saturation, lightness]`.
pub(crate) fn rgb_to_husl(rgb: Rgb) -> [f64; 3] {
    let linear = rgb.map(to_linear);
    let [lightness, u, v] = xyz_to_luv(M_INV.map(|row| dot(row, linear)));

    let chroma = (u.powi(2) + v.powi(2)).sqrt();
    let mut hue = v.atan2(u).to_degrees();
    if hue < 0.0 {
        hue += 360.0;
    }

    if lightness > L_MAX {
        [hue, 0.0, 100.0]
    } else if lightness < L_MIN {
        [hue, 0.0, 0.0]
    } else {
        [hue, chroma / max_chroma(lightness, hue) * 100.0, lightness]
    }
}

/// Largest in-gamut LUV chroma at this lightness and hue.
fn max_chroma(lightness: f64, hue: f64) -> f64 {
    let (sin, cos) = hue.to_radians().sin_cos();
    let sub1 = (lightness + 16.0).powf(3.0) / 1_560_896.0;
    let sub2 = if sub1 > LAB_E { sub1 } else { lightness / LAB_K };

    M.iter()
        .flat_map(|&[m1, m2, m3]| {
            let top = (0.99915 * m1 + 1.05122 * m2 + 1.14460 * m3) * sub2;
            let rbottom = 0.86330 * m3 - 0.17266 * m2;
            let lbottom = 0.12949 * m3 - 0.38848 * m1;
            let bottom = (rbottom * sin + lbottom * cos) * sub2;
            [0.0, 1.0].map(|t| lightness * (top - 1.05122 * t) / (bottom + 0.17266 * sin * t))
        })
        .filter(|&chroma| chroma > 0.0)
        .fold(f64::INFINITY, f64::min)
}

fn luv_to_xyz(lightness: f64, u: f64, v: f64) -> [f64; 3] {
    if lightness == 0.0 {
        return [0.0; 3];
    }
    let y = lab_f_inv((lightness + 16.0) / 116.0);
    let var_u = u / (13.0 * lightness) + REF_U;
    let var_v = v / (13.0 * lightness) + REF_V;

    let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    [x, y, z]
}

/// Returns `[lightness, u, v]`.
fn xyz_to_luv([x, y, z]: [f64; 3]) -> [f64; 3] {
    if x == 0.0 && y == 0.0 && z == 0.0 {
        return [0.0; 3];
    }
    let denom = x + 15.0 * y + 3.0 * z;
    let var_u = 4.0 * x / denom;
    let var_v = 9.0 * y / denom;

    let lightness = 116.0 * lab_f(y) - 16.0;
    if lightness == 0.0 {
        return [0.0; 3];
    }
    [
        lightness,
        13.0 * lightness * (var_u - REF_U),
        13.0 * lightness * (var_v - REF_V),
    ]
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_E {
        t.powf(1.0 / 3.0)
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let cubed = t.powf(3.0);
    if cubed > LAB_E {
        cubed
    } else {
        (116.0 * t - 16.0) / LAB_K
    }
}

fn from_linear(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn to_linear(c: f64) -> f64 {
    if c > 0.040_45 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn dot(row: [f64; 3], v: [f64; 3]) -> f64 {
    row[0] * v[0] + row[1] * v[1] + row[2] * v[2]
}
