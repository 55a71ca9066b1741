// Copyright (C) 2024-2026 The Style Expr Authors.
// This file is part of the style-expr library.

// The style-expr library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The style-expr library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the style-expr library. If not, see <https://www.gnu.org/licenses/>.

//! Color interpolation (§4.5.1): channels are blended in cylindrical CIELAB
//! (HCL - hue, chroma, luminance), which keeps blends between saturated,
//! dissimilar hues from muddying through gray the way a straight L*a*b*
//! blend does. Alpha is blended directly and kept as a float.

const D65_X: f64 = 0.95047;
const D65_Y: f64 = 1.0;
const D65_Z: f64 = 1.08883;

fn srgb_to_linear(c: f64) -> f64 {
    let c = c / 255.0;
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

fn linear_to_srgb(c: f64) -> f64 {
    let v = if c <= 0.0031308 { c * 12.92 } else { 1.055 * c.powf(1.0 / 2.4) - 0.055 };
    v * 255.0
}

fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA.powi(3) { t.cbrt() } else { t / (3.0 * DELTA * DELTA) + 4.0 / 29.0 }
}

fn lab_f_inv(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA { t.powi(3) } else { 3.0 * DELTA * DELTA * (t - 4.0 / 29.0) }
}

fn rgb_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(srgb_to_linear);

    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / D65_X);
    let fy = lab_f(y / D65_Y);
    let fz = lab_f(z / D65_Z);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

fn lab_to_rgb(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let x = lab_f_inv(fx) * D65_X;
    let y = lab_f_inv(fy) * D65_Y;
    let z = lab_f_inv(fz) * D65_Z;

    let r_lin = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g_lin = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b_lin = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

    [linear_to_srgb(r_lin), linear_to_srgb(g_lin), linear_to_srgb(b_lin)]
}

fn rgb_to_lch(rgb: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = rgb_to_lab(rgb);
    let c = a.hypot(b);
    let h = b.atan2(a).to_degrees();
    [l, c, h]
}

fn lch_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let h = h.to_radians();
    lab_to_rgb([l, c * h.cos(), c * h.sin()])
}

/// Interpolates the hue angle `from` -> `to` along the shorter way around
/// the circle, per cylindrical (HCL/LCh) color interpolation.
fn lerp_hue(from: f64, to: f64, t: f64) -> f64 {
    let mut delta = (to - from) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    from + t * delta
}

/// Blends two `(r,g,b,a)` colors at weight `t` (0 = `from`, 1 = `to`). RGB
/// channels are rounded to integers after the HCL round-trip; alpha is a
/// plain linear blend kept as a float.
pub fn blend(from: [f64; 4], to: [f64; 4], t: f64) -> [f64; 4] {
    let lch_from = rgb_to_lch([from[0], from[1], from[2]]);
    let lch_to = rgb_to_lch([to[0], to[1], to[2]]);

    let lch = [
        lch_from[0] + t * (lch_to[0] - lch_from[0]),
        lch_from[1] + t * (lch_to[1] - lch_from[1]),
        lerp_hue(lch_from[2], lch_to[2], t),
    ];
    let rgb = lch_to_rgb(lch);
    let alpha = from[3] + t * (to[3] - from[3]);

    [rgb[0].round().clamp(0.0, 255.0), rgb[1].round().clamp(0.0, 255.0), rgb[2].round().clamp(0.0, 255.0), alpha]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_blend_returns_the_same_color() {
        let red = [255.0, 0.0, 0.0, 1.0];
        assert_eq!(blend(red, red, 0.5), red);
    }

    #[test]
    fn endpoints_are_exact() {
        let red = [255.0, 0.0, 0.0, 1.0];
        let green = [0.0, 255.0, 0.0, 1.0];
        assert_eq!(blend(red, green, 0.0), red);
        assert_eq!(blend(red, green, 1.0), green);
    }

    #[test]
    fn midpoint_alpha_is_a_plain_linear_blend() {
        let from = [0.0, 0.0, 0.0, 0.0];
        let to = [0.0, 0.0, 0.0, 1.0];
        let blended = blend(from, to, 0.25);
        assert!((blended[3] - 0.25).abs() < 1e-9);
    }
}
