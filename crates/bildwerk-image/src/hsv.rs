// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// 8-bit HSV conversion for canonical BGR pixels.
//
// Uses the common 8-bit packing: hue in [0, 180) (degrees halved), saturation
// and value in [0, 255].

/// Hue range of the 8-bit packing (degrees / 2).
pub const HUE_RANGE: u16 = 180;

/// An 8-bit hue/saturation/value triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert one BGR pixel to HSV.
pub fn bgr_to_hsv([b, g, r]: [u8; 3]) -> Hsv {
    let v = b.max(g).max(r);
    let min = b.min(g).min(r);
    let diff = f32::from(v - min);

    let s = if v == 0 {
        0
    } else {
        (diff * 255.0 / f32::from(v)).round() as u8
    };

    if diff == 0.0 {
        return Hsv { h: 0, s, v };
    }

    let (b, g, r) = (f32::from(b), f32::from(g), f32::from(r));
    let vf = f32::from(v);
    let mut degrees = if vf == r {
        60.0 * (g - b) / diff
    } else if vf == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if degrees < 0.0 {
        degrees += 360.0;
    }

    let h = ((degrees / 2.0).round() as u16 % HUE_RANGE) as u8;
    Hsv { h, s, v }
}

/// Convert one HSV triple back to a BGR pixel.
pub fn hsv_to_bgr(hsv: Hsv) -> [u8; 3] {
    let v = f32::from(hsv.v) / 255.0;
    if hsv.s == 0 {
        return [hsv.v; 3];
    }
    let s = f32::from(hsv.s) / 255.0;

    // Six 60-degree sectors; hue is stored as degrees / 2.
    let sector_pos = f32::from(hsv.h) * 2.0 / 60.0;
    let sector = sector_pos.floor();
    let f = sector_pos - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [to_byte(b), to_byte(g), to_byte(r)]
}

fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
