// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the bildwerk-image transform engine. Each transform
// runs on a synthetic 640x480 canonical buffer, roughly one webcam frame.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bildwerk_core::{BrightnessDelta, Channel, CircleSpec, PixelBuffer, Region};
use bildwerk_image::{adjust_brightness, crop, draw_circle, extract_channel, to_display};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Build a 640x480 BGR buffer with a diagonal colour gradient so the HSV
/// conversion sees varied hues rather than a flat fill.
fn synthetic_frame() -> PixelBuffer {
    let (width, height) = (640u32, 480u32);
    let data = (0..height)
        .flat_map(|y| {
            (0..width).flat_map(move |x| [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        })
        .collect();
    PixelBuffer::bgr(width, height, data).expect("synthetic frame dimensions")
}

fn bench_transforms(c: &mut Criterion) {
    let frame = synthetic_frame();

    c.bench_function("extract_channel (640x480)", |b| {
        b.iter(|| extract_channel(black_box(&frame), Channel::Green).unwrap());
    });

    c.bench_function("crop (640x480 -> 320x240)", |b| {
        b.iter(|| crop(black_box(&frame), Region::new(160, 120, 480, 360)).unwrap());
    });

    c.bench_function("adjust_brightness (640x480)", |b| {
        let delta = BrightnessDelta::new(40).unwrap();
        b.iter(|| adjust_brightness(black_box(&frame), delta).unwrap());
    });

    c.bench_function("draw_circle (640x480)", |b| {
        b.iter(|| draw_circle(black_box(&frame), CircleSpec::new(320, 240, 200)).unwrap());
    });
}

fn bench_display(c: &mut Criterion) {
    let frame = synthetic_frame();

    c.bench_function("to_display (640x480 -> 800x600)", |b| {
        b.iter(|| to_display(black_box(&frame), 800, 600).unwrap());
    });
}

criterion_group!(benches, bench_transforms, bench_display);
criterion_main!(benches);
