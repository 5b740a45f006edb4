// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bildwerk-image — Pixel pipeline for Bildwerk.
//
// Decodes image files into raw buffers, canonicalises them to 3-channel BGR,
// applies pure transforms (channel isolation, crop, brightness, circle
// annotation), and converts results into RGB buffers sized for a viewport.

pub mod canonical;
pub mod decode;
pub mod display;
pub mod hsv;
pub mod transform;

// Re-export the entry points so callers can use `bildwerk_image::normalize` etc.
pub use canonical::normalize;
pub use decode::{load_from_bytes, load_from_path};
pub use display::{fit_within, to_display, to_display_with};
pub use transform::{Operation, adjust_brightness, crop, draw_circle, extract_channel};
