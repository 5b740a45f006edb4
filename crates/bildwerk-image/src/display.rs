// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Presentation conversion — reorder to RGB and fit into a viewport.

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::{ChannelOrder, DisplayFilter, PixelBuffer};
use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::{debug, info, instrument};

use crate::canonical::normalize;

/// Largest `(width, height)` with the source aspect ratio that fits inside
/// the viewport. Scales up as well as down; never returns a zero dimension.
pub fn fit_within(width: u32, height: u32, viewport_width: u32, viewport_height: u32) -> (u32, u32) {
    let scale_x = f64::from(viewport_width) / f64::from(width);
    let scale_y = f64::from(viewport_height) / f64::from(height);
    let scale = scale_x.min(scale_y);

    let fit = |dim: u32, bound: u32| ((f64::from(dim) * scale).round() as u32).clamp(1, bound.max(1));
    (fit(width, viewport_width), fit(height, viewport_height))
}

/// Convert a buffer for display with the default (bilinear) filter.
pub fn to_display(buffer: &PixelBuffer, viewport_width: u32, viewport_height: u32) -> Result<PixelBuffer> {
    to_display_with(buffer, viewport_width, viewport_height, DisplayFilter::default())
}

/// Convert a buffer into an RGB buffer that fits inside the viewport.
///
/// Aspect ratio is preserved and nothing is cropped, so the result may be
/// narrower or shorter than the viewport; padding is left to the caller.
/// Non-canonical inputs with a supported layout are canonicalised first.
#[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn to_display_with(
    buffer: &PixelBuffer,
    viewport_width: u32,
    viewport_height: u32,
    filter: DisplayFilter,
) -> Result<PixelBuffer> {
    if viewport_width == 0 || viewport_height == 0 {
        return Err(BildwerkError::InvalidViewport {
            width: viewport_width,
            height: viewport_height,
        });
    }

    let canonical;
    let source = if buffer.is_canonical() {
        buffer
    } else {
        canonical = normalize(buffer)?;
        &canonical
    };

    let rgb: Vec<u8> = source
        .pixels()
        .flat_map(|px| [px[2], px[1], px[0]])
        .collect();
    let rgb = RgbImage::from_raw(source.width(), source.height(), rgb)
        .ok_or_else(|| BildwerkError::InvalidBuffer("buffer shorter than its dimensions".into()))?;

    let (target_w, target_h) = fit_within(source.width(), source.height(), viewport_width, viewport_height);
    let fitted = if (target_w, target_h) == rgb.dimensions() {
        debug!("Viewport matches image size, skipping resample");
        rgb
    } else {
        info!(target_w, target_h, ?filter, "Resampling for display");
        imageops::resize(&rgb, target_w, target_h, filter_type(filter))
    };

    let (width, height) = fitted.dimensions();
    PixelBuffer::new(width, height, 3, ChannelOrder::Rgb, fitted.into_raw())
}

fn filter_type(filter: DisplayFilter) -> FilterType {
    match filter {
        DisplayFilter::Nearest => FilterType::Nearest,
        DisplayFilter::Triangle => FilterType::Triangle,
        DisplayFilter::CatmullRom => FilterType::CatmullRom,
        DisplayFilter::Lanczos3 => FilterType::Lanczos3,
    }
}
