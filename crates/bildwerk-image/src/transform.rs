// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transform engine — channel isolation, crop, brightness, and circle
// annotation over canonical BGR buffers. Every operation borrows its input
// and returns a newly allocated buffer.

use bildwerk_core::error::Result;
use bildwerk_core::{BrightnessDelta, Channel, CircleSpec, PixelBuffer, Region};
use tracing::{debug, info, instrument};

use crate::canonical::{bgr_image, ensure_canonical, from_bgr_image};
use crate::hsv::{Hsv, bgr_to_hsv, hsv_to_bgr};

/// Outline colour for circle annotations: red, in BGR order.
pub const CIRCLE_COLOR: [u8; 3] = [0, 0, 255];

/// Width of the circle outline in pixels.
pub const CIRCLE_STROKE: u32 = 2;

/// A user action the shell can apply to the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ExtractChannel(Channel),
    Crop(Region),
    AdjustBrightness(BrightnessDelta),
    DrawCircle(CircleSpec),
}

impl Operation {
    /// Run this operation on `buffer`.
    pub fn apply(&self, buffer: &PixelBuffer) -> Result<PixelBuffer> {
        match *self {
            Operation::ExtractChannel(channel) => extract_channel(buffer, channel),
            Operation::Crop(region) => crop(buffer, region),
            Operation::AdjustBrightness(delta) => adjust_brightness(buffer, delta),
            Operation::DrawCircle(circle) => draw_circle(buffer, circle),
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ExtractChannel(_) => "extract_channel",
            Operation::Crop(_) => "crop",
            Operation::AdjustBrightness(_) => "adjust_brightness",
            Operation::DrawCircle(_) => "draw_circle",
        }
    }
}

/// Keep one channel and zero the other two.
#[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn extract_channel(buffer: &PixelBuffer, channel: Channel) -> Result<PixelBuffer> {
    ensure_canonical(buffer)?;
    let keep = channel.index();

    let data = buffer
        .pixels()
        .flat_map(|px| {
            let mut out = [0u8; 3];
            out[keep] = px[keep];
            out
        })
        .collect();

    debug!("Channel extracted");
    PixelBuffer::bgr(buffer.width(), buffer.height(), data)
}

/// Copy the sub-rectangle `[x1, x2) × [y1, y2)`.
///
/// The region is validated here regardless of any checks the caller made.
#[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn crop(buffer: &PixelBuffer, region: Region) -> Result<PixelBuffer> {
    let source = bgr_image(buffer)?;
    region.validate_within(buffer.width(), buffer.height())?;

    info!(
        x = region.x1,
        y = region.y1,
        crop_w = region.width(),
        crop_h = region.height(),
        "Cropping image"
    );
    let cropped = image::imageops::crop_imm(&source, region.x1, region.y1, region.width(), region.height())
        .to_image();
    from_bgr_image(cropped)
}

/// Raise the HSV value channel of every pixel by `delta`, saturating at 255.
///
/// Not invertible: values pushed past 255 are clipped, and the HSV round trip
/// quantises hue.
#[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn adjust_brightness(buffer: &PixelBuffer, delta: BrightnessDelta) -> Result<PixelBuffer> {
    ensure_canonical(buffer)?;
    let shift = delta.get();
    info!(shift, "Adjusting brightness");

    let data = buffer
        .pixels()
        .flat_map(|px| {
            let hsv = bgr_to_hsv([px[0], px[1], px[2]]);
            hsv_to_bgr(Hsv {
                v: hsv.v.saturating_add(shift),
                ..hsv
            })
        })
        .collect();

    PixelBuffer::bgr(buffer.width(), buffer.height(), data)
}

/// Draw a red circle outline [`CIRCLE_STROKE`] pixels wide.
///
/// Every pixel whose centre lies within `radius` of the circle centre but
/// farther than `radius - CIRCLE_STROKE` is painted, so the band is solid at
/// every angle and stays inside the validated disk.
#[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn draw_circle(buffer: &PixelBuffer, circle: CircleSpec) -> Result<PixelBuffer> {
    ensure_canonical(buffer)?;
    circle.validate_within(buffer.width(), buffer.height())?;

    let mut data = buffer.data().to_vec();
    let (cx, cy) = (u64::from(circle.center_x), u64::from(circle.center_y));
    let radius = u64::from(circle.radius);
    let inner = radius.saturating_sub(u64::from(CIRCLE_STROKE));
    let (outer_sq, inner_sq) = (radius * radius, inner * inner);
    let row_len = buffer.width() as usize * 3;

    for y in cy - radius..=cy + radius {
        let dy = y.abs_diff(cy);
        for x in cx - radius..=cx + radius {
            let dx = x.abs_diff(cx);
            let dist_sq = dx * dx + dy * dy;
            if dist_sq > outer_sq || (inner > 0 && dist_sq <= inner_sq) {
                continue;
            }
            let offset = y as usize * row_len + x as usize * 3;
            data[offset..offset + 3].copy_from_slice(&CIRCLE_COLOR);
        }
    }

    debug!(
        center_x = circle.center_x,
        center_y = circle.center_y,
        radius = circle.radius,
        "Circle drawn"
    );
    PixelBuffer::bgr(buffer.width(), buffer.height(), data)
}
