// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canonicalisation — every buffer entering the transform engine is 3-channel,
// interleaved, in BGR order (index 0 = blue, 1 = green, 2 = red).

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::{ChannelOrder, PixelBuffer};
use image::RgbImage;
use tracing::{debug, instrument};

/// Normalise a raw buffer into the canonical 3-channel BGR layout.
///
/// - 1 channel: the value is replicated into all three channels.
/// - 3 channels: BGR (or untagged) passes through; RGB is swapped to BGR.
/// - 4 channels: the alpha channel is dropped without blending; RGBA is
///   also swapped to BGR.
/// - Anything else fails with `UnsupportedChannelLayout`.
///
/// Always returns a new buffer; normalising a canonical buffer yields an
/// equal one.
#[instrument(skip(raw), fields(channels = raw.channels(), order = ?raw.order()))]
pub fn normalize(raw: &PixelBuffer) -> Result<PixelBuffer> {
    let src = raw.data();
    let data: Vec<u8> = match (raw.channels(), raw.order()) {
        (1, _) => src.iter().flat_map(|&v| [v, v, v]).collect(),
        (3, ChannelOrder::Rgb) => src
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect(),
        (3, _) => src.to_vec(),
        (4, ChannelOrder::Rgba) => src
            .chunks_exact(4)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect(),
        (4, _) => src
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        (channels, _) => return Err(BildwerkError::UnsupportedChannelLayout { channels }),
    };

    debug!(width = raw.width(), height = raw.height(), "Buffer canonicalised");
    PixelBuffer::bgr(raw.width(), raw.height(), data)
}

/// Reject buffers that are not in the canonical layout.
pub(crate) fn ensure_canonical(buffer: &PixelBuffer) -> Result<()> {
    if buffer.is_canonical() {
        Ok(())
    } else {
        Err(BildwerkError::UnsupportedChannelLayout {
            channels: buffer.channels(),
        })
    }
}

/// Copy a canonical buffer into an owned `image` buffer for drawing.
pub(crate) fn bgr_image(buffer: &PixelBuffer) -> Result<RgbImage> {
    ensure_canonical(buffer)?;
    RgbImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec())
        .ok_or_else(|| BildwerkError::InvalidBuffer("buffer shorter than its dimensions".into()))
}

/// Wrap an owned `image` buffer holding BGR bytes as a canonical buffer.
pub(crate) fn from_bgr_image(image: RgbImage) -> Result<PixelBuffer> {
    let (width, height) = image.dimensions();
    PixelBuffer::bgr(width, height, image.into_raw())
}
