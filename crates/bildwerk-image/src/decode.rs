// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File decoding — turns encoded image bytes into raw pixel buffers using the
// `image` crate, keeping the decoded channel count.

use std::io;
use std::path::Path;

use bildwerk_core::error::{BildwerkError, DecodeReason, Result};
use bildwerk_core::{ChannelOrder, PixelBuffer};
use image::{DynamicImage, ImageError, ImageReader};
use tracing::{debug, info, instrument, warn};

/// Load an image file into a raw buffer.
///
/// The format is guessed from the file contents. The result keeps the
/// decoded channel count (gray, RGB, or RGBA; gray+alpha becomes BGRA) and
/// must be passed through [`crate::normalize`] before transforming.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_path(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();
    info!("Loading image");

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| decode_failure(reason_from_io(&err), format!("{}: {err}", path.display())))?;

    let image = reader
        .decode()
        .map_err(|err| decode_failure(reason_from_image(&err), format!("{}: {err}", path.display())))?;

    let buffer = into_raw_buffer(image)?;
    info!(
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels(),
        "Image loaded"
    );
    Ok(buffer)
}

/// Decode an in-memory encoded image (JPEG, PNG, etc.) into a raw buffer.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn load_from_bytes(data: &[u8]) -> Result<PixelBuffer> {
    let image = image::load_from_memory(data)
        .map_err(|err| decode_failure(reason_from_image(&err), err.to_string()))?;
    let buffer = into_raw_buffer(image)?;
    debug!(
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels(),
        "Image decoded from bytes"
    );
    Ok(buffer)
}

fn decode_failure(reason: DecodeReason, detail: String) -> BildwerkError {
    warn!(%reason, %detail, "Image decode failed");
    BildwerkError::DecodeFailure { reason, detail }
}

fn reason_from_io(err: &io::Error) -> DecodeReason {
    match err.kind() {
        io::ErrorKind::PermissionDenied => DecodeReason::PermissionDenied,
        io::ErrorKind::NotFound | io::ErrorKind::IsADirectory => DecodeReason::Unreadable,
        io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData => DecodeReason::Malformed,
        _ => DecodeReason::Unreadable,
    }
}

fn reason_from_image(err: &ImageError) -> DecodeReason {
    match err {
        ImageError::IoError(io) => reason_from_io(io),
        ImageError::Unsupported(_) => DecodeReason::UnsupportedFormat,
        ImageError::Decoding(_) => DecodeReason::Malformed,
        _ => DecodeReason::Unknown,
    }
}

/// Map a decoded image onto a raw buffer with the same channel count.
///
/// Samples deeper than 8 bits are reduced to 8 bits per channel.
fn into_raw_buffer(image: DynamicImage) -> Result<PixelBuffer> {
    let (width, height) = (image.width(), image.height());
    match image.color().channel_count() {
        1 => PixelBuffer::new(width, height, 1, ChannelOrder::Gray, image.into_luma8().into_raw()),
        2 => {
            // Gray+alpha expands to four channels, the layout OpenCV-style
            // decoders report for it.
            let data = image
                .into_luma_alpha8()
                .pixels()
                .flat_map(|pixel| {
                    let [luma, alpha] = pixel.0;
                    [luma, luma, luma, alpha]
                })
                .collect();
            PixelBuffer::new(width, height, 4, ChannelOrder::Bgra, data)
        }
        3 => PixelBuffer::new(width, height, 3, ChannelOrder::Rgb, image.into_rgb8().into_raw()),
        4 => PixelBuffer::new(width, height, 4, ChannelOrder::Rgba, image.into_rgba8().into_raw()),
        channels => Err(BildwerkError::UnsupportedChannelLayout { channels }),
    }
}
