// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bildwerk.

use thiserror::Error;

/// Why a file could not be decoded into a pixel buffer.
///
/// Best-effort: when the codec cannot tell the causes apart the reason is
/// `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeReason {
    /// The file does not exist or could not be read.
    #[error("file unreadable")]
    Unreadable,
    /// The bytes are not in a format the codec understands.
    #[error("unsupported format")]
    UnsupportedFormat,
    /// The process lacks permission to read the file.
    #[error("permission denied")]
    PermissionDenied,
    /// The format was recognised but the data is corrupt or truncated.
    #[error("malformed image data")]
    Malformed,
    #[error("decode failed")]
    Unknown,
}

/// Top-level error type for all Bildwerk operations.
#[derive(Debug, Error)]
pub enum BildwerkError {
    // -- Acquisition --
    #[error("image decode failed ({reason}): {detail}")]
    DecodeFailure { reason: DecodeReason, detail: String },

    #[error("camera {index} unavailable: {detail}")]
    DeviceUnavailable { index: u32, detail: String },

    #[error("failed to read a frame from the camera: {0}")]
    FrameReadFailure(String),

    // -- Buffer layout --
    #[error("unsupported channel layout: {channels} channel(s)")]
    UnsupportedChannelLayout { channels: u8 },

    #[error("invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    #[error("viewport {width}x{height} has no area")]
    InvalidViewport { width: u32, height: u32 },

    // -- Transform parameters --
    #[error("invalid crop region ({x1}, {y1})-({x2}, {y2}): {detail}")]
    InvalidRegion {
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        detail: String,
    },

    #[error("circle at ({center_x}, {center_y}) with radius {radius} does not fit inside {width}x{height}")]
    CircleOutOfBounds {
        center_x: u32,
        center_y: u32,
        radius: u32,
        width: u32,
        height: u32,
    },

    #[error("channel index {index} out of range (expected 0, 1, or 2)")]
    InvalidChannel { index: u8 },

    #[error("brightness delta {0} out of range (expected 0..=100)")]
    InvalidBrightness(i32),

    // -- Shell --
    #[error("no image loaded")]
    NoImageLoaded,

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BildwerkError>;
