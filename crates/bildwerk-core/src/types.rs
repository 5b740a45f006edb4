// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: pixel buffers and the validated parameters that
// transforms accept.

use serde::{Deserialize, Serialize};

use crate::error::{BildwerkError, Result};

/// Smallest crop span accepted on either axis, in pixels.
pub const MIN_CROP_SPAN: u32 = 10;

/// Largest brightness shift accepted by [`BrightnessDelta`].
pub const MAX_BRIGHTNESS_DELTA: i32 = 100;

/// Channel order of an interleaved 8-bit buffer.
///
/// `Bgr` is the canonical order used by every transform. `Rgb` is the
/// presentation order produced for display surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelOrder {
    Gray,
    Bgr,
    Rgb,
    Bgra,
    Rgba,
    /// Layout reported by a collaborator that did not say what it is.
    Unknown,
}

impl ChannelOrder {
    /// Number of channels implied by this order, or `None` for `Unknown`.
    pub fn channel_count(self) -> Option<u8> {
        match self {
            ChannelOrder::Gray => Some(1),
            ChannelOrder::Bgr | ChannelOrder::Rgb => Some(3),
            ChannelOrder::Bgra | ChannelOrder::Rgba => Some(4),
            ChannelOrder::Unknown => None,
        }
    }
}

/// A row-major, interleaved, 8-bit-per-channel pixel buffer.
///
/// Buffers are immutable once built: transforms read one buffer and return
/// a freshly allocated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Build a buffer, checking that the dimensions, channel count, order tag,
    /// and data length agree.
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        order: ChannelOrder,
        data: Vec<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BildwerkError::InvalidBuffer(format!(
                "empty dimensions {width}x{height}"
            )));
        }
        if channels == 0 {
            return Err(BildwerkError::InvalidBuffer("zero channels".into()));
        }
        if let Some(expected) = order.channel_count() {
            if expected != channels {
                return Err(BildwerkError::InvalidBuffer(format!(
                    "{order:?} order needs {expected} channel(s), got {channels}"
                )));
            }
        }
        let expected_len = width as usize * height as usize * channels as usize;
        if data.len() != expected_len {
            return Err(BildwerkError::InvalidBuffer(format!(
                "expected {expected_len} bytes for {width}x{height}x{channels}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            order,
            data,
        })
    }

    /// Build a canonical (3-channel BGR) buffer.
    pub fn bgr(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, 3, ChannelOrder::Bgr, data)
    }

    /// Build a buffer where every pixel holds the same channel values.
    pub fn filled(width: u32, height: u32, order: ChannelOrder, pixel: &[u8]) -> Result<Self> {
        let pixel_count = width as usize * height as usize;
        let channels = u8::try_from(pixel.len())
            .map_err(|_| BildwerkError::InvalidBuffer("too many channels".into()))?;
        let data = pixel.repeat(pixel_count);
        Self::new(width, height, channels, order, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Borrow the raw interleaved bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the raw bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Whether this buffer is in the canonical 3-channel BGR layout.
    pub fn is_canonical(&self) -> bool {
        self.channels == 3 && self.order == ChannelOrder::Bgr
    }

    /// Channel values of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let stride = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * stride;
        Some(&self.data[start..start + stride])
    }

    /// Iterate over pixels as channel slices in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.channels as usize)
    }
}

/// One colour channel of a canonical (BGR) buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Blue,
    Green,
    Red,
}

impl Channel {
    /// Position of this channel within a canonical BGR pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Blue => 0,
            Channel::Green => 1,
            Channel::Red => 2,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = BildwerkError;

    fn try_from(index: u8) -> Result<Self> {
        match index {
            0 => Ok(Channel::Blue),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Red),
            _ => Err(BildwerkError::InvalidChannel { index }),
        }
    }
}

/// Rectangular crop region `[x1, x2) × [y1, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Region {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Check the region is ordered, at least [`MIN_CROP_SPAN`] on both axes,
    /// and lies inside a `width` x `height` buffer.
    pub fn validate_within(&self, width: u32, height: u32) -> Result<()> {
        let reject = |detail: String| BildwerkError::InvalidRegion {
            x1: self.x1,
            y1: self.y1,
            x2: self.x2,
            y2: self.y2,
            detail,
        };

        if self.x1 >= self.x2 || self.y1 >= self.y2 {
            return Err(reject("start corner must be above and left of end corner".into()));
        }
        if self.width() < MIN_CROP_SPAN || self.height() < MIN_CROP_SPAN {
            return Err(reject(format!(
                "region must be at least {MIN_CROP_SPAN}x{MIN_CROP_SPAN} pixels"
            )));
        }
        if self.x2 > width || self.y2 > height {
            return Err(reject(format!("region exceeds image bounds {width}x{height}")));
        }
        Ok(())
    }
}

/// Circle annotation geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub center_x: u32,
    pub center_y: u32,
    pub radius: u32,
}

impl CircleSpec {
    pub fn new(center_x: u32, center_y: u32, radius: u32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Check the radius is positive and the whole disk fits inside a
    /// `width` x `height` buffer without clipping.
    pub fn validate_within(&self, width: u32, height: u32) -> Result<()> {
        let Self {
            center_x,
            center_y,
            radius,
        } = *self;
        let fits = radius > 0
            && center_x >= radius
            && center_y >= radius
            && u64::from(center_x) + u64::from(radius) < u64::from(width)
            && u64::from(center_y) + u64::from(radius) < u64::from(height);

        if fits {
            Ok(())
        } else {
            Err(BildwerkError::CircleOutOfBounds {
                center_x,
                center_y,
                radius,
                width,
                height,
            })
        }
    }
}

/// Additive value-channel shift in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrightnessDelta(u8);

impl BrightnessDelta {
    pub fn new(value: i32) -> Result<Self> {
        if (0..=MAX_BRIGHTNESS_DELTA).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(BildwerkError::InvalidBrightness(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_rejects_length_mismatch() {
        let err = PixelBuffer::new(2, 2, 3, ChannelOrder::Bgr, vec![0; 11]).unwrap_err();
        assert!(matches!(err, BildwerkError::InvalidBuffer(_)));
    }

    #[test]
    fn buffer_rejects_order_channel_disagreement() {
        let err = PixelBuffer::new(1, 1, 4, ChannelOrder::Bgr, vec![0; 4]).unwrap_err();
        assert!(matches!(err, BildwerkError::InvalidBuffer(_)));
    }

    #[test]
    fn buffer_rejects_empty_dimensions() {
        let err = PixelBuffer::new(0, 5, 1, ChannelOrder::Gray, Vec::new()).unwrap_err();
        assert!(matches!(err, BildwerkError::InvalidBuffer(_)));
    }

    #[test]
    fn unknown_order_accepts_any_channel_count() {
        let buf = PixelBuffer::new(1, 1, 2, ChannelOrder::Unknown, vec![1, 2]).unwrap();
        assert_eq!(buf.channels(), 2);
        assert!(!buf.is_canonical());
    }

    #[test]
    fn pixel_lookup() {
        let buf = PixelBuffer::bgr(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buf.pixel(1, 0), Some(&[4u8, 5, 6][..]));
        assert_eq!(buf.pixel(2, 0), None);
    }

    #[test]
    fn channel_from_index() {
        assert_eq!(Channel::try_from(1).unwrap(), Channel::Green);
        assert!(matches!(
            Channel::try_from(3),
            Err(BildwerkError::InvalidChannel { index: 3 })
        ));
    }

    #[test]
    fn region_minimum_span() {
        assert!(Region::new(0, 0, 10, 10).validate_within(20, 20).is_ok());
        assert!(matches!(
            Region::new(0, 0, 9, 10).validate_within(20, 20),
            Err(BildwerkError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn region_must_be_ordered_and_in_bounds() {
        assert!(Region::new(15, 0, 5, 10).validate_within(20, 20).is_err());
        assert!(Region::new(0, 0, 21, 10).validate_within(20, 20).is_err());
        assert!(Region::new(10, 10, 20, 20).validate_within(20, 20).is_ok());
    }

    #[test]
    fn circle_left_edge_violation() {
        for y in [0, 5, 10, 50] {
            assert!(matches!(
                CircleSpec::new(0, y, 5).validate_within(100, 100),
                Err(BildwerkError::CircleOutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn circle_right_edge_is_exclusive() {
        // center + radius must be strictly less than the width.
        assert!(CircleSpec::new(15, 10, 5).validate_within(20, 20).is_err());
        assert!(CircleSpec::new(14, 10, 5).validate_within(20, 20).is_ok());
        assert!(CircleSpec::new(10, 10, 0).validate_within(20, 20).is_err());
    }

    #[test]
    fn brightness_range() {
        assert_eq!(BrightnessDelta::new(100).unwrap().get(), 100);
        assert!(BrightnessDelta::new(0).is_ok());
        assert!(matches!(
            BrightnessDelta::new(101),
            Err(BildwerkError::InvalidBrightness(101))
        ));
        assert!(BrightnessDelta::new(-1).is_err());
    }
}
