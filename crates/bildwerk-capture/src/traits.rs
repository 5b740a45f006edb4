// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for camera capture.

use std::time::Duration;

use bildwerk_core::PixelBuffer;
use bildwerk_core::error::Result;

/// Opens camera devices by index.
pub trait CameraBackend {
    /// Human-readable backend name (e.g. "V4L2", "stub").
    fn backend_name(&self) -> &str;

    /// Open the device at `index`.
    ///
    /// Fails with `BildwerkError::DeviceUnavailable` when the device does not
    /// exist, is busy, or access is denied.
    fn open(&self, index: u32) -> Result<Box<dyn CaptureDevice>>;
}

/// An opened camera device.
pub trait CaptureDevice {
    /// Read one frame, waiting at most `timeout`.
    ///
    /// Frames keep the device's native channel count and order. Fails with
    /// `BildwerkError::FrameReadFailure` when no frame arrives in time or the
    /// driver reports an error.
    fn read_frame(&mut self, timeout: Duration) -> Result<PixelBuffer>;

    /// Give the device back to the system. Called exactly once per opened
    /// device by [`crate::capture_from_device`].
    fn release(&mut self);
}
