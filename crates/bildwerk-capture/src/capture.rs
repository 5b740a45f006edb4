// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Single-frame capture: open the device, read exactly one frame, release.

use std::time::Duration;

use bildwerk_core::PixelBuffer;
use bildwerk_core::error::Result;
use tracing::{debug, info, instrument, warn};

use crate::traits::{CameraBackend, CaptureDevice};

/// Releases the wrapped device when dropped, on every exit path.
struct DeviceGuard {
    device: Box<dyn CaptureDevice>,
}

impl Drop for DeviceGuard {
    fn drop(&mut self) {
        self.device.release();
        debug!("Camera released");
    }
}

/// Capture one raw frame from camera `index`.
///
/// The device is opened, exactly one frame read is attempted with the given
/// `timeout`, and the device is released whether the read succeeded or not.
/// The frame is returned as the device produced it; canonicalise it before
/// transforming.
#[instrument(skip(backend), fields(camera_backend = backend.backend_name()))]
pub fn capture_from_device(
    backend: &dyn CameraBackend,
    index: u32,
    timeout: Duration,
) -> Result<PixelBuffer> {
    let device = backend.open(index).inspect_err(|err| {
        warn!(error = %err, "Camera open failed");
    })?;
    let mut guard = DeviceGuard { device };

    let frame = guard.device.read_frame(timeout).inspect_err(|err| {
        warn!(error = %err, "Frame read failed");
    })?;

    info!(
        width = frame.width(),
        height = frame.height(),
        channels = frame.channels(),
        "Frame captured"
    );
    Ok(frame)
}
