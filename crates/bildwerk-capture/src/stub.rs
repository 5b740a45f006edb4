// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub camera backend for hosts where no camera driver is compiled in.
//
// Every open reports `DeviceUnavailable`.

use bildwerk_core::error::{BildwerkError, Result};

use crate::traits::{CameraBackend, CaptureDevice};

/// Backend returned when no native camera driver is available.
pub struct StubCamera;

impl CameraBackend for StubCamera {
    fn backend_name(&self) -> &str {
        "stub"
    }

    fn open(&self, index: u32) -> Result<Box<dyn CaptureDevice>> {
        tracing::warn!(index, "CameraBackend::open called on stub backend");
        Err(BildwerkError::DeviceUnavailable {
            index,
            detail: "no camera driver available on this platform".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_reports_unavailable() {
        let result = StubCamera.open(2);
        assert!(matches!(
            result,
            Err(BildwerkError::DeviceUnavailable { index: 2, .. })
        ));
    }
}
