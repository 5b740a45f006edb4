// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bildwerk — Camera capture abstractions.
//
// Defines the capture collaborator traits, the scoped single-frame capture
// protocol, and the backend selection for the host platform.

pub mod capture;
pub mod stub;
pub mod traits;

pub use capture::capture_from_device;
pub use stub::StubCamera;
pub use traits::{CameraBackend, CaptureDevice};

/// Return the camera backend for this build.
///
/// No native driver is compiled in yet, so every host gets the stub, which
/// reports each device as unavailable.
pub fn platform_camera() -> Box<dyn CameraBackend> {
    Box::new(StubCamera)
}
