// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session state — the current image and the most recent transform result.

use std::path::Path;

use bildwerk_capture::{CameraBackend, capture_from_device};
use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::{DisplayFilter, PipelineConfig, PixelBuffer};
use bildwerk_image::{Operation, load_from_path, normalize, to_display_with};
use tracing::{info, instrument};

/// Holds the two image slots the shell works with.
///
/// `current` is the last canonicalised acquisition; `processed` is the last
/// successful transform of it. A failed call leaves both slots untouched.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<PixelBuffer>,
    processed: Option<PixelBuffer>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&PixelBuffer> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn processed(&self) -> Option<&PixelBuffer> {
        self.processed.as_ref()
    }

    /// Load and canonicalise an image file as the new current image.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&PixelBuffer> {
        let raw = load_from_path(path)?;
        let canonical = normalize(&raw)?;
        Ok(self.replace_current(canonical))
    }

    /// Capture one camera frame and canonicalise it as the new current image.
    #[instrument(skip(self, backend, config))]
    pub fn capture(
        &mut self,
        backend: &dyn CameraBackend,
        index: u32,
        config: &PipelineConfig,
    ) -> Result<&PixelBuffer> {
        let raw = capture_from_device(backend, index, config.frame_timeout())?;
        let canonical = normalize(&raw)?;
        Ok(self.replace_current(canonical))
    }

    /// Apply `op` to the current image and store the result as processed.
    #[instrument(skip(self, op), fields(op = op.name()))]
    pub fn apply(&mut self, op: Operation) -> Result<&PixelBuffer> {
        let current = self.current.as_ref().ok_or(BildwerkError::NoImageLoaded)?;
        let result = op.apply(current)?;
        info!(
            width = result.width(),
            height = result.height(),
            "Transform applied"
        );
        let stored: &PixelBuffer = self.processed.insert(result);
        Ok(stored)
    }

    /// Display-ready copy of the current image.
    pub fn display_current(&self, width: u32, height: u32, filter: DisplayFilter) -> Result<PixelBuffer> {
        display_slot(self.current.as_ref(), width, height, filter)
    }

    /// Display-ready copy of the processed image.
    pub fn display_processed(&self, width: u32, height: u32, filter: DisplayFilter) -> Result<PixelBuffer> {
        display_slot(self.processed.as_ref(), width, height, filter)
    }

    fn replace_current(&mut self, canonical: PixelBuffer) -> &PixelBuffer {
        info!(
            width = canonical.width(),
            height = canonical.height(),
            "Current image replaced"
        );
        self.processed = None;
        self.current.insert(canonical)
    }
}

fn display_slot(
    slot: Option<&PixelBuffer>,
    width: u32,
    height: u32,
    filter: DisplayFilter,
) -> Result<PixelBuffer> {
    let buffer = slot.ok_or_else(|| BildwerkError::InvalidBuffer("no image to display".into()))?;
    to_display_with(buffer, width, height, filter)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bildwerk_capture::{CaptureDevice, StubCamera};
    use bildwerk_core::{Channel, ChannelOrder, Region};
    use image::{Rgb, RgbImage};

    use super::*;

    struct GrayCamera;
    struct GrayDevice;

    impl CameraBackend for GrayCamera {
        fn backend_name(&self) -> &str {
            "gray"
        }

        fn open(&self, _index: u32) -> Result<Box<dyn CaptureDevice>> {
            Ok(Box::new(GrayDevice))
        }
    }

    impl CaptureDevice for GrayDevice {
        fn read_frame(&mut self, _timeout: Duration) -> Result<PixelBuffer> {
            PixelBuffer::filled(16, 12, ChannelOrder::Gray, &[40])
        }

        fn release(&mut self) {}
    }

    fn loaded_session() -> Session {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.png");
        RgbImage::from_pixel(20, 20, Rgb([30, 20, 10])).save(&path).unwrap();

        let mut session = Session::new();
        session.load_file(&path).unwrap();
        session
    }

    #[test]
    fn load_canonicalises_file() {
        let session = loaded_session();
        let current = session.current().unwrap();
        assert!(current.is_canonical());
        assert!(current.pixels().all(|px| px == [10, 20, 30]));
        assert!(session.processed().is_none());
    }

    #[test]
    fn apply_without_image_fails() {
        let mut session = Session::new();
        let err = session
            .apply(Operation::ExtractChannel(Channel::Red))
            .unwrap_err();
        assert!(matches!(err, BildwerkError::NoImageLoaded));
    }

    #[test]
    fn apply_reads_from_current_not_processed() {
        let mut session = loaded_session();
        session.apply(Operation::ExtractChannel(Channel::Blue)).unwrap();
        let red = session.apply(Operation::ExtractChannel(Channel::Red)).unwrap();
        assert!(red.pixels().all(|px| px == [0, 0, 30]));
    }

    #[test]
    fn failed_transform_leaves_slots_unchanged() {
        let mut session = loaded_session();
        session.apply(Operation::Crop(Region::new(0, 0, 10, 10))).unwrap();
        let before_current = session.current().cloned();
        let before_processed = session.processed().cloned();

        let err = session
            .apply(Operation::Crop(Region::new(0, 0, 5, 5)))
            .unwrap_err();
        assert!(matches!(err, BildwerkError::InvalidRegion { .. }));
        assert_eq!(session.current().cloned(), before_current);
        assert_eq!(session.processed().cloned(), before_processed);
    }

    #[test]
    fn failed_load_keeps_current_image() {
        let mut session = loaded_session();
        let before = session.current().cloned();
        assert!(session.load_file("/nonexistent/bildwerk.png").is_err());
        assert_eq!(session.current().cloned(), before);
    }

    #[test]
    fn capture_replaces_current_and_clears_processed() {
        let mut session = loaded_session();
        session.apply(Operation::ExtractChannel(Channel::Green)).unwrap();

        let config = PipelineConfig::default();
        let frame = session.capture(&GrayCamera, 0, &config).unwrap();
        assert_eq!((frame.width(), frame.height()), (16, 12));
        assert!(session.processed().is_none());
    }

    #[test]
    fn stub_capture_failure_keeps_current_image() {
        let mut session = loaded_session();
        let before = session.current().cloned();
        let err = session
            .capture(&StubCamera, 0, &PipelineConfig::default())
            .unwrap_err();
        assert!(matches!(err, BildwerkError::DeviceUnavailable { .. }));
        assert_eq!(session.current().cloned(), before);
    }

    #[test]
    fn display_of_empty_slot_is_invalid() {
        let session = Session::new();
        assert!(matches!(
            session.display_processed(100, 100, DisplayFilter::Triangle),
            Err(BildwerkError::InvalidBuffer(_))
        ));
    }

    #[test]
    fn zero_viewport_is_reported_as_viewport_error() {
        let session = loaded_session();
        assert!(matches!(
            session.display_current(0, 600, DisplayFilter::Triangle),
            Err(BildwerkError::InvalidViewport { width: 0, height: 600 })
        ));
    }

    #[test]
    fn display_current_is_rgb() {
        let session = loaded_session();
        let shown = session
            .display_current(20, 20, DisplayFilter::Triangle)
            .unwrap();
        assert_eq!(shown.order(), ChannelOrder::Rgb);
        assert!(shown.pixels().all(|px| px == [30, 20, 10]));
    }
}
