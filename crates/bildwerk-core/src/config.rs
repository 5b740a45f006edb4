// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration supplied by the shell.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Resampling filter used when fitting an image into a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFilter {
    Nearest,
    /// Bilinear; matches what toolkits call "smooth" scaling.
    #[default]
    Triangle,
    CatmullRom,
    Lanczos3,
}

/// Persistent settings for acquisition and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Camera device index used for capture (default 0).
    pub camera_index: u32,
    /// Upper bound on a single frame read, in milliseconds.
    pub frame_timeout_ms: u64,
    /// Width of the display viewport in pixels.
    pub viewport_width: u32,
    /// Height of the display viewport in pixels.
    pub viewport_height: u32,
    /// Filter for display resampling.
    pub display_filter: DisplayFilter,
}

impl PipelineConfig {
    pub fn frame_timeout(&self) -> Duration {
        Duration::from_millis(self.frame_timeout_ms)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            frame_timeout_ms: 5_000,
            viewport_width: 800,
            viewport_height: 600,
            display_filter: DisplayFilter::Triangle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{ "viewport_width": 1024, "display_filter": "lanczos3" }"#)
                .unwrap();
        assert_eq!(config.viewport_width, 1024);
        assert_eq!(config.viewport_height, 600);
        assert_eq!(config.display_filter, DisplayFilter::Lanczos3);
        assert_eq!(config.frame_timeout(), Duration::from_secs(5));
    }
}
