// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware config file location and JSON persistence.

use std::path::{Path, PathBuf};

use bildwerk_core::PipelineConfig;
use bildwerk_core::error::Result;
use tracing::{debug, warn};

const CONFIG_FILE: &str = "config.json";

/// Return the configuration directory (not created).
pub fn config_dir() -> PathBuf {
    // Try XDG config dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("bildwerk");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config").join("bildwerk");
    }
    // Last resort
    PathBuf::from(".bildwerk")
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Load the config at `path`, falling back to defaults when the file is
/// missing or cannot be parsed.
pub fn load_config(path: &Path) -> PipelineConfig {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "No config file, using defaults");
            return PipelineConfig::default();
        }
    };
    serde_json::from_str(&data).unwrap_or_else(|err| {
        warn!(path = %path.display(), error = %err, "Config file unparsable, using defaults");
        PipelineConfig::default()
    })
}

/// Write `config` to `path` as pretty JSON, creating parent directories.
pub fn persist_config(path: &Path, config: &PipelineConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use bildwerk_core::DisplayFilter;

    use super::*;

    #[test]
    fn persist_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = PipelineConfig {
            camera_index: 2,
            viewport_width: 1280,
            display_filter: DisplayFilter::Lanczos3,
            ..PipelineConfig::default()
        };

        persist_config(&path, &config).unwrap();
        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(&dir.path().join("absent.json")), PipelineConfig::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config(&path), PipelineConfig::default());
    }
}
