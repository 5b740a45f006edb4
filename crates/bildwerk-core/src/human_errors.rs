// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the shell.
//
// Every error is mapped to a plain summary plus an actionable suggestion. The
// core never shows these itself; the shell decides how to render them.

use crate::error::{BildwerkError, DecodeReason};
use crate::types::{MAX_BRIGHTNESS_DELTA, MIN_CROP_SPAN};

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something outside the program changed; trying again may work.
    Transient,
    /// The user entered a parameter that must be corrected.
    InvalidInput,
    /// Retrying with the same input will fail again.
    Permanent,
}

/// A human-readable error with a plain message and a suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Short summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives icon/colour in the shell).
    pub severity: Severity,
}

impl HumanError {
    fn new(message: impl Into<String>, suggestion: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
            severity,
        }
    }
}

/// Convert a `BildwerkError` into a `HumanError`.
pub fn humanize_error(err: &BildwerkError) -> HumanError {
    match err {
        BildwerkError::DecodeFailure { reason, .. } => humanize_decode(*reason),
        BildwerkError::DeviceUnavailable { index, .. } => HumanError::new(
            format!("Camera {index} is not available."),
            "Check that:\n\
             1. The camera is connected\n\
             2. The application is allowed to use the camera\n\
             3. No other program is using the camera",
            Severity::Transient,
        ),
        BildwerkError::FrameReadFailure(_) => HumanError::new(
            "Could not get a frame from the camera.",
            "Try again. If the camera keeps failing, reconnect it.",
            Severity::Transient,
        ),
        BildwerkError::UnsupportedChannelLayout { channels } => HumanError::new(
            format!("Images with {channels} colour channel(s) are not supported."),
            "Use a grayscale, colour, or colour-with-transparency image.",
            Severity::Permanent,
        ),
        BildwerkError::InvalidBuffer(_) => HumanError::new(
            "There is no image to display.",
            "Load an image or take a photo first.",
            Severity::Permanent,
        ),
        BildwerkError::InvalidViewport { width, height } => HumanError::new(
            format!("A {width}x{height} display area is too small to show an image."),
            "Give the viewport a width and height of at least 1 pixel, for example 800x600.",
            Severity::InvalidInput,
        ),
        BildwerkError::InvalidRegion { x1, y1, x2, y2, .. } => {
            let suggestion = if x1 >= x2 || y1 >= y2 {
                "The start coordinates must be smaller than the end coordinates.".to_string()
            } else {
                format!(
                    "The crop area must be at least {MIN_CROP_SPAN}x{MIN_CROP_SPAN} pixels and lie inside the image."
                )
            };
            HumanError::new("That crop area can't be used.", suggestion, Severity::InvalidInput)
        }
        BildwerkError::CircleOutOfBounds { radius, .. } => {
            let suggestion = if *radius == 0 {
                "The radius must be a positive number."
            } else {
                "Move the centre or shrink the radius so the circle stays inside the image."
            };
            HumanError::new(
                "The circle goes outside the image.",
                suggestion,
                Severity::InvalidInput,
            )
        }
        BildwerkError::InvalidChannel { index } => HumanError::new(
            format!("There is no colour channel {index}."),
            "Choose blue (0), green (1), or red (2).",
            Severity::InvalidInput,
        ),
        BildwerkError::InvalidBrightness(_) => HumanError::new(
            "That brightness value can't be used.",
            format!("Choose a value from 0 to {MAX_BRIGHTNESS_DELTA}."),
            Severity::InvalidInput,
        ),
        BildwerkError::NoImageLoaded => HumanError::new(
            "No image is loaded yet.",
            "Load an image or take a photo first.",
            Severity::InvalidInput,
        ),
        BildwerkError::Encode(detail) => HumanError::new(
            "The result could not be saved.",
            format!("Try a different file name or format. (Detail: {detail})"),
            Severity::Permanent,
        ),
        BildwerkError::Io(io) => HumanError::new(
            "A file could not be read or written.",
            format!("Check the path and permissions. (Detail: {io})"),
            Severity::Transient,
        ),
        BildwerkError::Serialization(detail) => HumanError::new(
            "The settings file is damaged.",
            format!("Fix or delete the settings file. (Detail: {detail})"),
            Severity::Permanent,
        ),
    }
}

fn humanize_decode(reason: DecodeReason) -> HumanError {
    match reason {
        DecodeReason::Unreadable => HumanError::new(
            "The image file could not be read.",
            "Check that the file exists and is not damaged.",
            Severity::Permanent,
        ),
        DecodeReason::UnsupportedFormat => HumanError::new(
            "This file format is not supported.",
            "Open a PNG or JPEG image instead.",
            Severity::Permanent,
        ),
        DecodeReason::PermissionDenied => HumanError::new(
            "You don't have permission to open this file.",
            "Check the file's access rights.",
            Severity::Permanent,
        ),
        DecodeReason::Malformed | DecodeReason::Unknown => HumanError::new(
            "The image could not be loaded.",
            "Possible reasons:\n\
             1. The file is damaged\n\
             2. The format is not supported\n\
             3. No permission to read the file",
            Severity::Permanent,
        ),
    }
}
